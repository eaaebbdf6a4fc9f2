//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod player_repository;

pub use player_repository::PlayerRepository;

#[cfg(test)]
pub use player_repository::MockPlayerRepository;

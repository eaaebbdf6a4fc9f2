//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries, so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`SqlitePlayerRepository`] - Player storage and retrieval

pub mod sqlite_player_repository;

pub use sqlite_player_repository::SqlitePlayerRepository;

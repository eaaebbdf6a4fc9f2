//! Core domain entities.
//!
//! Entities are plain data structures without persistence or transport
//! concerns. Request and response shapes live in [`crate::api::dto`].

pub mod player;

pub use player::Player;

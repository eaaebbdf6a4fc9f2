//! Business logic services for the application layer.

pub mod player_service;

pub use player_service::{PLAYERS_CACHE_KEY, PlayerService};

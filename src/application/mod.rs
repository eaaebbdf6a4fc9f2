//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the cache capability and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::player_service::PlayerService`] - Player CRUD with read-through caching

pub mod services;

//! # Players API
//!
//! A CRUD Web API over squad players, built with Axum and SQLite, with a
//! read-through cache in front of the player collection.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Player entity and repository trait
//! - **Application Layer** ([`application`]) - Player service and cache policy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and cache backends
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Caching
//!
//! `GET /players` is served from cache after the first load. Any successful
//! create, update or delete invalidates the cached collection; single-player
//! lookups always go to the database.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://players.db"
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory cache otherwise
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PLAYERS_CACHE_KEY, PlayerService};
    pub use crate::domain::entities::Player;
    pub use crate::domain::repositories::PlayerRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, InMemoryCache, NullCache};
    pub use crate::state::AppState;
}

//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::PlayerService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::SqlitePlayerRepository;

/// State shared by every request.
///
/// `cache` is the same instance the player service was built with; handlers
/// only use it for health reporting.
#[derive(Clone)]
pub struct AppState {
    pub player_service: Arc<PlayerService<SqlitePlayerRepository>>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        player_service: Arc<PlayerService<SqlitePlayerRepository>>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            player_service,
            cache,
        }
    }
}

//! Player management service with read-through caching.

use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::PlayerRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use tracing::{debug, warn};

/// Cache key holding the full player collection.
pub const PLAYERS_CACHE_KEY: &str = "players";

/// Service for reading and mutating players.
///
/// # Caching Policy
///
/// - [`Self::retrieve_all`] is read-through: a hit never touches the store,
///   a miss loads from the store and populates [`PLAYERS_CACHE_KEY`].
/// - Single-record lookups always query the store.
/// - Every successful mutation invalidates [`PLAYERS_CACHE_KEY`]; a failed
///   mutation leaves the cache untouched.
///
/// A miss racing with a mutation is last-writer-wins: a fill that started
/// before an invalidation may store the older collection until the next
/// mutation or expiry.
pub struct PlayerService<R: PlayerRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
}

impl<R: PlayerRepository> PlayerService<R> {
    /// Creates a new player service.
    ///
    /// `cache_ttl_seconds` is the expiration applied to the cached collection.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, cache_ttl_seconds: u64) -> Self {
        Self {
            repository,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Inserts a new player.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is taken; the cache is not
    /// invalidated in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, player: Player) -> Result<(), AppError> {
        let id = player.id;
        self.repository.add(player).await?;
        debug!("Player {} created", id);

        self.invalidate_players().await;
        Ok(())
    }

    /// Returns every player, served from cache when possible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors during a cache miss.
    pub async fn retrieve_all(&self) -> Result<Vec<Player>, AppError> {
        if let Some(players) = self.cached_players().await {
            return Ok(players);
        }

        let players = self.repository.find_all().await?;
        self.store_players(&players).await;

        Ok(players)
    }

    /// Looks up a player by id. Never consults the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn retrieve_by_id(&self, id: i64) -> Result<Option<Player>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Looks up a player by squad number. Never consults the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn retrieve_by_squad_number(
        &self,
        squad_number: i32,
    ) -> Result<Option<Player>, AppError> {
        self.repository.find_by_squad_number(squad_number).await
    }

    /// Replaces an existing player.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the player does not exist; the cache
    /// is not invalidated in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, player: Player) -> Result<(), AppError> {
        let id = player.id;
        self.repository.update(player).await?;
        debug!("Player {} updated", id);

        self.invalidate_players().await;
        Ok(())
    }

    /// Deletes a player.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the player does not exist; the cache
    /// is not invalidated in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.remove(id).await?;
        debug!("Player {} deleted", id);

        self.invalidate_players().await;
        Ok(())
    }

    /// Counts stored players. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Reads the cached collection. Backend errors and undecodable values
    /// count as misses.
    async fn cached_players(&self) -> Option<Vec<Player>> {
        match self.cache.get(PLAYERS_CACHE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Player>>(&raw) {
                Ok(players) => {
                    metrics::counter!("players_cache_hits_total").increment(1);
                    debug!("Serving {} players from cache", players.len());
                    Some(players)
                }
                Err(e) => {
                    warn!("Discarding undecodable cached players: {}", e);
                    metrics::counter!("players_cache_misses_total").increment(1);
                    None
                }
            },
            Ok(None) => {
                metrics::counter!("players_cache_misses_total").increment(1);
                None
            }
            Err(e) => {
                warn!("Cache read failed, falling back to store: {}", e);
                metrics::counter!("players_cache_misses_total").increment(1);
                None
            }
        }
    }

    async fn store_players(&self, players: &[Player]) {
        let raw = match serde_json::to_string(players) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize players for cache: {}", e);
                return;
            }
        };

        if let Err(e) = self
            .cache
            .set(PLAYERS_CACHE_KEY, &raw, Some(self.cache_ttl_seconds))
            .await
        {
            warn!("Cache write failed: {}", e);
        }
    }

    async fn invalidate_players(&self) {
        if let Err(e) = self.cache.invalidate(PLAYERS_CACHE_KEY).await {
            warn!("Cache invalidation failed: {}", e);
        }
    }
}

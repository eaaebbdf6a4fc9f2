//! Repository trait for player persistence.

use crate::domain::entities::Player;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing players.
///
/// Implementations never cache; caching policy belongs to
/// [`crate::application::services::PlayerService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqlitePlayerRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_player.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Lists every player in persistence order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Player>, AppError>;

    /// Finds a player by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, AppError>;

    /// Finds the first player wearing the given squad number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_squad_number(&self, squad_number: i32) -> Result<Option<Player>, AppError>;

    /// Inserts a new player.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a player with the same id already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn add(&self, player: Player) -> Result<(), AppError>;

    /// Replaces every field of the player matched by `player.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no player has that id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, player: Player) -> Result<(), AppError>;

    /// Deletes a player.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no player has that id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove(&self, id: i64) -> Result<(), AppError>;

    /// Counts stored players.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}

//! SQLite implementation of the player repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::PlayerRepository;
use crate::error::AppError;

const PLAYER_COLUMNS: &str = "id, first_name, middle_name, last_name, date_of_birth, \
     squad_number, position, abbr_position, team, league, starting11";

#[derive(Debug, FromRow)]
struct PlayerRow {
    id: i64,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    date_of_birth: Option<NaiveDate>,
    squad_number: i32,
    position: String,
    abbr_position: String,
    team: Option<String>,
    league: Option<String>,
    starting11: bool,
}

impl From<PlayerRow> for Player {
    fn from(r: PlayerRow) -> Self {
        Player {
            id: r.id,
            first_name: r.first_name,
            middle_name: r.middle_name,
            last_name: r.last_name,
            date_of_birth: r.date_of_birth,
            squad_number: r.squad_number,
            position: r.position,
            abbr_position: r.abbr_position,
            team: r.team,
            league: r.league,
            starting11: r.starting11,
        }
    }
}

/// SQLite repository for players.
///
/// Writes are serialized by SQLite itself; no extra locking is done here.
pub struct SqlitePlayerRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePlayerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn find_all(&self) -> Result<Vec<Player>, AppError> {
        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, AppError> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Player::from))
    }

    async fn find_by_squad_number(&self, squad_number: i32) -> Result<Option<Player>, AppError> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE squad_number = ?1 ORDER BY id LIMIT 1"
        ))
        .bind(squad_number)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Player::from))
    }

    async fn add(&self, player: Player) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players
                (id, first_name, middle_name, last_name, date_of_birth, squad_number,
                 position, abbr_position, team, league, starting11)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(player.id)
        .bind(&player.first_name)
        .bind(&player.middle_name)
        .bind(&player.last_name)
        .bind(player.date_of_birth)
        .bind(player.squad_number)
        .bind(&player.position)
        .bind(&player.abbr_position)
        .bind(&player.team)
        .bind(&player.league)
        .bind(player.starting11)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(
                "Player already exists",
                json!({"id": player.id}),
            ));
        }

        Ok(())
    }

    async fn update(&self, player: Player) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE players SET
                first_name    = ?2,
                middle_name   = ?3,
                last_name     = ?4,
                date_of_birth = ?5,
                squad_number  = ?6,
                position      = ?7,
                abbr_position = ?8,
                team          = ?9,
                league        = ?10,
                starting11    = ?11
            WHERE id = ?1
            "#,
        )
        .bind(player.id)
        .bind(&player.first_name)
        .bind(&player.middle_name)
        .bind(&player.last_name)
        .bind(player.date_of_birth)
        .bind(player.squad_number)
        .bind(&player.position)
        .bind(&player.abbr_position)
        .bind(&player.team)
        .bind(&player.league)
        .bind(player.starting11)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Player not found",
                json!({"id": player.id}),
            ));
        }

        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Player not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

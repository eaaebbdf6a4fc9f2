#![allow(dead_code)]

use chrono::NaiveDate;
use players_api::application::services::PlayerService;
use players_api::domain::entities::Player;
use players_api::infrastructure::cache::{CacheService, InMemoryCache};
use players_api::infrastructure::persistence::SqlitePlayerRepository;
use players_api::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub const TEST_CACHE_TTL: u64 = 600;

/// Number of players seeded by the migration.
pub const SEEDED_PLAYERS: usize = 11;

/// Fresh in-memory database with the schema and seed data applied.
///
/// A single long-lived connection keeps the in-memory database alive.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_cache(pool, Arc::new(InMemoryCache::new(TEST_CACHE_TTL)))
}

pub fn create_test_state_with_cache(pool: SqlitePool, cache: Arc<dyn CacheService>) -> AppState {
    let repository = Arc::new(SqlitePlayerRepository::new(Arc::new(pool)));
    let player_service = Arc::new(PlayerService::new(
        repository,
        cache.clone(),
        TEST_CACHE_TTL,
    ));

    AppState::new(player_service, cache)
}

/// A substitute not present in the seed data.
pub fn new_player(id: i64) -> Player {
    Player {
        id,
        first_name: "Leandro".to_string(),
        middle_name: Some("Daniel".to_string()),
        last_name: "Paredes".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 29),
        squad_number: 5,
        position: "Defensive Midfield".to_string(),
        abbr_position: "DM".to_string(),
        team: Some("AS Roma".to_string()),
        league: Some("Serie A".to_string()),
        starting11: false,
    }
}

/// Inserts a player with raw SQL, bypassing the service and its cache.
pub async fn insert_player_directly(pool: &SqlitePool, id: i64, first_name: &str, squad_number: i32) {
    sqlx::query(
        "INSERT INTO players (id, first_name, last_name, squad_number, position, abbr_position, starting11) \
         VALUES (?1, ?2, 'Test', ?3, 'Goalkeeper', 'GK', FALSE)",
    )
    .bind(id)
    .bind(first_name)
    .bind(squad_number)
    .execute(pool)
    .await
    .unwrap();
}

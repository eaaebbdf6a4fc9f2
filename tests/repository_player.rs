mod common;

use chrono::NaiveDate;
use players_api::domain::repositories::PlayerRepository;
use players_api::error::AppError;
use players_api::infrastructure::persistence::SqlitePlayerRepository;
use std::sync::Arc;

async fn create_repo() -> SqlitePlayerRepository {
    SqlitePlayerRepository::new(Arc::new(common::create_test_pool().await))
}

#[tokio::test]
async fn test_find_all_returns_seeded_players_in_id_order() {
    let repo = create_repo().await;

    let players = repo.find_all().await.unwrap();

    assert_eq!(players.len(), common::SEEDED_PLAYERS);
    let ids: Vec<i64> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=11).collect::<Vec<i64>>());
    assert!(players.iter().all(|p| p.starting11));
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = create_repo().await;

    let player = repo.find_by_id(1).await.unwrap().unwrap();

    assert_eq!(player.first_name, "Damián");
    assert_eq!(player.middle_name.as_deref(), Some("Emiliano"));
    assert_eq!(player.last_name, "Martínez");
    assert_eq!(player.date_of_birth, NaiveDate::from_ymd_opt(1992, 9, 2));
    assert_eq!(player.abbr_position, "GK");
}

#[tokio::test]
async fn test_find_by_id_absent() {
    let repo = create_repo().await;

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_squad_number() {
    let repo = create_repo().await;

    let player = repo.find_by_squad_number(10).await.unwrap().unwrap();

    assert_eq!(player.last_name, "Messi");
    assert!(repo.find_by_squad_number(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_add_player() {
    let repo = create_repo().await;

    repo.add(common::new_player(12)).await.unwrap();

    let stored = repo.find_by_id(12).await.unwrap().unwrap();
    assert_eq!(stored, common::new_player(12));
    assert_eq!(repo.count().await.unwrap(), 12);
}

#[tokio::test]
async fn test_add_duplicate_id_conflicts() {
    let repo = create_repo().await;

    let result = repo.add(common::new_player(1)).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    let original = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(original.first_name, "Damián");
}

#[tokio::test]
async fn test_update_player() {
    let repo = create_repo().await;

    let mut player = repo.find_by_id(1).await.unwrap().unwrap();
    player.first_name = "Emiliano".to_string();
    player.middle_name = None;

    repo.update(player).await.unwrap();

    let updated = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(updated.first_name, "Emiliano");
    assert!(updated.middle_name.is_none());
    assert_eq!(updated.last_name, "Martínez");
}

#[tokio::test]
async fn test_update_missing_player_not_found() {
    let repo = create_repo().await;

    let result = repo.update(common::new_player(999)).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_remove_player() {
    let repo = create_repo().await;

    repo.remove(11).await.unwrap();

    assert!(repo.find_by_id(11).await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 10);
}

#[tokio::test]
async fn test_remove_missing_player_not_found() {
    let repo = create_repo().await;

    let result = repo.remove(999).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

//! Handlers for player endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use validator::Validate;

use crate::api::dto::player::{PlayerRequest, PlayerResponse};
use crate::domain::entities::Player;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all players.
///
/// # Endpoint
///
/// `GET /players`
///
/// Served from cache when the collection has been loaded since the last
/// successful write.
pub async fn list_players_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let players = state.player_service.retrieve_all().await?;

    Ok(Json(players.into_iter().map(PlayerResponse::from).collect()))
}

/// Fetches a single player by id.
///
/// # Endpoint
///
/// `GET /players/{id}`
///
/// # Errors
///
/// Returns 404 if the player does not exist.
pub async fn get_player_handler(
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    State(state): State<AppState>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = state
        .player_service
        .retrieve_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Player not found", json!({"id": id})))?;

    Ok(Json(player.into()))
}

/// Fetches a single player by squad number.
///
/// # Endpoint
///
/// `GET /players/squad/{squad_number}`
///
/// # Errors
///
/// Returns 404 if no player wears that number.
pub async fn get_player_by_squad_number_handler(
    WithRejection(Path(squad_number), _): WithRejection<Path<i32>, AppError>,
    State(state): State<AppState>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = state
        .player_service
        .retrieve_by_squad_number(squad_number)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                "Player not found",
                json!({"squad_number": squad_number}),
            )
        })?;

    Ok(Json(player.into()))
}

/// Creates a player.
///
/// # Endpoint
///
/// `POST /players`
///
/// Responds with `201 Created`, a `Location` header pointing at the new
/// resource, and the created player.
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 409 if a player with the same id already exists.
pub async fn create_player_handler(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<PlayerRequest>, AppError>,
) -> Result<(StatusCode, HeaderMap, Json<PlayerResponse>), AppError> {
    payload.validate()?;

    let player: Player = payload.into();
    state.player_service.create(player.clone()).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/players/{}", player.id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(player.into())))
}

/// Replaces a player.
///
/// # Endpoint
///
/// `PUT /players/{id}`
///
/// # Errors
///
/// Returns 400 if the body is malformed, fails validation, or its id differs
/// from the path id.
/// Returns 404 if the player does not exist.
pub async fn update_player_handler(
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<PlayerRequest>, AppError>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    if payload.id != id {
        return Err(AppError::bad_request(
            "Player id in body does not match path",
            json!({"path_id": id, "body_id": payload.id}),
        ));
    }

    state.player_service.update(payload.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a player.
///
/// # Endpoint
///
/// `DELETE /players/{id}`
///
/// # Errors
///
/// Returns 404 if the player does not exist.
pub async fn delete_player_handler(
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.player_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

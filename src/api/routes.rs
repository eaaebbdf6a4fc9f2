//! API route configuration.

use crate::api::handlers::{
    create_player_handler, delete_player_handler, get_player_by_squad_number_handler,
    get_player_handler, list_players_handler, update_player_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Player CRUD routes.
///
/// # Endpoints
///
/// - `GET    /players`                       - List players (cached)
/// - `POST   /players`                       - Create a player
/// - `GET    /players/{id}`                  - Fetch a player by id
/// - `PUT    /players/{id}`                  - Replace a player
/// - `DELETE /players/{id}`                  - Delete a player
/// - `GET    /players/squad/{squad_number}`  - Fetch a player by squad number
pub fn player_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/players",
            get(list_players_handler).post(create_player_handler),
        )
        .route(
            "/players/{id}",
            get(get_player_handler)
                .put(update_player_handler)
                .delete(delete_player_handler),
        )
        .route(
            "/players/squad/{squad_number}",
            get(get_player_by_squad_number_handler),
        )
}

//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod players;

pub use health::health_handler;
pub use players::{
    create_player_handler, delete_player_handler, get_player_by_squad_number_handler,
    get_player_handler, list_players_handler, update_player_handler,
};

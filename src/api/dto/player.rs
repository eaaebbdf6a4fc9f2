//! DTOs for player endpoints.

use crate::domain::entities::Player;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Two or three upper-case letters, e.g. `GK`, `CB`, `CAM`.
static ABBR_POSITION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,3}$").unwrap());

/// Request body for `POST /players` and `PUT /players/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlayerRequest {
    #[validate(range(min = 1, message = "Id must be a positive number"))]
    pub id: i64,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(max = 100))]
    pub middle_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(range(min = 1, max = 99))]
    pub squad_number: i32,

    #[validate(length(min = 1, max = 50))]
    pub position: String,

    #[validate(regex(path = "*ABBR_POSITION_REGEX", message = "Expected 2-3 upper-case letters"))]
    pub abbr_position: String,

    pub team: Option<String>,

    pub league: Option<String>,

    #[serde(default)]
    pub starting11: bool,
}

impl From<PlayerRequest> for Player {
    fn from(r: PlayerRequest) -> Self {
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

/// Player representation returned by the API.
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub full_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub squad_number: i32,
    pub position: String,
    pub abbr_position: String,
    pub team: Option<String>,
    pub league: Option<String>,
    pub starting11: bool,
}

impl From<Player> for PlayerResponse {
    fn from(p: Player) -> Self {
        PlayerResponse {
            full_name: p.full_name(),
            id: p.id,
            first_name: p.first_name,
            middle_name: p.middle_name,
            last_name: p.last_name,
            date_of_birth: p.date_of_birth,
            squad_number: p.squad_number,
            position: p.position,
            abbr_position: p.abbr_position,
            team: p.team,
            league: p.league,
            starting11: p.starting11,
        }
    }
}

//! Player entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A squad member.
///
/// Identity is the caller-supplied `id`; every other field may change through
/// an update. Players are cached by value, so the entity is serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
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

impl Player {
    /// Returns first, middle (when present) and last name joined by spaces.
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

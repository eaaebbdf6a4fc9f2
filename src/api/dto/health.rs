//! DTOs for the health check endpoint.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Healthy,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: OverallStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
    pub cache: CacheCheck,
}

impl HealthChecks {
    /// Healthy only when every component reports [`ComponentStatus::Ok`].
    pub fn overall(&self) -> OverallStatus {
        if self.database.status == ComponentStatus::Ok && self.cache.status == ComponentStatus::Ok {
            OverallStatus::Healthy
        } else {
            OverallStatus::Degraded
        }
    }
}

/// Store reachability, with the player count when the query succeeded.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: ComponentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<i64>,
    pub message: String,
}

impl DatabaseCheck {
    pub fn connected(players: i64) -> Self {
        Self {
            status: ComponentStatus::Ok,
            players: Some(players),
            message: format!("Connected, {} players", players),
        }
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            status: ComponentStatus::Error,
            players: None,
            message: format!("Database error: {}", reason),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CacheCheck {
    pub status: ComponentStatus,
    pub backend: &'static str,
    pub message: String,
}

impl CacheCheck {
    pub fn new(backend: &'static str, reachable: bool) -> Self {
        let (status, state) = if reachable {
            (ComponentStatus::Ok, "ready")
        } else {
            (ComponentStatus::Error, "unreachable")
        };

        Self {
            status,
            backend,
            message: format!("{} backend {}", backend, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_status() {
        let mut checks = HealthChecks {
            database: DatabaseCheck::connected(11),
            cache: CacheCheck::new("memory", true),
        };
        assert_eq!(checks.overall(), OverallStatus::Healthy);

        checks.cache = CacheCheck::new("redis", false);
        assert_eq!(checks.overall(), OverallStatus::Degraded);
        assert_eq!(checks.cache.message, "redis backend unreachable");

        checks.cache = CacheCheck::new("redis", true);
        checks.database = DatabaseCheck::failed("pool closed");
        assert_eq!(checks.overall(), OverallStatus::Degraded);
    }

    #[test]
    fn test_serialized_shape() {
        let response = HealthResponse {
            status: OverallStatus::Degraded,
            version: "0.1.0",
            checks: HealthChecks {
                database: DatabaseCheck::failed("pool closed"),
                cache: CacheCheck::new("disabled", true),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
        assert!(json["checks"]["database"].get("players").is_none());
        assert_eq!(json["checks"]["cache"]["backend"], "disabled");
    }
}

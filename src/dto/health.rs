use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

use super::format_timestamp;

/// Endpoints advertised by the `/health` route.
const ENDPOINTS: [&str; 6] = [
    "GET /api/games - Get all games",
    "GET /api/games/{id} - Get game by ID",
    "POST /api/games - Create new game",
    "PUT /api/games/{id} - Update game",
    "DELETE /api/games/{id} - Delete game",
    "GET /swagger - API Documentation",
];

/// Health response returned by the `/health` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("Healthy" or "Degraded").
    pub status: String,
    /// Human-readable status line.
    pub message: String,
    /// RFC 3339 UTC timestamp of the probe.
    pub timestamp: String,
    /// Routes exposed by the service.
    pub endpoints: Vec<String>,
}

impl HealthResponse {
    /// Create a health response indicating the game data file is usable.
    pub fn healthy() -> Self {
        Self::new("Healthy", "Game Store API is running!")
    }

    /// Create a health response indicating the game data file cannot be reached.
    pub fn degraded() -> Self {
        Self::new(
            "Degraded",
            "Game Store API is running but game data is unavailable",
        )
    }

    fn new(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            message: message.to_string(),
            timestamp: format_timestamp(OffsetDateTime::now_utc()),
            endpoints: ENDPOINTS.iter().map(|endpoint| endpoint.to_string()).collect(),
        }
    }
}

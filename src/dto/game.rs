use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::models::{DEFAULT_RELEASE_DATE, GameEntity, release_date};

/// Body accepted when creating or replacing a game.
///
/// Omitted fields take their empty value. Any `id` sent by the client is ignored:
/// creation assigns a new one and replacement keeps the id from the path.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    /// Ignored by the server.
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub publisher: String,
    /// RFC 3339 timestamp; a timestamp without offset is read as UTC.
    #[serde(default = "default_release_date", with = "release_date")]
    #[schema(value_type = String, format = DateTime)]
    pub release_date: OffsetDateTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
}

/// Game as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Server-assigned identifier.
    pub id: i32,
    pub name: String,
    pub genre: String,
    pub platform: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub developer: String,
    pub publisher: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub release_date: OffsetDateTime,
    pub description: String,
    pub rating: f64,
}

fn default_release_date() -> OffsetDateTime {
    DEFAULT_RELEASE_DATE
}

impl From<GameRequest> for GameEntity {
    fn from(request: GameRequest) -> Self {
        Self {
            id: 0,
            name: request.name,
            genre: request.genre,
            platform: request.platform,
            price: request.price,
            developer: request.developer,
            publisher: request.publisher,
            release_date: request.release_date,
            description: request.description,
            rating: request.rating,
        }
    }
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            genre: entity.genre,
            platform: entity.platform,
            price: entity.price,
            developer: entity.developer,
            publisher: entity.publisher,
            release_date: entity.release_date,
            description: entity.description,
            rating: entity.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_without_name_fails_validation() {
        let request: GameRequest = serde_json::from_value(json!({ "genre": "Board" })).unwrap();
        assert!(request.validate().is_err());

        let request: GameRequest = serde_json::from_value(json!({ "name": "Chess" })).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_id_is_dropped_on_conversion() {
        let request: GameRequest =
            serde_json::from_value(json!({ "id": 12, "name": "Chess", "price": 5 })).unwrap();
        let entity = GameEntity::from(request);

        assert_eq!(entity.id, 0);
        assert_eq!(entity.price, Decimal::new(5, 0));
    }
}

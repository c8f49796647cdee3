use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
///
/// A missing game is not an error at this layer: lookups return `Option`/`bool`
/// and the route layer decides how to report it.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backing document could not be read, parsed or written.
    #[error("storage failure")]
    Storage(#[from] StorageError),
    /// The highest stored id leaves no room for another game.
    #[error("no game id left after {highest}")]
    IdSpaceExhausted {
        /// Highest id currently stored.
        highest: i32,
    },
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Not-found error for a game id, worded for API clients.
    pub fn game_not_found(id: i32) -> Self {
        AppError::NotFound(format!("Game with ID {id} not found."))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(source) => {
                error!(error = %source, cause = ?std::error::Error::source(&source), "game storage failure");
                AppError::Internal("game data is unavailable".into())
            }
            ServiceError::IdSpaceExhausted { highest } => {
                error!(highest, "cannot assign a new game id");
                AppError::Internal("no game id available".into())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Build the health payload, reporting degraded when the game data file cannot be reached.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.game_store().health_check().await {
        Ok(()) => HealthResponse::healthy(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::{
        dao::game_store::{JsonFileStore, MemoryGameStore},
        state::AppState,
    };

    #[tokio::test]
    async fn reports_healthy_with_reachable_store() {
        let state = AppState::new(Arc::new(MemoryGameStore::new()));
        let status = health_status(&state).await;

        assert_eq!(status.status, "Healthy");
        assert_eq!(status.endpoints.len(), 6);
    }

    #[tokio::test]
    async fn reports_degraded_when_data_path_is_a_directory() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(Arc::new(JsonFileStore::new(dir.path())));

        assert_eq!(health_status(&state).await.status, "Degraded");
    }
}

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{game_store::GameStore, models::GameEntity, storage::StorageResult};

/// In-process store holding the collection in memory, used when no data file is wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<RwLock<Vec<GameEntity>>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `games`.
    pub fn with_games(games: Vec<GameEntity>) -> Self {
        Self {
            games: Arc::new(RwLock::new(games)),
        }
    }
}

impl GameStore for MemoryGameStore {
    fn load_all(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let games = self.games.clone();
        Box::pin(async move { Ok(games.read().await.clone()) })
    }

    fn save_all(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>> {
        let slot = self.games.clone();
        Box::pin(async move {
            *slot.write().await = games;
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

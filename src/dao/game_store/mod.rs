/// Store over a single JSON document on disk.
pub mod json_file;
/// In-memory store.
pub mod memory;

use crate::dao::models::GameEntity;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

pub use self::json_file::JsonFileStore;
pub use self::memory::MemoryGameStore;

/// Abstraction over the document holding the full game collection.
///
/// Backends only know how to read and replace the whole collection; id
/// assignment and lookups live in the service layer.
pub trait GameStore: Send + Sync {
    /// Load every game, in persisted order. A missing or empty document yields an empty list.
    fn load_all(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Replace the persisted collection with `games`.
    fn save_all(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>>;
    /// Check that the backing document is reachable.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}

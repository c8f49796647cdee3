use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::dao::game_store::GameStore;

/// Reference-counted handle to [`AppState`] passed to every handler.
pub type SharedState = Arc<AppState>;

/// Central application state holding the storage backend shared by every request.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    write_gate: Mutex<()>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(game_store: Arc<dyn GameStore>) -> SharedState {
        Arc::new(Self {
            game_store,
            write_gate: Mutex::new(()),
        })
    }

    /// Handle to the installed game store.
    pub fn game_store(&self) -> Arc<dyn GameStore> {
        self.game_store.clone()
    }

    /// Acquire the process-wide write gate.
    ///
    /// Mutations hold the guard across their whole load, mutate and save sequence so two
    /// concurrent writers cannot both read the same snapshot and lose each other's update.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }
}

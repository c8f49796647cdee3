/// Game collection storage backends.
pub mod game_store;
/// Persisted record definitions.
pub mod models;
/// Storage error types shared by every backend.
pub mod storage;

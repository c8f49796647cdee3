//! Library crate for game-store-api, exposing modules for binaries and integration tests.

/// Runtime configuration.
pub mod config;
/// Persistence of the game collection.
pub mod dao;
mod dto;
mod error;
/// HTTP routes.
pub mod routes;
/// Business logic behind the routes.
pub mod services;
/// Shared application state.
pub mod state;

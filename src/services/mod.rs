/// OpenAPI documentation generation.
pub mod documentation;
/// CRUD operations over the game collection.
pub mod game_service;
/// Health check service.
pub mod health_service;

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{config::AppConfig, state::SharedState};

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Game catalogue CRUD routes.
pub mod game;
/// Health probe route.
pub mod health;

/// Compose all route trees, wiring in shared state, documentation routes and static files.
pub fn router(state: SharedState, config: &AppConfig) -> Router<()> {
    let mut app_router = health::router().merge(game::router());

    if config.swagger_enabled() {
        app_router = app_router.merge(docs::router(state.clone()));
    }

    app_router
        .route("/", get(|| async { Redirect::to("/index.html") }))
        .fallback_service(ServeDir::new(config.static_dir()))
        .with_state(state)
}

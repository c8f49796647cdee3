use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::game::{GameRequest, GameResponse},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes exposing the game catalogue under `/api/games`.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route(
            "/api/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
}

/// List every game in the catalogue.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses((status = 200, description = "List of all games", body = [GameResponse]))
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let games = game_service::list_games(&state).await?;
    Ok(Json(games.into_iter().map(Into::into).collect()))
}

/// Retrieve a single game by its ID.
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game details", body = GameResponse),
        (status = 404, description = "Game not found")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<GameResponse>, AppError> {
    let Path(id) = path?;
    game_service::get_game(&state, id)
        .await?
        .map(|game| Json(game.into()))
        .ok_or_else(|| AppError::game_not_found(id))
}

/// Add a game to the catalogue; the server assigns its ID.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = GameRequest,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 400, description = "Invalid game payload")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    payload: Result<Json<GameRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<GameResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = game_service::create_game(&state, payload.into()).await?;
    let location = format!("/api/games/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.into()),
    ))
}

/// Replace every field of an existing game. The ID in the path wins over any ID in the body.
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i32, Path, description = "Game ID")),
    request_body = GameRequest,
    responses(
        (status = 200, description = "Game updated", body = GameResponse),
        (status = 400, description = "Invalid game payload"),
        (status = 404, description = "Game not found")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<GameRequest>, JsonRejection>,
) -> Result<Json<GameResponse>, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    payload.validate()?;

    game_service::update_game(&state, id, payload.into())
        .await?
        .map(|game| Json(game.into()))
        .ok_or_else(|| AppError::game_not_found(id))
}

/// Remove a game from the catalogue.
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "Game not found")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    if game_service::delete_game(&state, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::game_not_found(id))
    }
}

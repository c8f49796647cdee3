//! CRUD operations over the game collection. Every operation reloads the full
//! collection from the store; mutations then rewrite it in full while holding
//! the shared write gate.

use tracing::{debug, info};

use crate::{dao::models::GameEntity, error::ServiceError, state::SharedState};

/// Return every stored game in persisted order.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameEntity>, ServiceError> {
    let games = state.game_store().load_all().await?;
    debug!(count = games.len(), "listed games");
    Ok(games)
}

/// Look a game up by id. `None` means no such game.
pub async fn get_game(state: &SharedState, id: i32) -> Result<Option<GameEntity>, ServiceError> {
    let games = list_games(state).await?;
    Ok(games.into_iter().find(|game| game.id == id))
}

/// Append `game` with a freshly assigned id and persist the collection.
///
/// Any id carried by `game` is ignored; the new id is one past the highest stored id.
pub async fn create_game(
    state: &SharedState,
    mut game: GameEntity,
) -> Result<GameEntity, ServiceError> {
    let _gate = state.lock_writes().await;
    let store = state.game_store();

    let mut games = store.load_all().await?;
    game.id = next_id(&games)?;
    games.push(game.clone());
    store.save_all(games).await?;

    info!(id = game.id, name = %game.name, "game created");
    Ok(game)
}

/// Overwrite every field of game `id` except the id itself.
///
/// Returns `None` without touching the store when the game does not exist.
pub async fn update_game(
    state: &SharedState,
    id: i32,
    game: GameEntity,
) -> Result<Option<GameEntity>, ServiceError> {
    let _gate = state.lock_writes().await;
    let store = state.game_store();

    let mut games = store.load_all().await?;
    let Some(existing) = games.iter_mut().find(|existing| existing.id == id) else {
        debug!(id, "update skipped; game not found");
        return Ok(None);
    };

    existing.replace_with(game);
    let updated = existing.clone();
    store.save_all(games).await?;

    info!(id, "game updated");
    Ok(Some(updated))
}

/// Remove game `id`. Returns `false` without touching the store when it does not exist.
pub async fn delete_game(state: &SharedState, id: i32) -> Result<bool, ServiceError> {
    let _gate = state.lock_writes().await;
    let store = state.game_store();

    let mut games = store.load_all().await?;
    let Some(position) = games.iter().position(|game| game.id == id) else {
        debug!(id, "delete skipped; game not found");
        return Ok(false);
    };

    games.remove(position);
    store.save_all(games).await?;

    info!(id, "game deleted");
    Ok(true)
}

fn next_id(games: &[GameEntity]) -> Result<i32, ServiceError> {
    let highest = games.iter().map(|game| game.id).max().unwrap_or(0);
    highest
        .checked_add(1)
        .ok_or(ServiceError::IdSpaceExhausted { highest })
}

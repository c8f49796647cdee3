//! Game store persisting the whole collection as a single pretty-printed JSON array.

use std::{
    ffi::OsString,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tokio::fs;
use tracing::debug;

use crate::dao::{
    game_store::GameStore,
    models::GameEntity,
    storage::{StorageError, StorageResult},
};

const TEMP_SUFFIX: &str = ".tmp";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// File-backed store. Every load reads the full document and every save rewrites it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<Path>,
}

impl JsonFileStore {
    /// Create a store over the document at `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::from(path.into()),
        }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_games(&self) -> StorageResult<Vec<GameEntity>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "game data file not found; using empty collection");
                return Ok(Vec::new());
            }
            Err(source) => return Err(StorageError::io(&*self.path, source)),
        };

        let contents = contents.trim_start_matches(BYTE_ORDER_MARK);
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        // A literal `null` document is an empty collection too.
        let games = serde_json::from_str::<Option<Vec<GameEntity>>>(contents)
            .map_err(|source| StorageError::format(&*self.path, source))?;
        Ok(games.unwrap_or_default())
    }

    async fn write_games(&self, games: &[GameEntity]) -> StorageResult<()> {
        let payload = serde_json::to_string_pretty(games)
            .map_err(|source| StorageError::format(&*self.path, source))?;

        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::io(parent, source))?;
        }

        // Write next to the target then rename so readers never see a partial document.
        let staging = staging_path(&self.path);
        fs::write(&staging, payload)
            .await
            .map_err(|source| StorageError::io(&staging, source))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|source| StorageError::io(&*self.path, source))?;

        debug!(path = %self.path.display(), count = games.len(), "game data file rewritten");
        Ok(())
    }

    async fn probe(&self) -> StorageResult<()> {
        match fs::metadata(&self.path).await {
            Ok(metadata) if metadata.is_file() => fs::File::open(&self.path)
                .await
                .map(|_| ())
                .map_err(|source| StorageError::io(&*self.path, source)),
            Ok(_) => Err(StorageError::io(
                &*self.path,
                io::Error::other("game data path is not a regular file"),
            )),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::io(&*self.path, source)),
        }
    }
}

impl GameStore for JsonFileStore {
    fn load_all(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.read_games().await })
    }

    fn save_all(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.write_games(&games).await })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.probe().await })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("games.json"));
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

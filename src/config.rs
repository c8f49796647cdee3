//! Application-level configuration loading: data file location, listen port and HTTP extras.

use std::{
    env,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_STORE_CONFIG_PATH";
/// Environment variable that overrides the game data file.
const DATA_FILE_ENV: &str = "GAME_DATA_FILE";
/// Environment variable that overrides the listen port.
const PORT_ENV: &str = "PORT";

const DEFAULT_DATA_FILE: &str = "games.json";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "wwwroot";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    data_file: PathBuf,
    port: u16,
    static_dir: PathBuf,
    swagger: bool,
}

impl AppConfig {
    /// Load the configuration from disk, falling back to built-in defaults, then apply
    /// environment overrides.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        data_file = %app_config.data_file.display(),
                        "loaded configuration file"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.with_env_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`; empty or unparsable values are ignored.
    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(data_file) = lookup(DATA_FILE_ENV).filter(|value| !value.is_empty()) {
            self.data_file = PathBuf::from(data_file);
        }

        match lookup(PORT_ENV).map(|value| value.parse::<u16>()) {
            Some(Ok(port)) => self.port = port,
            Some(Err(err)) => warn!(error = %err, "ignoring invalid {PORT_ENV} value"),
            None => {}
        }

        self
    }

    /// Replace the game data file location.
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Replace the directory served as static content.
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    /// Path of the JSON document holding the game collection.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// TCP port the HTTP server listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Directory served for requests no API route matches.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Whether the Swagger UI and OpenAPI document are exposed.
    pub fn swagger_enabled(&self) -> bool {
        self.swagger
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            swagger: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    data_file: Option<PathBuf>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    swagger: Option<bool>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            data_file: value.data_file.unwrap_or(defaults.data_file),
            port: value.port.unwrap_or(defaults.port),
            static_dir: value.static_dir.unwrap_or(defaults.static_dir),
            swagger: value.swagger.unwrap_or(defaults.swagger),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

//! Configuration loading and API key resolution
//!
//! Bootstrap configuration lives in a single TOML file. The file path is
//! resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. `REELSCOUT_CONFIG` environment variable
//! 3. `<config dir>/reelscout/config.toml` (OS-dependent)
//!
//! A missing file is not fatal: built-in defaults are used and a warning is
//! logged. A file that exists but does not parse is a configuration error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "REELSCOUT_CONFIG";

/// Environment variable carrying the TMDb API key
pub const API_KEY_ENV: &str = "REELSCOUT_TMDB_API_KEY";

pub const DEFAULT_LISTING_URL: &str = "http://www.edmovieguide.com/movies/?sort=release-date";
pub const DEFAULT_METADATA_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_MOVIE_LINK_BASE: &str = "https://www.themoviedb.org/movie/";

const APP_DIR: &str = "reelscout";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TomlConfig {
    /// TMDb API key (overridden by `REELSCOUT_TMDB_API_KEY`)
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// Page listing the movies currently playing
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Base URL of the TMDb v3 API
    #[serde(default = "default_metadata_base_url")]
    pub metadata_base_url: String,

    /// Prefix joined with a TMDb movie id to build the reference link
    #[serde(default = "default_movie_link_base")]
    pub movie_link_base: String,

    /// Sender and recipient list
    #[serde(default)]
    pub addresses_file: Option<PathBuf>,

    /// Directory the outbox notifier writes messages into
    #[serde(default)]
    pub outbox_dir: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            listing_url: default_listing_url(),
            metadata_base_url: default_metadata_base_url(),
            movie_link_base: default_movie_link_base(),
            addresses_file: None,
            outbox_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

fn default_listing_url() -> String {
    DEFAULT_LISTING_URL.to_string()
}

fn default_metadata_base_url() -> String {
    DEFAULT_METADATA_BASE_URL.to_string()
}

fn default_movie_link_base() -> String {
    DEFAULT_MOVIE_LINK_BASE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Address file, falling back to `<config dir>/reelscout/emails.txt`
    pub fn addresses_path(&self) -> PathBuf {
        self.addresses_file.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .map(|d| d.join(APP_DIR).join("emails.txt"))
                .unwrap_or_else(|| PathBuf::from("emails.txt"))
        })
    }

    /// Outbox directory, falling back to `<local data dir>/reelscout/outbox`
    pub fn outbox_path(&self) -> PathBuf {
        self.outbox_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|d| d.join(APP_DIR).join("outbox"))
                .unwrap_or_else(|| PathBuf::from("./reelscout_outbox"))
        })
    }
}

/// Resolve which config file to read
///
/// Returns `None` when no candidate can be determined (no CLI argument, no
/// environment variable and no platform config directory).
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Load TOML config from `path`
///
/// Missing file → warning + defaults. Unreadable or malformed file → error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            "Config file {} not found, using built-in defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;

    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Resolve the TMDb API key
///
/// **Priority:** ENV → TOML
pub fn resolve_api_key(toml_config: &TomlConfig) -> Result<String> {
    resolve_api_key_from(std::env::var(API_KEY_ENV).ok(), toml_config)
}

/// Resolve the TMDb API key from an already-read environment value
pub fn resolve_api_key_from(env_key: Option<String>, toml_config: &TomlConfig) -> Result<String> {
    let env_key = env_key.filter(|k| is_valid_key(k));
    let toml_key = toml_config
        .tmdb_api_key
        .as_ref()
        .filter(|k| is_valid_key(k));

    if env_key.is_some() && toml_key.is_some() {
        warn!("TMDb API key found in environment and TOML. Using environment (highest priority).");
    }

    if let Some(key) = env_key {
        info!("TMDb API key loaded from environment variable");
        return Ok(key.trim().to_string());
    }

    if let Some(key) = toml_key {
        info!("TMDb API key loaded from TOML config");
        return Ok(key.trim().to_string());
    }

    Err(Error::Config(format!(
        "TMDb API key not configured. Set {} or add tmdb_api_key = \"your-key\" to the config file.",
        API_KEY_ENV
    )))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

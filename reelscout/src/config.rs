//! Run configuration for reelscout
//!
//! Resolved once at startup from the TOML bootstrap file and the environment,
//! then passed explicitly to the services that need it.

use reelscout_common::config::{resolve_api_key, TomlConfig};
use reelscout_common::Result;
use std::path::PathBuf;

/// Settings for the TMDb search client and the rating resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// TMDb v3 API key
    pub api_key: String,
    /// Base URL of the TMDb v3 API (no trailing slash needed)
    pub metadata_base_url: String,
    /// Prefix joined with a movie id to form the reference link
    pub movie_link_base: String,
}

/// Everything a run needs, resolved up front
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub listing_url: String,
    pub resolver: ResolverConfig,
    pub addresses_file: PathBuf,
    pub outbox_dir: PathBuf,
}

impl ScoutConfig {
    /// Resolve from the bootstrap TOML, reading the API key from the
    /// environment first
    pub fn resolve(toml_config: &TomlConfig) -> Result<Self> {
        let api_key = resolve_api_key(toml_config)?;
        Ok(Self::with_api_key(toml_config, api_key))
    }

    /// Build from the bootstrap TOML with an already-resolved API key
    pub fn with_api_key(toml_config: &TomlConfig, api_key: String) -> Self {
        Self {
            listing_url: toml_config.listing_url.clone(),
            resolver: ResolverConfig {
                api_key,
                metadata_base_url: toml_config.metadata_base_url.clone(),
                movie_link_base: toml_config.movie_link_base.clone(),
            },
            addresses_file: toml_config.addresses_path(),
            outbox_dir: toml_config.outbox_path(),
        }
    }
}

//! TMDb search client
//!
//! One `GET /search/movie` per query: first page only, adult titles excluded,
//! release year as a filter. No retries and no timeout override.
//!
//! This product uses the TMDb API but is not endorsed or certified by TMDb.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::models::{RatingQuery, SearchResponse};

pub const USER_AGENT: &str = concat!("reelscout/", env!("CARGO_PKG_VERSION"));

/// TMDb client errors
#[derive(Debug, Error)]
pub enum TmdbError {
    /// Network communication error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// TMDb returned a non-success status
    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Movie search against a metadata service
#[async_trait]
pub trait MetadataSearch: Send + Sync {
    async fn search_movie(&self, query: &RatingQuery) -> Result<SearchResponse, TmdbError>;
}

/// TMDb v3 API client
pub struct TmdbClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(config: &ResolverConfig) -> Result<Self, TmdbError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TmdbError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.metadata_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full search URL for `query`
    ///
    /// Title, year and key are percent-encoded (a space becomes `%20`). An
    /// empty year is sent as an empty `primary_release_year`.
    pub fn search_url(&self, query: &RatingQuery) -> String {
        format!(
            "{}/search/movie?api_key={}&language=en-US&query={}&page=1&include_adult=false&primary_release_year={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&query.title),
            urlencoding::encode(&query.year),
        )
    }
}

#[async_trait]
impl MetadataSearch for TmdbClient {
    async fn search_movie(&self, query: &RatingQuery) -> Result<SearchResponse, TmdbError> {
        // URL carries the API key, keep it out of the logs
        debug!(title = %query.title, year = %query.year, "Querying TMDb search");

        let response = self
            .http_client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| TmdbError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TmdbError::ApiError(status.as_u16(), error_text));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| TmdbError::ParseError(e.to_string()))
    }
}

//! Listing source: the local showtimes page
//!
//! Every `<li class="movie">` is one listing. The title comes from the
//! `<a class="movie-title">` inside it and the year from the last four
//! characters of `<p class="movie-date">`.
//!
//! Scraping is best effort: an item without a title is logged and skipped, an
//! item without a date is kept with an empty year.

use async_trait::async_trait;
use select::document::Document;
use select::node::Node;
use select::predicate::{Class, Name, Predicate};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::ListingEntry;
use crate::services::tmdb_client::USER_AGENT;

/// Listing source errors
#[derive(Debug, Error)]
pub enum ListingError {
    /// Network communication error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Page returned a non-success status
    #[error("HTTP {0} fetching {1}")]
    HttpStatus(u16, String),
}

/// Anything that can produce the current listings
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Listings in page order
    async fn fetch_listings(&self) -> Result<Vec<ListingEntry>, ListingError>;
}

/// Fetches and scrapes the listings page over HTTP
pub struct HttpListingSource {
    http_client: reqwest::Client,
    url: String,
}

impl HttpListingSource {
    pub fn new(url: impl Into<String>) -> Result<Self, ListingError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ListingError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_listings(&self) -> Result<Vec<ListingEntry>, ListingError> {
        debug!(url = %self.url, "Fetching listings page");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ListingError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::HttpStatus(status.as_u16(), self.url.clone()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ListingError::NetworkError(e.to_string()))?;

        let listings = parse_listings(&html);
        info!("Found {} listings on {}", listings.len(), self.url);
        Ok(listings)
    }
}

/// Parse listings out of the page, in page order
pub fn parse_listings(html: &str) -> Vec<ListingEntry> {
    Document::from(html)
        .find(Name("li").and(Class("movie")))
        .filter_map(parse_listing)
        .collect()
}

fn parse_listing(item: Node) -> Option<ListingEntry> {
    let title = item
        .find(Name("a").and(Class("movie-title")))
        .next()
        .map(|n| n.text().trim().to_string())
        .filter(|t| !t.is_empty());

    let Some(title) = title else {
        warn!("Listing item has no movie title, skipping");
        return None;
    };

    let year = item
        .find(Name("p").and(Class("movie-date")))
        .next()
        .map(|n| release_year(&n.text()))
        .unwrap_or_default();

    if year.is_empty() {
        debug!(title = %title, "No release date, searching without a year");
    }

    Some(ListingEntry { title, year })
}

/// Last four characters of the date text (the whole text if shorter)
pub fn release_year(date_text: &str) -> String {
    let trimmed = date_text.trim();
    let len = trimmed.chars().count();
    trimmed.chars().skip(len.saturating_sub(4)).collect()
}

//! Rating resolver
//!
//! Turns one `(title, year)` listing into a [`QualifyingMovie`] or nothing.
//!
//! A listing qualifies only when the search reports exactly one match and that
//! match is rated at least [`MIN_QUALIFYING_RATING`]. Zero or several matches
//! never qualify, whatever the individual ratings are: a rating attributed to
//! the wrong film is worse than a missed film.
//!
//! Lookup failures are absorbed here. A non-success status, a transport error
//! or an unreadable body is logged and the listing simply does not qualify.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::models::{QualifyingMovie, RatingQuery, SearchResponse, MIN_QUALIFYING_RATING};
use crate::services::tmdb_client::{MetadataSearch, TmdbClient, TmdbError};

pub struct RatingResolver {
    search: Arc<dyn MetadataSearch>,
    movie_link_base: String,
}

impl RatingResolver {
    pub fn new(search: Arc<dyn MetadataSearch>, movie_link_base: impl Into<String>) -> Self {
        Self {
            search,
            movie_link_base: movie_link_base.into(),
        }
    }

    /// Resolver backed by the real TMDb client
    pub fn from_config(config: &ResolverConfig) -> Result<Self, TmdbError> {
        let client = TmdbClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.movie_link_base.clone()))
    }

    /// Look up one listing
    ///
    /// Never fails: every failure mode comes back as `None`.
    pub async fn resolve(&self, title: &str, year: &str) -> Option<QualifyingMovie> {
        let query = RatingQuery::new(title, year);

        match self.search.search_movie(&query).await {
            Ok(response) => self.evaluate(&query, &response),
            Err(TmdbError::ApiError(status, _)) => {
                warn!(
                    status,
                    title = %query.title,
                    year = %query.year,
                    "TMDb search returned HTTP {}", status
                );
                None
            }
            Err(e) => {
                warn!(title = %query.title, year = %query.year, "TMDb search failed: {}", e);
                None
            }
        }
    }

    /// Apply the match-count and rating rules to a search response
    pub fn evaluate(&self, query: &RatingQuery, response: &SearchResponse) -> Option<QualifyingMovie> {
        if response.total_results != 1 {
            debug!(
                title = %query.title,
                year = %query.year,
                "Ambiguous match ({} results), skipping", response.total_results
            );
            return None;
        }

        let Some(candidate) = response.results.first() else {
            debug!(title = %query.title, "Single match reported but no result returned");
            return None;
        };

        if candidate.vote_average < MIN_QUALIFYING_RATING {
            debug!(
                title = %query.title,
                rating = candidate.vote_average,
                "Rated below threshold"
            );
            return None;
        }

        debug!(
            title = %query.title,
            id = candidate.id,
            rating = candidate.vote_average,
            "Qualifying movie"
        );

        Some(QualifyingMovie {
            title: query.title.clone(),
            rating: candidate.vote_average,
            reference_link: format!("{}{}", self.movie_link_base, candidate.id),
            overview: candidate.overview.clone(),
        })
    }
}

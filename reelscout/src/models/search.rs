//! TMDb `/search/movie` response
//!
//! Only the fields the resolver reads are modelled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Search response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Total matches across all pages
    pub total_results: u64,
    /// Candidates on the requested page
    #[serde(default)]
    pub results: Vec<SearchCandidate>,
}

/// One candidate match
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchCandidate {
    /// TMDb movie id
    pub id: u64,
    /// Average user rating (0.0-10.0)
    pub vote_average: f64,
    /// Synopsis; TMDb sends `null` or omits it for some titles
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

//! Listings and the lookup queries derived from them

use serde::{Deserialize, Serialize};

/// One movie scraped from the listings page
///
/// `year` is the four-digit release year, or empty when the page carried no
/// usable date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub title: String,
    pub year: String,
}

impl ListingEntry {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
        }
    }

    /// Lookup query for this listing
    pub fn query(&self) -> RatingQuery {
        RatingQuery::new(&self.title, &self.year)
    }
}

/// Title + release-year filter sent to the metadata search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingQuery {
    pub title: String,
    pub year: String,
}

impl RatingQuery {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
        }
    }
}

//! Movies that passed the rating filter

use serde::{Deserialize, Serialize};

/// Lowest TMDb vote average that qualifies (inclusive)
pub const MIN_QUALIFYING_RATING: f64 = 7.0;

/// A listing unambiguously matched on TMDb with a rating of at least 7.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingMovie {
    /// Title as it appeared on the listings page (not TMDb's title)
    pub title: String,
    pub rating: f64,
    /// TMDb movie page
    pub reference_link: String,
    pub overview: String,
}

impl QualifyingMovie {
    /// Rating as report text, e.g. `"8.1"` or `"7.0"`
    pub fn rating_text(&self) -> String {
        format_rating(self.rating)
    }
}

/// Render a rating so it always carries a fractional part
pub fn format_rating(rating: f64) -> String {
    // f64's Debug keeps the ".0" that Display drops
    format!("{:?}", rating)
}

//! Data models for reelscout
//!
//! - Listings scraped from the showtimes page
//! - TMDb search responses
//! - Movies that passed the rating filter

pub mod listing;
pub mod movie;
pub mod search;

pub use listing::{ListingEntry, RatingQuery};
pub use movie::{format_rating, QualifyingMovie, MIN_QUALIFYING_RATING};
pub use search::{SearchCandidate, SearchResponse};

//! reelscout library interface
//!
//! Scrapes the local listings page, looks every movie up on TMDb, keeps the
//! unambiguous matches rated 7.0 or better and hands a report to a notifier.
//!
//! Exposed as a library so the pipeline can be driven from integration tests.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod workflow;

pub use crate::config::ScoutConfig;
pub use crate::error::{ScoutError, ScoutResult};
pub use crate::models::{ListingEntry, QualifyingMovie, RatingQuery};
pub use crate::workflow::{discover_qualifying_movies, Pipeline, RunSummary};

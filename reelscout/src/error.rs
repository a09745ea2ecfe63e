//! Error types for reelscout
//!
//! Per-lookup failures never surface here: the rating resolver absorbs them.
//! These are the outer failures that stop a run.

use thiserror::Error;

use crate::services::address_book::AddressError;
use crate::services::listing_source::ListingError;
use crate::services::notifier::NotifyError;
use crate::services::tmdb_client::TmdbError;

/// Top-level error for a reelscout run
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Listing page could not be fetched
    #[error("Listing source failed: {0}")]
    Listing(#[from] ListingError),

    /// Metadata client could not be built
    #[error("Metadata client failed: {0}")]
    Metadata(#[from] TmdbError),

    /// Address file missing or unusable
    #[error("Address list failed: {0}")]
    Addresses(#[from] AddressError),

    /// Report could not be delivered
    #[error("Delivery failed: {0}")]
    Notify(#[from] NotifyError),

    /// Configuration or logging problem
    #[error(transparent)]
    Common(#[from] reelscout_common::Error),
}

/// Result type for pipeline operations
pub type ScoutResult<T> = Result<T, ScoutError>;

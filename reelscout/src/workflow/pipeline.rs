//! Pipeline driver
//!
//! # Error Handling
//! - Per-listing isolation: a failed or ambiguous lookup drops that listing
//!   and the batch carries on
//! - Fetching the listings page, reading the address file and delivering the
//!   message are the only failures that end a run
//!
//! # Example
//! ```rust,ignore
//! let pipeline = Pipeline::from_config(&config)?;
//! let summary = pipeline.run().await?;
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ScoutConfig;
use crate::error::ScoutResult;
use crate::models::{ListingEntry, QualifyingMovie};
use crate::services::address_book::load_addresses;
use crate::services::listing_source::{HttpListingSource, ListingSource};
use crate::services::notifier::{Notifier, OutboxNotifier, OutgoingMessage};
use crate::services::rating_resolver::RatingResolver;
use crate::services::report_formatter::{format_report, Report, REPORT_SUBJECT};

/// Resolve every listing in order and keep the qualifying ones
///
/// One lookup per listing, strictly sequential. The output preserves the
/// relative order of the input.
pub async fn discover_qualifying_movies(
    resolver: &RatingResolver,
    listings: &[ListingEntry],
) -> Vec<QualifyingMovie> {
    let mut qualifying = Vec::new();

    for (i, listing) in listings.iter().enumerate() {
        debug!(
            "Resolving listing {} of {}: {} ({})",
            i + 1,
            listings.len(),
            listing.title,
            listing.year
        );

        if let Some(movie) = resolver.resolve(&listing.title, &listing.year).await {
            qualifying.push(movie);
        }
    }

    info!(
        "{} of {} listings qualify",
        qualifying.len(),
        listings.len()
    );

    qualifying
}

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Listings scraped from the page
    pub listings: usize,
    /// Movies that made the report, in page order
    pub qualifying: Vec<QualifyingMovie>,
    pub report: Report,
    /// Delivery location, `None` for a dry run
    pub delivered_to: Option<String>,
}

/// Full scrape → enrich → filter → format → deliver sequence
pub struct Pipeline {
    listing_source: Arc<dyn ListingSource>,
    resolver: RatingResolver,
    notifier: Arc<dyn Notifier>,
    addresses_file: PathBuf,
}

impl Pipeline {
    pub fn new(
        listing_source: Arc<dyn ListingSource>,
        resolver: RatingResolver,
        notifier: Arc<dyn Notifier>,
        addresses_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            listing_source,
            resolver,
            notifier,
            addresses_file: addresses_file.into(),
        }
    }

    /// Pipeline wired to the real listings page, TMDb and the outbox
    pub fn from_config(config: &ScoutConfig) -> ScoutResult<Self> {
        let listing_source = HttpListingSource::new(config.listing_url.clone())?;
        let resolver = RatingResolver::from_config(&config.resolver)?;
        let notifier = OutboxNotifier::new(config.outbox_dir.clone());

        Ok(Self::new(
            Arc::new(listing_source),
            resolver,
            Arc::new(notifier),
            config.addresses_file.clone(),
        ))
    }

    /// Scrape, resolve and format without delivering
    pub async fn dry_run(&self) -> ScoutResult<RunSummary> {
        let listings = self.listing_source.fetch_listings().await?;
        let qualifying = discover_qualifying_movies(&self.resolver, &listings).await;
        let report = format_report(&qualifying);

        Ok(RunSummary {
            listings: listings.len(),
            qualifying,
            report,
            delivered_to: None,
        })
    }

    /// Scrape, resolve, format and deliver
    ///
    /// The message goes out even when nothing qualifies.
    pub async fn run(&self) -> ScoutResult<RunSummary> {
        // Fail before any lookups if nobody can receive the report
        let addresses = load_addresses(&self.addresses_file)?;

        let mut summary = self.dry_run().await?;

        let message = OutgoingMessage {
            sender: addresses.sender,
            recipients: addresses.recipients,
            subject: REPORT_SUBJECT.to_string(),
            text_body: summary.report.text.clone(),
            html_body: summary.report.html.clone(),
        };

        let receipt = self.notifier.deliver(&message).await?;
        info!("Delivered movie list to {}", receipt.location);

        summary.delivered_to = Some(receipt.location);
        Ok(summary)
    }
}

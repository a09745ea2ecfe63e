//! Service modules for the discovery pipeline
//!
//! - Listing source: showtimes page → listings
//! - TMDb client + rating resolver: listing → qualifying movie
//! - Report formatter, address book, notifier: qualifying movies → message

pub mod address_book;
pub mod listing_source;
pub mod notifier;
pub mod rating_resolver;
pub mod report_formatter;
pub mod tmdb_client;

pub use address_book::{load_addresses, parse_addresses, AddressError, AddressList};
pub use listing_source::{parse_listings, HttpListingSource, ListingError, ListingSource};
pub use notifier::{DeliveryReceipt, Notifier, NotifyError, OutboxNotifier, OutgoingMessage};
pub use rating_resolver::RatingResolver;
pub use report_formatter::{format_report, Report, REPORT_HEADING, REPORT_SUBJECT};
pub use tmdb_client::{MetadataSearch, TmdbClient, TmdbError};

//! Discovery workflow
//!
//! Linear, sequential: scrape → resolve each listing → filter → format →
//! deliver. Every network call is awaited before the next one starts.

pub mod pipeline;

pub use pipeline::{discover_qualifying_movies, Pipeline, RunSummary};

//! # ReelScout Common Library
//!
//! Shared code for the ReelScout crates:
//! - Error type
//! - TOML configuration loading and API key resolution
//! - Logging initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

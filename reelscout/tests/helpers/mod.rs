//! Test Helper Utilities
//!
//! Shared utilities for testing reelscout

#![allow(dead_code, unused_imports)]

pub mod fake_services;
pub mod log_capture;

pub use fake_services::{FakeSearch, FakeServer, RecordingNotifier, StaticListings};
pub use log_capture::{capture_logs, LogCapture};

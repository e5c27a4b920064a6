//! Output module for reporting mirror results
//!
//! This module handles:
//! - Recording per-run counters and caught failures
//! - Printing the end-of-run summary

pub mod stats;

pub use stats::{print_report, CrawlReport, FailureRecord};

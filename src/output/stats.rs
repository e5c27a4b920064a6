//! Statistics collected during a mirror run
//!
//! The crawl engine updates a `CrawlReport` as it goes; the entry point
//! prints it once the run is over.

use crate::state::PageOutcome;
use crate::MirrorError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A failure caught below the root page
#[derive(Debug, Clone)]
pub struct FailureRecord {
    /// The URL whose subtree was abandoned
    pub url: String,

    /// Failure classification
    pub outcome: PageOutcome,

    /// Error message as reported at the time
    pub message: String,
}

/// Mirror run statistics
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// URL the run started from
    pub root_url: Option<String>,

    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Number of page bodies written to disk
    pub pages_saved: u64,

    /// Total bytes written to disk
    pub bytes_written: u64,

    /// Same-origin links extracted, duplicates included
    pub links_discovered: u64,

    /// Links skipped because their URL was already visited
    pub duplicates_skipped: u64,

    /// Failures caught and reported while processing non-root pages
    pub failures: Vec<FailureRecord>,
}

impl CrawlReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a run from `root_url`
    pub fn start(&mut self, root_url: &str) {
        self.root_url = Some(root_url.to_string());
        self.started_at = Some(Utc::now());
        self.finished_at = None;
    }

    /// Marks the end of a run
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn record_saved(&mut self, bytes: u64) {
        self.pages_saved += 1;
        self.bytes_written += bytes;
    }

    pub fn record_links(&mut self, count: usize) {
        self.links_discovered += count as u64;
    }

    pub fn record_duplicate(&mut self) {
        self.duplicates_skipped += 1;
    }

    /// Records a failure caught for `url`
    pub fn record_failure(&mut self, url: &str, error: &MirrorError) {
        self.failures.push(FailureRecord {
            url: url.to_string(),
            outcome: PageOutcome::from_error(error),
            message: error.to_string(),
        });
    }

    /// Returns true if no failure was caught during the run
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Counts caught failures per outcome
    pub fn failures_by_outcome(&self) -> HashMap<PageOutcome, u64> {
        let mut counts = HashMap::new();
        for failure in &self.failures {
            *counts.entry(failure.outcome).or_insert(0) += 1;
        }
        counts
    }

    /// Wall-clock duration of the run, once finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.started_at, self.finished_at) {
            (Some(started), Some(finished)) => Some(finished - started),
            _ => None,
        }
    }
}

/// Prints the report to stdout in a formatted manner
pub fn print_report(report: &CrawlReport) {
    println!("=== Mirror Summary ===\n");

    if let Some(root) = &report.root_url {
        println!("Root: {}", root);
    }
    if let Some(duration) = report.duration() {
        println!("Duration: {:.1}s", duration.num_milliseconds() as f64 / 1000.0);
    }
    println!();

    println!("Overview:");
    println!("  Pages saved: {}", report.pages_saved);
    println!("  Bytes written: {}", report.bytes_written);
    println!("  Links discovered: {}", report.links_discovered);
    println!("  Already visited: {}", report.duplicates_skipped);
    println!();

    if !report.failures.is_empty() {
        println!("Failures ({}):", report.failures.len());

        let mut counts: Vec<_> = report.failures_by_outcome().into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        for (outcome, count) in counts {
            println!("  {}: {}", outcome, count);
        }
        println!();

        for failure in &report.failures {
            println!("  - {} [{}] {}", failure.url, failure.outcome, failure.message);
        }
        println!();
    }
}

//! Crawler module for fetching and mirroring pages
//!
//! This module contains the core mirroring logic, including:
//! - HTTP fetching
//! - Link extraction from page text
//! - Recursive, depth-first crawl coordination

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, fetch_url, PageRecord};
pub use parser::extract_links;

use crate::config::Config;
use crate::output::CrawlReport;
use crate::state::VisitedSet;
use crate::Result;
use std::path::Path;
use url::Url;

/// Runs a complete mirror operation
///
/// This is the main entry point for mirroring a site. It will:
/// 1. Parse the root URL
/// 2. Create the output directory
/// 3. Start a fresh visited set
/// 4. Crawl from the root, depth-first
///
/// # Arguments
///
/// * `root_url` - Absolute URL of the page to start from
/// * `output_root` - Directory pages are written under
/// * `config` - Client and output settings
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The root page was mirrored; the report lists any
///   failures caught below it
/// * `Err(MirrorError)` - Setup failed or the root page could not be mirrored
///
/// # Example
///
/// ```no_run
/// use site_mirror::config::Config;
/// use site_mirror::crawler::mirror_site;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = mirror_site("http://example.com/", Path::new("out"), &Config::default()).await?;
/// println!("{} pages saved", report.pages_saved);
/// # Ok(())
/// # }
/// ```
pub async fn mirror_site(root_url: &str, output_root: &Path, config: &Config) -> Result<CrawlReport> {
    let root = Url::parse(root_url)?;

    let mut crawler = Crawler::new(config, output_root)?;
    crawler.prepare_output()?;

    let mut visited = VisitedSet::new();
    crawler.mirror(&root, &mut visited).await?;

    Ok(crawler.into_report())
}

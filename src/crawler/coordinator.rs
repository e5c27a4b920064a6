//! Crawl coordinator - the recursive mirroring engine
//!
//! This module walks a site depth-first from a root URL:
//! - Claims each URL in the visited set before fetching it
//! - Fetches, checks the status and stores the body
//! - Extracts same-origin links and recurses into each, in document order
//!
//! Errors behave differently at the root than below it. A failure on the
//! root page is returned to the caller and ends the run. A failure on any
//! other page abandons that page's subtree only: the parent logs it, records
//! it in the report and moves on to the next sibling.

use crate::config::Config;
use crate::crawler::{build_http_client, extract_links, fetch_url};
use crate::output::CrawlReport;
use crate::state::VisitedSet;
use crate::storage::{FsStorage, Storage};
use crate::url::map_path_with_index;
use crate::{MirrorError, Result};
use reqwest::Client;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use url::Url;

type CrawlFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a>>;

/// Recursive site mirroring engine
///
/// Execution is strictly sequential: each fetch completes before anything
/// else happens, and nothing is spawned.
pub struct Crawler<S: Storage = FsStorage> {
    client: Client,
    storage: S,
    output_root: PathBuf,
    index_file: String,
    report: CrawlReport,
}

impl Crawler<FsStorage> {
    /// Creates a crawler writing to the filesystem under `output_root`
    pub fn new(config: &Config, output_root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_storage(config, output_root, FsStorage::new())
    }
}

impl<S: Storage> Crawler<S> {
    /// Creates a crawler with a custom storage backend
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(MirrorError::ClientBuild)` - The HTTP client could not be built
    pub fn with_storage(config: &Config, output_root: impl Into<PathBuf>, storage: S) -> Result<Self> {
        let client = build_http_client(&config.client).map_err(MirrorError::ClientBuild)?;

        Ok(Self {
            client,
            storage,
            output_root: output_root.into(),
            index_file: config.output.index_file.clone(),
            report: CrawlReport::new(),
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn report(&self) -> &CrawlReport {
        &self.report
    }

    pub fn into_report(self) -> CrawlReport {
        self.report
    }

    /// Creates the output root directory if it does not exist yet
    pub fn prepare_output(&mut self) -> Result<()> {
        self.storage.ensure_dir(&self.output_root)?;
        Ok(())
    }

    /// Mirrors the site reachable from `root`
    ///
    /// This is the root call: any error on the root page itself is returned.
    /// Failures deeper in the tree are reported and swallowed.
    ///
    /// # Arguments
    ///
    /// * `root` - The URL to start from
    /// * `visited` - Visited set for this run, usually empty
    pub async fn mirror(&mut self, root: &Url, visited: &mut VisitedSet) -> Result<()> {
        tracing::info!(
            "Mirroring {} into {}",
            root,
            self.output_root.display()
        );

        self.report.start(root.as_str());
        let result = self.crawl(root.to_string(), visited).await;
        self.report.finish();

        if result.is_ok() {
            tracing::info!(
                "Mirror finished: {} pages saved, {} failures",
                self.report.pages_saved,
                self.report.failures.len()
            );
        }

        result
    }

    /// Processes one URL and, recursively, every same-origin page it links to
    ///
    /// Returns immediately with success if `url` was already visited. Any
    /// error from fetching, the status check or storing the page is returned
    /// to the caller with nothing extracted from the page. Errors from
    /// recursive calls never escape this function.
    pub fn crawl<'a>(&'a mut self, url: String, visited: &'a mut VisitedSet) -> CrawlFuture<'a> {
        Box::pin(self.crawl_page(url, visited))
    }

    async fn crawl_page(&mut self, url: String, visited: &mut VisitedSet) -> Result<()> {
        if !visited.mark(&url) {
            tracing::debug!("Already visited {}", url);
            self.report.record_duplicate();
            return Ok(());
        }

        let page_url = Url::parse(&url)?;

        let page = fetch_url(&self.client, &url).await?;
        if !page.is_ok() {
            return Err(MirrorError::HttpStatus {
                url,
                status: page.status,
            });
        }

        let local_path = map_path_with_index(&page_url, &self.output_root, &self.index_file);
        let written = self.storage.store_page(&local_path, &page.body)?;
        self.report.record_saved(written);
        tracing::info!("Saved {} -> {}", url, local_path.display());

        let links = extract_links(&page_url, &page.text());
        drop(page);
        self.report.record_links(links.len());
        tracing::debug!("Found {} same-origin links on {}", links.len(), url);

        for link in links {
            if let Err(e) = self.crawl(link.clone(), visited).await {
                tracing::error!("Error downloading {}: {}", link, e);
                self.report.record_failure(&link, &e);
            }
        }

        Ok(())
    }
}

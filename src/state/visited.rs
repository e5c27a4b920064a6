use std::collections::HashSet;

/// The set of URLs claimed during one mirror run
///
/// A URL is claimed before it is fetched and is never released, so every URL
/// is fetched at most once per run even when the fetch fails. Keys are
/// compared as exact strings: trailing slashes, query strings and fragments
/// all produce distinct entries.
///
/// The set is owned by whoever starts the run and lent to every recursive
/// call; it is never shared between runs.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a URL for fetching
    ///
    /// Check and insert happen in one step.
    ///
    /// # Returns
    ///
    /// * `true` - The URL was not visited before and is now claimed
    /// * `false` - The URL was already claimed; the caller must not fetch it
    pub fn mark(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    /// Returns true if the URL has already been claimed
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

use serde::Deserialize;

/// Filename stored for URLs whose path is empty or ends in `/`
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Redirect hops followed before giving up (matches reqwest's default policy)
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Main configuration structure for Site-Mirror
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub output: OutputConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Whole-request timeout in seconds; `None` leaves the client unbounded
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Maximum number of redirects to follow per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Output layout configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Filename appended when a URL path is empty or ends with a separator
    #[serde(rename = "index-file")]
    pub index_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

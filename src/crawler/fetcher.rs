//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client from configuration
//! - Single GET requests returning status and raw body bytes
//! - Classifying transport failures
//!
//! There is no retry logic. A status other than 200 is not an error at this
//! level; the caller decides what to do with it.

use crate::config::ClientConfig;
use crate::MirrorError;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;

/// Result of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// HTTP status code of the final response
    pub status: StatusCode,

    /// Raw response body
    pub body: Vec<u8>,
}

impl PageRecord {
    /// Returns true if the server answered 200 OK
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Body decoded as text for link extraction; invalid UTF-8 is replaced
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Builds an HTTP client with the configured settings
///
/// With the default configuration this is equivalent to `Client::new()`:
/// no timeout, no extra headers, and up to 10 redirects followed.
///
/// # Example
///
/// ```no_run
/// use site_mirror::config::ClientConfig;
/// use site_mirror::crawler::build_http_client;
///
/// let client = build_http_client(&ClientConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().redirect(Policy::limited(config.max_redirects));

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL with a single GET request
///
/// The response body is read to completion before returning.
///
/// # Returns
///
/// * `Ok(PageRecord)` - The server answered, with whatever status
/// * `Err(MirrorError::Transport)` - DNS, connection, TLS, timeout, redirect
///   or body read failure
pub async fn fetch_url(client: &Client, url: &str) -> Result<PageRecord, MirrorError> {
    let transport = |source: reqwest::Error| {
        if source.is_timeout() {
            tracing::debug!("Request timeout for {}", url);
        } else if source.is_connect() {
            tracing::debug!("Connection failed for {}", url);
        }
        MirrorError::Transport {
            url: url.to_string(),
            source,
        }
    };

    let response = client.get(url).send().await.map_err(transport)?;
    let status = response.status();
    let body = response.bytes().await.map_err(transport)?;

    tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

    Ok(PageRecord {
        status,
        body: body.to_vec(),
    })
}

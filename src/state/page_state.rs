//! Outcome classification for a single page of a mirror run
//!
//! Used by the crawl report to group results.

use crate::MirrorError;
use std::fmt;

/// Represents how the processing of a page ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    /// Server answered with a status other than 200 OK
    HttpStatus,

    /// Request failed at the transport level (DNS, connection, TLS, timeout)
    Unreachable,

    /// Directory creation or file write failed
    Filesystem,

    /// The page URL could not be parsed
    InvalidUrl,

    /// Any other failure, such as a client or configuration error
    Failed,
}

impl PageOutcome {
    /// Classifies an error raised while processing a page
    pub fn from_error(error: &MirrorError) -> Self {
        match error {
            MirrorError::HttpStatus { .. } => Self::HttpStatus,
            MirrorError::Transport { .. } => Self::Unreachable,
            MirrorError::Storage(_) => Self::Filesystem,
            MirrorError::UrlParse(_) => Self::InvalidUrl,
            MirrorError::Config(_) | MirrorError::ClientBuild(_) => Self::Failed,
        }
    }

    /// Short label used in printed reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HttpStatus => "http_status",
            Self::Unreachable => "unreachable",
            Self::Filesystem => "filesystem",
            Self::InvalidUrl => "invalid_url",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

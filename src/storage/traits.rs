//! Storage traits and error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for page storage backends
pub trait Storage {
    /// Ensures a directory exists, creating it and its parents if missing
    fn ensure_dir(&mut self, dir: &Path) -> StorageResult<()>;

    /// Writes a page body to `path`, replacing any existing file
    ///
    /// # Returns
    ///
    /// The number of bytes written
    fn write_page(&mut self, path: &Path, body: &[u8]) -> StorageResult<u64>;

    /// Stores a page: creates the parent directory of `path`, then writes
    /// the body
    fn store_page(&mut self, path: &Path, body: &[u8]) -> StorageResult<u64> {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }
        self.write_page(path, body)
    }
}

//! Storage module for persisting mirrored pages
//!
//! This module handles writing fetched page bodies to the output directory:
//! - Creating the output root and any intermediate directories
//! - Writing raw response bytes, overwriting earlier copies
//!
//! The `Storage` trait is the seam between the crawl engine and the
//! filesystem; `FsStorage` is the real implementation.

mod fs;
mod traits;

pub use fs::FsStorage;
pub use traits::{Storage, StorageError, StorageResult};

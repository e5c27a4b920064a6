//! URL handling module for Site-Mirror
//!
//! This module provides the same-origin rule used to filter discovered links
//! and the mapping from a URL to its local file path.

mod local_path;
mod origin;

// Re-export main functions
pub use local_path::{map_path, map_path_with_index};
pub use origin::is_same_origin;

//! Configuration module for Site-Mirror
//!
//! Configuration is optional. Without a file every setting takes the default
//! that reproduces plain client behavior: no timeout, reqwest's redirect
//! limit, and `index.html` for directory-like paths.
//!
//! # Example
//!
//! ```no_run
//! use site_mirror::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mirror.toml")).unwrap();
//! println!("Index file: {}", config.output.index_file);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, OutputConfig, DEFAULT_INDEX_FILE, DEFAULT_MAX_REDIRECTS};

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;

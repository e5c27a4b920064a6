//! State module for tracking mirror progress
//!
//! # Components
//!
//! - `VisitedSet`: URLs already claimed during the current run
//! - `PageOutcome`: How the processing of a single page ended

mod page_state;
mod visited;

// Re-export main types
pub use page_state::PageOutcome;
pub use visited::VisitedSet;

//! Todos module - extraction and selection of the document's unchecked to-dos
//!
//! This module provides:
//! - Extraction of candidate items from the host's current page
//! - The user-adjustable selection over those candidates

pub mod extract;
pub mod selection;

// Re-export commonly used types
pub use extract::{scan, CandidateItem, ScanOutcome};
pub use selection::Selection;

//! Sync module - pushes selected to-dos to the task store and checks them
//! off in the document
//!
//! This module provides:
//! - The two-phase sync engine (remote creation, then local completion)
//! - The per-item report a cycle produces
//! - The error taxonomy for everything that can go wrong mid-cycle

pub mod engine;
pub mod error;

// Re-export commonly used types
pub use engine::{ItemOutcome, PhaseOutcome, SyncEngine, SyncReport};
pub use error::SyncError;

//! Craft document host boundary
//!
//! This module provides:
//! - The block tree model returned by the editor and its tagged decode
//! - The `DocumentHost` trait the sync core talks to
//! - An HTTP implementation speaking JSON to the local editor bridge

pub mod blocks;
pub mod client;

// Re-export commonly used types
pub use blocks::{Block, BlockKind, HostError, Page};
pub use client::{DocumentHost, HttpDocumentHost};

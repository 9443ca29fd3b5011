//! Finish Em task store boundary
//!
//! Write-only client for the task manager's GraphQL endpoint: the bridge
//! creates task records and never reads them back.

pub mod client;

// Re-export commonly used types
pub use client::{CreatedTask, FinishEmClient, NewTask, RemoteError, TaskCreator, TASK_KIND};

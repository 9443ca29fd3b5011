use thiserror::Error;

/// Everything that can fail during one sync cycle.
///
/// All variants are recovered at the boundary of the operation that produced
/// them and recorded in the cycle's report; none propagate as panics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SyncError {
    /// The task store rejected or never received the create request
    #[error("failed to create remote task for {text:?}: {reason}")]
    RemoteCreateFailed { text: String, reason: String },

    /// The host could not resolve a block id into a live handle
    #[error("host could not resolve block: {0}")]
    HostSelectFailed(String),

    /// The host refused to persist the mutated block
    #[error("host could not persist block update: {0}")]
    HostUpdateFailed(String),

    /// The block still exists but lost its to-do role between scan and submit
    #[error("block is no longer a to-do item")]
    NotATodoBlock,
}

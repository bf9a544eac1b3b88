//! Error taxonomy for the save/restore pipeline.
//!
//! Discovery timeouts are deliberately absent: a step that times out is
//! normal termination of the cycle walk, not a failure. Everything here
//! is caught and logged at the manager boundary — nothing propagates to
//! the manager's callers.

use thiserror::Error;

/// Pipeline error.
#[derive(Debug, Error)]
pub enum Error {
    /// A host command (advance, activate, open, close-all) failed.
    #[error("host operation failed: {0}")]
    Host(String),

    /// A persisted record could not be decoded.
    ///
    /// Local to one entry — `load` skips the record and keeps the rest.
    #[error("malformed saved entry: {0}")]
    Decode(#[from] serde_json::Error),

    /// The durable store rejected a read, write, or delete.
    #[error("store operation failed: {0}")]
    Store(String),
}

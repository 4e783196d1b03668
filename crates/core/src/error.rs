//! Error types for graphmon-core.
//!
//! Only allocation failure is a user-visible error. Malformed commands,
//! unknown-entity references, and idempotent no-ops never produce an
//! `Err` — they are silently absorbed by the mutation API.

use thiserror::Error;

/// Result type alias used throughout graphmon-core.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Errors that can surface from graphmon-core.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The associative map failed to grow its backing storage.
    #[error("allocation failed while growing associative map to {attempted_capacity} slots")]
    OutOfMemory {
        /// The capacity the resize attempted to reach.
        attempted_capacity: usize,
    },
}

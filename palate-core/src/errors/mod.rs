//! Error taxonomy for the Palate core.
//!
//! Read-path failures (profile/ledger load) are recovered locally with
//! documented defaults; write-path failures and budget violations are
//! surfaced to the caller.

mod completion_error;
mod context_error;
mod feedback_error;
mod storage_error;

pub use completion_error::CompletionError;
pub use context_error::ContextError;
pub use feedback_error::FeedbackError;
pub use storage_error::StorageError;

/// Umbrella error type for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum PalateError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Result alias used across all Palate crates.
pub type PalateResult<T> = Result<T, PalateError>;

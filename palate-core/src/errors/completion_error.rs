/// Failures from the external completion collaborator.
///
/// The core treats any of these as "no text produced"; retry and fallback
/// policy belong to the caller.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("completion backend error: {0}")]
    Backend(String),
}

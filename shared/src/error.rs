//! Shared error taxonomy
//!
//! Errors that cross the engine boundary: remote fetch failures propagate
//! to the top-level caller and replace the session view; submission
//! failures stay local to the checkout flow and are retryable.

use thiserror::Error;

/// Errors surfaced by the remote merchant fetch
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Authorization rejection. Fatal to the session, never retried
    /// automatically.
    #[error("access to merchant data denied")]
    PermissionDenied,

    /// The merchant identifier has no record. Carries the identifier for
    /// diagnosis.
    #[error("merchant not found: {0}")]
    NotFound(String),

    /// Any other remote failure. Surfaced as a generic failure, no
    /// automatic retry.
    #[error("merchant fetch failed: {0}")]
    Transient(String),
}

/// Order transport failure. Recoverable: the user may retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("order submission failed: {0}")]
pub struct SubmitError(pub String);

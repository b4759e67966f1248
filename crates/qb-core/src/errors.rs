//! Cross-cutting error types for quizbank.
//!
//! Storage errors live in `qb-db`, configuration errors in `qb-config`.

use qb_auth::AuthError;
use thiserror::Error;

/// Errors that can be raised by entity-level operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (closed set, range, length).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password hashing rejected the input or failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

use thiserror::Error;

use super::field_errors::FieldErrors;

/// Failures the HTTP layer maps to client errors. Anything else travelling
/// through `anyhow` is treated as internal.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0} not found")]
    NotFound(&'static str),
}

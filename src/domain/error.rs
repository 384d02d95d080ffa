//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent engine contract violations.
///
/// Malformed paths are never errors anywhere in the engine — they degrade to
/// empty-node behavior. The only strictly validated input is the filter
/// pattern.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid filter pattern `{pattern}`: {source}")]
    InvalidFilterPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

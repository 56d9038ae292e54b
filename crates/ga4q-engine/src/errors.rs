//! Error handling for ga4q-engine
//!
//! Wraps ga4q-core ExError with engine-specific helpers

use ga4q_core::errors::{ExError, ExErrorKind, QueryError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Lift a domain error into the facility, tagged with the operation
pub fn from_query(op: &str, err: QueryError) -> ExError {
    ExError::from(err).with_op(op)
}

/// Create a missing property directory error
pub fn directory_unavailable(op: &str) -> ExError {
    from_query(
        op,
        QueryError::DirectoryUnavailable {
            reason: "Property manager not initialized. Authentication may have failed."
                .to_string(),
        },
    )
}

/// Create a missing report backend error
pub fn backend_unavailable(op: &str) -> ExError {
    ExError::new(ExErrorKind::Configuration)
        .with_op(op)
        .with_message("No report backend configured.")
}

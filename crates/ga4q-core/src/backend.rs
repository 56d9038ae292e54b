//! Report backend interface

use std::fmt;

use crate::query::QueryRequest;
use crate::report::ReportResponse;

/// A failed backend call, as reported by the client library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendFailure {
    pub message: String,
    pub details: Option<String>,
}

impl BackendFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

impl std::error::Error for BackendFailure {}

/// Executes report queries.
///
/// Implementations own credentials and transport; the request is passed by
/// value and must not be altered.
pub trait ReportBackend: Send + Sync {
    /// Run one report.
    ///
    /// # Errors
    ///
    /// Any transport or API failure, with the client's message.
    fn run_report(&self, request: QueryRequest) -> Result<ReportResponse, BackendFailure>;
}

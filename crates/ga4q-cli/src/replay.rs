//! Offline report backend answering from a saved response
//!
//! The file holds either a runReport response body, or an
//! `{"error": {"message": ..., "details": ...}}` object to replay a failure.

use std::path::Path;

use ga4q_core::backend::{BackendFailure, ReportBackend};
use ga4q_core::errors::QueryError;
use ga4q_core::query::QueryRequest;
use ga4q_core::report::ReportResponse;
use serde_json::Value;

use crate::commands::read_text;

#[derive(Debug, Clone)]
pub struct ReplayBackend {
    outcome: Result<ReportResponse, BackendFailure>,
}

impl ReplayBackend {
    pub fn from_value(value: Value) -> Result<Self, QueryError> {
        let outcome = match value.get("error") {
            Some(Value::String(message)) => Err(BackendFailure::new(message.clone())),
            Some(error) => {
                let message = error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown backend error");
                let failure = BackendFailure::new(message);
                Err(match error.get("details").and_then(Value::as_str) {
                    Some(details) => failure.with_details(details),
                    None => failure,
                })
            }
            None => Ok(ReportResponse::from_value(value)?),
        };
        Ok(Self { outcome })
    }

    pub fn from_file(path: &Path) -> Result<Self, QueryError> {
        Self::from_value(serde_json::from_str(&read_text(path)?)?)
    }
}

impl ReportBackend for ReplayBackend {
    fn run_report(&self, request: QueryRequest) -> Result<ReportResponse, BackendFailure> {
        tracing::debug!(
            property = %request.resource_name(),
            dimensions = request.dimensions.len(),
            metrics = request.metrics.len(),
            "replaying saved report"
        );
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_object_replays_failure() {
        let backend = ReplayBackend::from_value(json!({
            "error": {"message": "403 PERMISSION_DENIED", "details": "no access"}
        }))
        .unwrap();
        assert_eq!(
            backend.outcome,
            Err(BackendFailure::new("403 PERMISSION_DENIED").with_details("no access"))
        );
    }

    #[test]
    fn test_error_string_replays_failure() {
        let backend = ReplayBackend::from_value(json!({"error": "quota"})).unwrap();
        assert_eq!(backend.outcome, Err(BackendFailure::new("quota")));
    }

    #[test]
    fn test_response_body_replays_rows() {
        let backend = ReplayBackend::from_value(json!({
            "dimensionHeaders": [{"name": "date"}],
            "rows": [{"dimensionValues": [{"value": "20240101"}]}]
        }))
        .unwrap();
        assert_eq!(backend.outcome.map(|r| r.rows.len()), Ok(1));
    }
}

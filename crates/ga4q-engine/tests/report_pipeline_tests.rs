//! Integration tests for the report pipeline.
//!
//! A recording backend captures the exact `QueryRequest` the pipeline hands
//! over, so forwarding and validation can be asserted without a network.

use std::sync::Mutex;

use ga4q_core::backend::{BackendFailure, ReportBackend};
use ga4q_core::catalog::Catalog;
use ga4q_core::errors::{ExError, ExErrorKind, QueryError};
use ga4q_core::filter::{FilterLeaf, FilterNode, MatchType, Matcher, StringMatch};
use ga4q_core::property::{PropertyInfo, StaticPropertyDirectory};
use ga4q_core::query::QueryRequest;
use ga4q_core::report::ReportResponse;
use ga4q_engine::commands::report::{prepare_report, run_report, ReportArgs, ReportContext};
use proptest::prelude::*;
use serde_json::json;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

struct RecordingBackend {
    outcome: Result<ReportResponse, BackendFailure>,
    seen: Mutex<Vec<QueryRequest>>,
}

impl RecordingBackend {
    fn answering(response: serde_json::Value) -> Self {
        Self {
            outcome: Ok(ReportResponse::from_value(response).unwrap()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(failure: BackendFailure) -> Self {
        Self {
            outcome: Err(failure),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<QueryRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl ReportBackend for RecordingBackend {
    fn run_report(&self, request: QueryRequest) -> Result<ReportResponse, BackendFailure> {
        self.seen.lock().unwrap().push(request);
        self.outcome.clone()
    }
}

fn empty_response() -> serde_json::Value {
    json!({"dimensionHeaders": [], "metricHeaders": [], "rows": []})
}

fn directory() -> StaticPropertyDirectory {
    StaticPropertyDirectory::new(vec![
        PropertyInfo::new("123456", "Main site"),
        PropertyInfo::new("654321", "Staging"),
    ])
}

// ---------------------------------------------------------------------------
// Forwarding
// ---------------------------------------------------------------------------

#[test]
fn test_comma_dimensions_forwarded_unchanged() {
    // GIVEN comma-separated dimensions, a native metric list, no filter
    let backend = RecordingBackend::answering(empty_response());
    let ctx = ReportContext::new(Catalog::builtin());
    let args = ReportArgs {
        dimensions: json!("date,city"),
        metrics: json!(["totalUsers"]),
        ..ReportArgs::new("123456")
    };

    // WHEN running the report
    let rows = run_report(&args, &ctx, &backend).expect("Should run");

    // THEN the backend saw exactly the normalised request
    assert!(rows.is_empty());
    let seen = backend.requests();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.property_id, "123456");
    assert_eq!(request.dimensions.as_slice(), ["date", "city"]);
    assert_eq!(request.metrics.as_slice(), ["totalUsers"]);
    assert_eq!(request.date_range.start, "7daysAgo");
    assert_eq!(request.date_range.end, "yesterday");
    assert_eq!(request.filter, None);
}

#[test]
fn test_prepared_request_is_what_runs() {
    let backend = RecordingBackend::answering(empty_response());
    let ctx = ReportContext::new(Catalog::builtin());
    let args = ReportArgs {
        dimension_filter: json!(r#"{"filter":{"fieldName":"country","stringFilter":{"value":"US"}}}"#),
        ..ReportArgs::new("properties/123456")
    };

    let prepared = prepare_report(&args, &ctx).unwrap();
    run_report(&args, &ctx, &backend).unwrap();

    assert_eq!(backend.requests(), vec![prepared]);
}

#[test]
fn test_string_filter_compiles_to_exact_leaf() {
    let ctx = ReportContext::new(Catalog::builtin());
    let args = ReportArgs {
        dimension_filter: json!({"filter": {"fieldName": "country", "stringFilter": {"value": "US"}}}),
        ..ReportArgs::new("123456")
    };

    let request = prepare_report(&args, &ctx).unwrap();

    assert_eq!(
        request.filter,
        Some(FilterNode::Leaf(FilterLeaf {
            field: "country".to_string(),
            matcher: Matcher::String(StringMatch {
                value: "US".to_string(),
                match_type: MatchType::Exact,
                case_sensitive: false,
            }),
        }))
    );
    assert_eq!(
        request.to_wire()["dimensionFilter"],
        json!({"filter": {"fieldName": "country", "stringFilter": {
            "value": "US", "matchType": "EXACT", "caseSensitive": false
        }}})
    );
}

#[test]
fn test_rows_are_flattened() {
    let backend = RecordingBackend::answering(json!({
        "dimensionHeaders": [{"name": "date"}],
        "metricHeaders": [{"name": "totalUsers"}],
        "rows": [
            {"dimensionValues": [{"value": "20240101"}], "metricValues": [{"value": "3"}]},
            {"dimensionValues": [{"value": "20240102"}]}
        ]
    }));
    let ctx = ReportContext::new(Catalog::builtin());

    let rows = run_report(&ReportArgs::new("123456"), &ctx, &backend).unwrap();

    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            {"date": "20240101", "totalUsers": "3"},
            {"date": "20240102", "totalUsers": null}
        ])
    );
}

// ---------------------------------------------------------------------------
// Validation never reaches the backend
// ---------------------------------------------------------------------------

#[test]
fn test_failures_before_backend_call() {
    let backend = RecordingBackend::answering(empty_response());
    let dir = directory();
    let ctx = ReportContext::new(Catalog::builtin()).with_directory(&dir);

    let cases = vec![
        (ReportArgs::default(), ExErrorKind::MissingProperty),
        (ReportArgs::new("999"), ExErrorKind::UnknownProperty),
        (
            ReportArgs {
                dimensions: json!(" , "),
                ..ReportArgs::new("123456")
            },
            ExErrorKind::EmptyList,
        ),
        (
            ReportArgs {
                metrics: json!([]),
                ..ReportArgs::new("123456")
            },
            ExErrorKind::EmptyList,
        ),
        (
            ReportArgs {
                dimension_filter: json!({}),
                ..ReportArgs::new("123456")
            },
            ExErrorKind::InvalidFilter,
        ),
        (
            ReportArgs {
                dimension_filter: json!("{oops"),
                ..ReportArgs::new("123456")
            },
            ExErrorKind::InvalidJson,
        ),
    ];

    for (args, expected) in cases {
        let err: ExError = run_report(&args, &ctx, &backend).unwrap_err().into();
        assert_eq!(err.kind(), expected, "args {args:?}");
    }
    assert!(backend.requests().is_empty());
}

#[test]
fn test_unknown_property_lists_known_ids() {
    let dir = directory();
    let ctx = ReportContext::new(Catalog::builtin()).with_directory(&dir);

    let err: ExError = prepare_report(&ReportArgs::new("999"), &ctx)
        .unwrap_err()
        .into();

    assert_eq!(
        err.message(),
        r#"Invalid property ID: 999. Available property IDs: ["123456", "654321"]"#
    );
    assert_eq!(
        err.candidates(),
        Some(&["123456".to_string(), "654321".to_string()][..])
    );
}

#[test]
fn test_invalid_sibling_discards_whole_filter() {
    let backend = RecordingBackend::answering(empty_response());
    let ctx = ReportContext::new(Catalog::builtin());
    let args = ReportArgs {
        dimension_filter: json!({"andGroup": {"expressions": [
            {"filter": {"fieldName": "country", "stringFilter": {"value": "US"}}},
            {"filter": {"fieldName": "nope", "stringFilter": {"value": "x"}}}
        ]}}),
        ..ReportArgs::new("123456")
    };

    let err = run_report(&args, &ctx, &backend).unwrap_err();

    assert_eq!(
        err,
        QueryError::UnknownFilterField {
            field: "nope".to_string()
        }
    );
    assert!(backend.requests().is_empty());
}

// ---------------------------------------------------------------------------
// Backend failures
// ---------------------------------------------------------------------------

#[test]
fn test_not_found_failure_is_property_not_accessible() {
    let backend = RecordingBackend::failing(
        BackendFailure::new("404 Property not found").with_details("properties/123456"),
    );
    let ctx = ReportContext::new(Catalog::builtin());

    let err: ExError = run_report(&ReportArgs::new("123456"), &ctx, &backend)
        .unwrap_err()
        .into();

    assert_eq!(err.kind(), ExErrorKind::PropertyNotAccessible);
    assert_eq!(
        err.message(),
        "Property ID '123456' not found or not accessible. Use list_ga4_properties to get available property IDs. Details: properties/123456"
    );
}

#[test]
fn test_unrecognised_failure_is_generic_upstream() {
    let backend = RecordingBackend::failing(BackendFailure::new("socket closed"));
    let ctx = ReportContext::new(Catalog::builtin());

    let err: ExError = run_report(&ReportArgs::new("123456"), &ctx, &backend)
        .unwrap_err()
        .into();

    assert_eq!(err.kind(), ExErrorKind::Upstream);
    assert_eq!(err.message(), "Error fetching GA4 data: socket closed");
}

// ---------------------------------------------------------------------------
// Encoding independence
// ---------------------------------------------------------------------------

fn catalog_dimensions() -> impl Strategy<Value = Vec<String>> {
    let names: Vec<String> = Catalog::builtin()
        .field_names(ga4q_core::catalog::FieldKind::Dimension)
        .into_iter()
        .map(str::to_string)
        .collect();
    prop::collection::vec(prop::sample::select(names), 1..6)
}

proptest! {
    #[test]
    fn prop_encodings_forward_identical_requests(dims in catalog_dimensions()) {
        let ctx = ReportContext::new(Catalog::builtin());
        let native = ReportArgs { dimensions: json!(dims), ..ReportArgs::new("1") };
        let encoded = ReportArgs {
            dimensions: json!(serde_json::to_string(&dims).unwrap()),
            ..ReportArgs::new("1")
        };
        let comma = ReportArgs { dimensions: json!(dims.join(", ")), ..ReportArgs::new("1") };

        let expected = prepare_report(&native, &ctx).unwrap();
        prop_assert_eq!(&prepare_report(&encoded, &ctx).unwrap(), &expected);
        prop_assert_eq!(&prepare_report(&comma, &ctx).unwrap(), &expected);
    }
}

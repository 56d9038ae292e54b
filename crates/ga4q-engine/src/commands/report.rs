//! Report pipeline: argument normalisation, validation, execution and
//! flattening.
//!
//! `prepare_report` stops once the `QueryRequest` is assembled (used for dry
//! runs); `execute_report` sends an assembled request and flattens the answer.
//! `run_report` is the two in sequence.

use ga4q_core::backend::{BackendFailure, ReportBackend};
use ga4q_core::catalog::{Catalog, FieldKind};
use ga4q_core::errors::{QueryError, Result};
use ga4q_core::filter::{FilterCompiler, FilterNode, MAX_FILTER_DEPTH};
use ga4q_core::normalize::normalize_field_list;
use ga4q_core::property::{normalize_property_id, PropertyDirectory};
use ga4q_core::query::{
    DateRange, QueryRequest, DEFAULT_DIMENSIONS, DEFAULT_END_DATE, DEFAULT_METRICS,
    DEFAULT_START_DATE,
};
use ga4q_core::report::{flatten_rows, ReportRow};
use serde_json::{json, Map, Value};

/// Raw `get_ga4_data` arguments, before normalisation
#[derive(Debug, Clone, PartialEq)]
pub struct ReportArgs {
    pub property_id: Value,
    pub dimensions: Value,
    pub metrics: Value,
    pub date_range_start: String,
    pub date_range_end: String,
    pub dimension_filter: Value,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            property_id: Value::Null,
            dimensions: json!(DEFAULT_DIMENSIONS),
            metrics: json!(DEFAULT_METRICS),
            date_range_start: DEFAULT_START_DATE.to_string(),
            date_range_end: DEFAULT_END_DATE.to_string(),
            dimension_filter: Value::Null,
        }
    }
}

impl ReportArgs {
    pub fn new(property_id: impl Into<Value>) -> Self {
        Self {
            property_id: property_id.into(),
            ..Self::default()
        }
    }

    /// Decode named tool arguments; absent or null keys take defaults.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for unknown keys, non-string dates, or a non-object
    /// argument set.
    pub fn from_json(args: &Value) -> Result<Self> {
        let obj = match args {
            Value::Null => return Ok(Self::default()),
            Value::Object(obj) => obj,
            other => {
                return Err(QueryError::InvalidArgument {
                    name: "arguments".to_string(),
                    reason: format!("expected an object, got {other}"),
                })
            }
        };
        reject_unknown_args(
            obj,
            &[
                "property_id",
                "dimensions",
                "metrics",
                "date_range_start",
                "date_range_end",
                "dimension_filter",
            ],
        )?;

        let mut parsed = Self::default();
        if let Some(v) = present(obj, "property_id") {
            parsed.property_id = v.clone();
        }
        if let Some(v) = present(obj, "dimensions") {
            parsed.dimensions = v.clone();
        }
        if let Some(v) = present(obj, "metrics") {
            parsed.metrics = v.clone();
        }
        if let Some(v) = present(obj, "date_range_start") {
            parsed.date_range_start = string_arg("date_range_start", v)?;
        }
        if let Some(v) = present(obj, "date_range_end") {
            parsed.date_range_end = string_arg("date_range_end", v)?;
        }
        if let Some(v) = present(obj, "dimension_filter") {
            parsed.dimension_filter = v.clone();
        }
        Ok(parsed)
    }
}

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

pub(crate) fn reject_unknown_args(obj: &Map<String, Value>, allowed: &[&str]) -> Result<()> {
    match obj.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(key) => Err(QueryError::InvalidArgument {
            name: key.clone(),
            reason: format!("unexpected argument; expected one of {}", allowed.join(", ")),
        }),
        None => Ok(()),
    }
}

pub(crate) fn string_arg(name: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| QueryError::InvalidArgument {
            name: name.to_string(),
            reason: format!("expected a string, got {value}"),
        })
}

/// Read-only collaborators of one report call
#[derive(Clone, Copy)]
pub struct ReportContext<'a> {
    pub catalog: &'a Catalog,
    pub directory: Option<&'a dyn PropertyDirectory>,
    pub max_filter_depth: usize,
}

impl<'a> ReportContext<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            directory: None,
            max_filter_depth: MAX_FILTER_DEPTH,
        }
    }

    pub fn with_directory(mut self, directory: &'a dyn PropertyDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_max_filter_depth(mut self, max_depth: usize) -> Self {
        self.max_filter_depth = max_depth;
        self
    }

    fn compiler(&self) -> FilterCompiler<'a> {
        FilterCompiler::new(self.catalog).with_max_depth(self.max_filter_depth)
    }
}

/// Parse and compile the `dimension_filter` argument.
///
/// `null` and blank strings mean no filter.
fn compile_filter_arg(raw: &Value, compiler: &FilterCompiler<'_>) -> Result<Option<FilterNode>> {
    let parsed;
    let expr = match raw {
        Value::Null => return Ok(None),
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::String(text) => {
            parsed = serde_json::from_str::<Value>(text).map_err(|e| {
                QueryError::InvalidFilterJson {
                    reason: e.to_string(),
                }
            })?;
            &parsed
        }
        Value::Object(_) => raw,
        other => {
            return Err(QueryError::InvalidArgument {
                name: "dimension_filter".to_string(),
                reason: format!("must be a JSON string or object, got {other}"),
            })
        }
    };
    tracing::debug!(dimension_filter = %expr, "compiling dimension_filter");
    compiler.compile(expr).map(Some)
}

/// Validate and assemble a report request without running it.
///
/// # Errors
///
/// The first failing step: missing or unknown property, empty dimension or
/// metric list, unparseable or invalid filter.
pub fn prepare_report(args: &ReportArgs, ctx: &ReportContext<'_>) -> Result<QueryRequest> {
    let property_id = normalize_property_id(&args.property_id)?;

    if let Some(directory) = ctx.directory {
        if !directory.validate(&property_id) {
            return Err(QueryError::UnknownProperty {
                property_id,
                known: directory.known_ids(),
            });
        }
    }

    let dimensions = normalize_field_list(FieldKind::Dimension, &args.dimensions)?;
    let metrics = normalize_field_list(FieldKind::Metric, &args.metrics)?;
    let filter = compile_filter_arg(&args.dimension_filter, &ctx.compiler())?;

    Ok(QueryRequest {
        property_id,
        dimensions,
        metrics,
        date_range: DateRange::new(args.date_range_start.clone(), args.date_range_end.clone()),
        filter,
    })
}

/// Run a report end to end and flatten its rows.
///
/// # Errors
///
/// Everything `prepare_report` fails with, plus a classified backend failure.
pub fn run_report(
    args: &ReportArgs,
    ctx: &ReportContext<'_>,
    backend: &dyn ReportBackend,
) -> Result<Vec<ReportRow>> {
    let request = prepare_report(args, ctx)?;
    execute_report(request, backend)
}

/// Send an already validated request and flatten the response.
///
/// # Errors
///
/// A classified backend failure.
pub fn execute_report(
    request: QueryRequest,
    backend: &dyn ReportBackend,
) -> Result<Vec<ReportRow>> {
    let property_id = request.property_id.clone();
    tracing::debug!(
        property_id = %property_id,
        dimension_count = request.dimensions.len(),
        metric_count = request.metrics.len(),
        "forwarding report request"
    );
    let response = backend
        .run_report(request)
        .map_err(|failure| classify_backend_failure(&property_id, failure))?;
    Ok(flatten_rows(&response))
}

/// Map a backend failure onto the upstream error kinds by message text.
pub fn classify_backend_failure(property_id: &str, failure: BackendFailure) -> QueryError {
    let text = failure.message.to_lowercase();
    let BackendFailure { message, details } = failure;
    if text.contains("not found") || text.contains("invalid resource") {
        QueryError::PropertyNotAccessible {
            property_id: property_id.to_string(),
            details,
        }
    } else if text.contains("permission denied") || text.contains("permission_denied") {
        QueryError::PermissionDenied {
            property_id: property_id.to_string(),
            details,
        }
    } else if text.contains("quota") || text.contains("resource_exhausted") {
        QueryError::QuotaExceeded { details }
    } else {
        QueryError::Upstream { message, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ga4q_core::property::{PropertyInfo, StaticPropertyDirectory};

    #[test]
    fn test_defaults_match_tool_signature() {
        let args = ReportArgs::default();
        assert_eq!(args.dimensions, json!(["date"]));
        assert_eq!(
            args.metrics,
            json!([
                "totalUsers",
                "newUsers",
                "bounceRate",
                "screenPageViewsPerSession",
                "averageSessionDuration"
            ])
        );
        assert_eq!(args.date_range_start, "7daysAgo");
        assert_eq!(args.date_range_end, "yesterday");
        assert!(args.dimension_filter.is_null());
    }

    #[test]
    fn test_from_json_null_keys_take_defaults() {
        let args = ReportArgs::from_json(&json!({
            "property_id": "1",
            "metrics": null,
            "date_range_end": "today"
        }))
        .unwrap();
        assert_eq!(args.property_id, json!("1"));
        assert_eq!(args.metrics, ReportArgs::default().metrics);
        assert_eq!(args.date_range_end, "today");
    }

    #[test]
    fn test_from_json_rejects_unknown_and_mistyped() {
        assert!(matches!(
            ReportArgs::from_json(&json!({"propertyId": "1"})),
            Err(QueryError::InvalidArgument { ref name, .. }) if name == "propertyId"
        ));
        assert!(matches!(
            ReportArgs::from_json(&json!({"date_range_start": 7})),
            Err(QueryError::InvalidArgument { .. })
        ));
        assert!(ReportArgs::from_json(&json!([1])).is_err());
    }

    #[test]
    fn test_blank_filter_string_is_no_filter() {
        let ctx = ReportContext::new(Catalog::builtin());
        let mut args = ReportArgs::new("1");
        args.dimension_filter = json!("   ");
        assert_eq!(prepare_report(&args, &ctx).unwrap().filter, None);
    }

    #[test]
    fn test_filter_of_wrong_type_is_invalid_argument() {
        let ctx = ReportContext::new(Catalog::builtin());
        let mut args = ReportArgs::new("1");
        args.dimension_filter = json!([{"filter": {}}]);
        assert!(matches!(
            prepare_report(&args, &ctx),
            Err(QueryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_unparseable_filter_text_is_invalid_json() {
        let ctx = ReportContext::new(Catalog::builtin());
        let mut args = ReportArgs::new("1");
        args.dimension_filter = json!("{not json");
        assert!(matches!(
            prepare_report(&args, &ctx),
            Err(QueryError::InvalidFilterJson { .. })
        ));
    }

    #[test]
    fn test_directory_rejects_unknown_property() {
        let directory = StaticPropertyDirectory::new(vec![PropertyInfo::new("42", "Site")]);
        let ctx = ReportContext::new(Catalog::builtin()).with_directory(&directory);
        let err = prepare_report(&ReportArgs::new("7"), &ctx).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownProperty {
                property_id: "7".to_string(),
                known: vec!["42".to_string()],
            }
        );
    }

    #[test]
    fn test_validation_skipped_without_directory() {
        let ctx = ReportContext::new(Catalog::builtin());
        assert!(prepare_report(&ReportArgs::new("7"), &ctx).is_ok());
    }

    #[test]
    fn test_classification_patterns() {
        let classify = |msg: &str| classify_backend_failure("9", BackendFailure::new(msg));
        assert!(matches!(
            classify("Property not found: properties/9"),
            QueryError::PropertyNotAccessible { .. }
        ));
        assert!(matches!(
            classify("Invalid resource name"),
            QueryError::PropertyNotAccessible { .. }
        ));
        assert!(matches!(
            classify("403 PERMISSION_DENIED"),
            QueryError::PermissionDenied { .. }
        ));
        assert!(matches!(
            classify("429 RESOURCE_EXHAUSTED: tokens"),
            QueryError::QuotaExceeded { .. }
        ));
        assert_eq!(
            classify("connection reset"),
            QueryError::Upstream {
                message: "connection reset".to_string(),
                details: None,
            }
        );
    }
}

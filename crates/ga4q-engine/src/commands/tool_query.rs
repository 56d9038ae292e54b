//! Tool query surface.
//!
//! `apply_tool_query` is the single entry point for every tool. Each branch
//! logs exactly one start and one end or error event, and every error leaves
//! tagged with the operation and the request id.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use ga4q_core::backend::ReportBackend;
use ga4q_core::catalog::{Catalog, FieldKind};
use ga4q_core::errors::{ExError, QueryError};
use ga4q_core::property::{normalize_property_id, PropertyDirectory, PropertyInfo};
use ga4q_core::report::ReportRow;
use ga4q_core::{log_op_end, log_op_error, log_op_start};
use ga4q_core_types::RequestContext;
use serde_json::{json, Value};

use crate::commands::read_tools::{CategoryFields, CategoryListing};
use crate::commands::report::{
    execute_report, prepare_report, reject_unknown_args, string_arg, ReportArgs, ReportContext,
};
use crate::errors::{backend_unavailable, directory_unavailable, from_query, Result};

pub const TOOL_LIST_PROPERTIES: &str = "list_ga4_properties";
pub const TOOL_GET_PROPERTY_INFO: &str = "get_ga4_property_info";
pub const TOOL_LIST_DIMENSION_CATEGORIES: &str = "list_dimension_categories";
pub const TOOL_LIST_METRIC_CATEGORIES: &str = "list_metric_categories";
pub const TOOL_GET_DIMENSIONS_BY_CATEGORY: &str = "get_dimensions_by_category";
pub const TOOL_GET_METRICS_BY_CATEGORY: &str = "get_metrics_by_category";
pub const TOOL_GET_DATA: &str = "get_ga4_data";

/// Every tool name, in registration order
pub const TOOL_NAMES: [&str; 7] = [
    TOOL_LIST_PROPERTIES,
    TOOL_GET_PROPERTY_INFO,
    TOOL_LIST_DIMENSION_CATEGORIES,
    TOOL_LIST_METRIC_CATEGORIES,
    TOOL_GET_DIMENSIONS_BY_CATEGORY,
    TOOL_GET_METRICS_BY_CATEGORY,
    TOOL_GET_DATA,
];

// ---------------------------------------------------------------------------
// ToolQuery
// ---------------------------------------------------------------------------

/// Tool invocations supported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolQuery {
    // ── Properties ───────────────────────────────────────────────────────────
    /// List every accessible property.
    ListProperties,
    /// Get one property's details.
    GetPropertyInfo { property_id: Value },

    // ── Catalog ──────────────────────────────────────────────────────────────
    ListDimensionCategories,
    ListMetricCategories,
    GetDimensionsByCategory { category: String },
    GetMetricsByCategory { category: String },

    // ── Report ───────────────────────────────────────────────────────────────
    /// Run a report and flatten its rows.
    GetData(ReportArgs),
}

impl ToolQuery {
    /// Decode a named tool call.
    ///
    /// # Errors
    ///
    /// `UnknownTool` for an unrecognised name; `InvalidArgument` for
    /// unexpected or mistyped arguments.
    pub fn from_call(name: &str, arguments: &Value) -> std::result::Result<Self, QueryError> {
        let empty = serde_json::Map::new();
        let args = match arguments {
            Value::Null => &empty,
            Value::Object(obj) => obj,
            other => {
                return Err(QueryError::InvalidArgument {
                    name: "arguments".to_string(),
                    reason: format!("expected an object, got {other}"),
                })
            }
        };
        let category = || -> std::result::Result<String, QueryError> {
            reject_unknown_args(args, &["category"])?;
            match args.get("category") {
                Some(value) => string_arg("category", value),
                None => Err(QueryError::InvalidArgument {
                    name: "category".to_string(),
                    reason: "required".to_string(),
                }),
            }
        };

        match name {
            TOOL_LIST_PROPERTIES => {
                reject_unknown_args(args, &[])?;
                Ok(ToolQuery::ListProperties)
            }
            TOOL_GET_PROPERTY_INFO => {
                reject_unknown_args(args, &["property_id"])?;
                Ok(ToolQuery::GetPropertyInfo {
                    property_id: args.get("property_id").cloned().unwrap_or(Value::Null),
                })
            }
            TOOL_LIST_DIMENSION_CATEGORIES => {
                reject_unknown_args(args, &[])?;
                Ok(ToolQuery::ListDimensionCategories)
            }
            TOOL_LIST_METRIC_CATEGORIES => {
                reject_unknown_args(args, &[])?;
                Ok(ToolQuery::ListMetricCategories)
            }
            TOOL_GET_DIMENSIONS_BY_CATEGORY => Ok(ToolQuery::GetDimensionsByCategory {
                category: category()?,
            }),
            TOOL_GET_METRICS_BY_CATEGORY => Ok(ToolQuery::GetMetricsByCategory {
                category: category()?,
            }),
            TOOL_GET_DATA => ReportArgs::from_json(arguments).map(ToolQuery::GetData),
            _ => Err(QueryError::UnknownTool {
                name: name.to_string(),
            }),
        }
    }

    /// Tool name, also used as the logged operation.
    pub fn op_name(&self) -> &'static str {
        match self {
            ToolQuery::ListProperties => TOOL_LIST_PROPERTIES,
            ToolQuery::GetPropertyInfo { .. } => TOOL_GET_PROPERTY_INFO,
            ToolQuery::ListDimensionCategories => TOOL_LIST_DIMENSION_CATEGORIES,
            ToolQuery::ListMetricCategories => TOOL_LIST_METRIC_CATEGORIES,
            ToolQuery::GetDimensionsByCategory { .. } => TOOL_GET_DIMENSIONS_BY_CATEGORY,
            ToolQuery::GetMetricsByCategory { .. } => TOOL_GET_METRICS_BY_CATEGORY,
            ToolQuery::GetData(_) => TOOL_GET_DATA,
        }
    }
}

// ---------------------------------------------------------------------------
// ToolQueryResult
// ---------------------------------------------------------------------------

/// All possible results from `apply_tool_query`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolQueryResult {
    Properties(Vec<PropertyInfo>),
    PropertyInfo(PropertyInfo),
    Categories(CategoryListing),
    CategoryFields(CategoryFields),
    Rows(Vec<ReportRow>),
}

impl ToolQueryResult {
    /// Render the success payload.
    pub fn to_json(&self) -> Value {
        match self {
            ToolQueryResult::Properties(props) => json!(props),
            ToolQueryResult::PropertyInfo(info) => json!(info),
            ToolQueryResult::Categories(listing) => listing.to_json(),
            ToolQueryResult::CategoryFields(fields) => fields.to_json(),
            ToolQueryResult::Rows(rows) => json!(rows),
        }
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Collaborators available to tool calls
///
/// Directory and backend are optional: without a directory, property tools
/// fail and report property validation is skipped; without a backend,
/// `get_ga4_data` fails.
#[derive(Clone, Copy)]
pub struct ToolContext<'a> {
    pub catalog: &'a Catalog,
    pub directory: Option<&'a dyn PropertyDirectory>,
    pub backend: Option<&'a dyn ReportBackend>,
    pub max_filter_depth: usize,
}

impl<'a> ToolContext<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            directory: None,
            backend: None,
            max_filter_depth: ga4q_core::filter::MAX_FILTER_DEPTH,
        }
    }

    pub fn with_directory(mut self, directory: &'a dyn PropertyDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_backend(mut self, backend: &'a dyn ReportBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_max_filter_depth(mut self, max_depth: usize) -> Self {
        self.max_filter_depth = max_depth;
        self
    }

    pub fn report_context(&self) -> ReportContext<'a> {
        let ctx = ReportContext::new(self.catalog).with_max_filter_depth(self.max_filter_depth);
        match self.directory {
            Some(directory) => ctx.with_directory(directory),
            None => ctx,
        }
    }
}

// ---------------------------------------------------------------------------
// apply_tool_query
// ---------------------------------------------------------------------------

/// Run one tool.
///
/// # Errors
///
/// Any validation, directory, or backend failure, tagged with the tool name
/// and the request id.
pub fn apply_tool_query(
    query: ToolQuery,
    ctx: &ToolContext<'_>,
    request: &RequestContext,
) -> Result<ToolQueryResult> {
    let op = query.op_name();
    let span = tracing::info_span!(
        "tool",
        request_id = %request.request_id,
        trace_id = request.trace_id.as_ref().map(|t| t.as_str()),
    );
    let _guard = span.enter();

    let result = match query {
        // ── ListProperties ───────────────────────────────────────────────────
        ToolQuery::ListProperties => {
            log_op_start!(op);
            let start = Instant::now();

            let result = (|| -> Result<ToolQueryResult> {
                let directory = ctx.directory.ok_or_else(|| directory_unavailable(op))?;
                let props = directory.list().map_err(|e| from_query(op, e))?;
                Ok(ToolQueryResult::Properties(props))
            })();

            finish(op, start, &result);
            result
        }

        // ── GetPropertyInfo ──────────────────────────────────────────────────
        ToolQuery::GetPropertyInfo { property_id } => {
            log_op_start!(op);
            let start = Instant::now();

            let result = (|| -> Result<ToolQueryResult> {
                let directory = ctx.directory.ok_or_else(|| directory_unavailable(op))?;
                let id = normalize_property_id(&property_id).map_err(|e| from_query(op, e))?;
                let info = directory.get(&id).map_err(|e| from_query(op, e))?;
                Ok(ToolQueryResult::PropertyInfo(info))
            })();

            finish(op, start, &result);
            result
        }

        // ── Category listings ────────────────────────────────────────────────
        ToolQuery::ListDimensionCategories | ToolQuery::ListMetricCategories => {
            log_op_start!(op);
            let start = Instant::now();

            let kind = if matches!(query, ToolQuery::ListDimensionCategories) {
                FieldKind::Dimension
            } else {
                FieldKind::Metric
            };
            let result = Ok(ToolQueryResult::Categories(CategoryListing::from_catalog(
                ctx.catalog,
                kind,
            )));

            finish(op, start, &result);
            result
        }

        // ── Fields by category ───────────────────────────────────────────────
        ToolQuery::GetDimensionsByCategory { ref category }
        | ToolQuery::GetMetricsByCategory { ref category } => {
            log_op_start!(op, category = category.as_str());
            let start = Instant::now();

            let kind = if matches!(query, ToolQuery::GetDimensionsByCategory { .. }) {
                FieldKind::Dimension
            } else {
                FieldKind::Metric
            };
            let result = ctx
                .catalog
                .require_category(kind, category)
                .map(|c| ToolQueryResult::CategoryFields(CategoryFields::from_category(kind, c)))
                .map_err(|e| from_query(op, e));

            finish(op, start, &result);
            result
        }

        // ── GetData ──────────────────────────────────────────────────────────
        ToolQuery::GetData(args) => {
            log_op_start!(op);
            let start = Instant::now();

            let result = (|| -> Result<ToolQueryResult> {
                let prepared = prepare_report(&args, &ctx.report_context())
                    .map_err(|e| from_query(op, e))?;
                let backend = ctx.backend.ok_or_else(|| backend_unavailable(op))?;
                let rows = execute_report(prepared, backend).map_err(|e| from_query(op, e))?;
                Ok(ToolQueryResult::Rows(rows))
            })();

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(ToolQueryResult::Rows(rows)) => {
                    log_op_end!(op, duration_ms = elapsed, row_count = rows.len())
                }
                Ok(_) => log_op_end!(op, duration_ms = elapsed),
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!(op, e_clone, duration_ms = elapsed);
                }
            }
            result
        }
    };

    result.map_err(|e| tag_request(e, request))
}

fn finish(op: &str, start: Instant, result: &Result<ToolQueryResult>) {
    let elapsed = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
}

/// Attach the request and trace id of a call to its error.
pub fn tag_request(err: ExError, request: &RequestContext) -> ExError {
    let err = err.with_request_id(request.request_id.clone());
    match &request.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id.clone()),
        None => err,
    }
}

/// Decode and run a named tool call.
///
/// # Errors
///
/// `UnknownTool` or `InvalidArgument` from decoding, otherwise whatever
/// `apply_tool_query` fails with. Every error carries the request context.
pub fn dispatch_tool(
    name: &str,
    arguments: &Value,
    ctx: &ToolContext<'_>,
    request: &RequestContext,
) -> Result<ToolQueryResult> {
    match ToolQuery::from_call(name, arguments) {
        Ok(query) => apply_tool_query(query, ctx, request),
        Err(err) => {
            tracing::debug!(tool = name, reason = %err, "tool call rejected");
            Err(tag_request(from_query(name, err), request))
        }
    }
}

/// Run a named tool call and render either payload.
pub fn call_tool(name: &str, arguments: &Value, ctx: &ToolContext<'_>) -> Value {
    match dispatch_tool(name, arguments, ctx, &RequestContext::new()) {
        Ok(result) => result.to_json(),
        Err(err) => err.to_payload(),
    }
}

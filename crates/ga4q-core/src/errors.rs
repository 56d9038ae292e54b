use ga4q_core_types::{RequestId, TraceId};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::FieldKind;

/// Result type alias using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;

// ========== Error Facility ==========

/// Coarse error classes reported to tool callers.
///
/// Validation errors are the caller's to fix; upstream errors come from the
/// reporting backend or the property directory; configuration errors are
/// fatal at process start and never produced per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Upstream,
    Configuration,
    Internal,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Validation => "validation",
            ErrorClass::Upstream => "upstream",
            ErrorClass::Configuration => "configuration",
            ErrorClass::Internal => "internal",
        }
    }
}

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on, and to
/// exactly one [`ErrorClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    EmptyList,
    MissingProperty,
    UnknownProperty,
    InvalidFilter,
    InvalidJson,
    InvalidArgument,
    UnknownCategory,
    UnknownTool,

    // Upstream
    Upstream,
    PropertyNotAccessible,
    PermissionDenied,
    QuotaExceeded,
    DirectoryUnavailable,

    // Configuration
    Configuration,

    // Internal
    Serialization,
    Io,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyList => "ERR_EMPTY_LIST",
            ExErrorKind::MissingProperty => "ERR_MISSING_PROPERTY",
            ExErrorKind::UnknownProperty => "ERR_UNKNOWN_PROPERTY",
            ExErrorKind::InvalidFilter => "ERR_INVALID_FILTER",
            ExErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::UnknownCategory => "ERR_UNKNOWN_CATEGORY",
            ExErrorKind::UnknownTool => "ERR_UNKNOWN_TOOL",
            ExErrorKind::Upstream => "ERR_UPSTREAM",
            ExErrorKind::PropertyNotAccessible => "ERR_PROPERTY_NOT_ACCESSIBLE",
            ExErrorKind::PermissionDenied => "ERR_PERMISSION_DENIED",
            ExErrorKind::QuotaExceeded => "ERR_QUOTA_EXCEEDED",
            ExErrorKind::DirectoryUnavailable => "ERR_DIRECTORY_UNAVAILABLE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Get the class this kind belongs to
    pub fn class(&self) -> ErrorClass {
        match self {
            ExErrorKind::EmptyList
            | ExErrorKind::MissingProperty
            | ExErrorKind::UnknownProperty
            | ExErrorKind::InvalidFilter
            | ExErrorKind::InvalidJson
            | ExErrorKind::InvalidArgument
            | ExErrorKind::UnknownCategory
            | ExErrorKind::UnknownTool => ErrorClass::Validation,
            ExErrorKind::Upstream
            | ExErrorKind::PropertyNotAccessible
            | ExErrorKind::PermissionDenied
            | ExErrorKind::QuotaExceeded
            | ExErrorKind::DirectoryUnavailable => ErrorClass::Upstream,
            ExErrorKind::Configuration => ErrorClass::Configuration,
            ExErrorKind::Serialization | ExErrorKind::Io | ExErrorKind::Internal => {
                ErrorClass::Internal
            }
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind plus whatever context the failing operation knew:
/// the property being queried, the offending field, upstream detail text,
/// and candidate values the caller could have used instead.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    property_id: Option<String>,
    field: Option<String>,
    message: String,
    details: Option<String>,
    candidates: Option<Vec<String>>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            property_id: None,
            field: None,
            message: String::new(),
            details: None,
            candidates: None,
            request_id: None,
            trace_id: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the property id being queried
    pub fn with_property_id(mut self, id: impl Into<String>) -> Self {
        self.property_id = Some(id.into());
        self
    }

    /// Add the dimension or metric name at fault
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add detail text exposed by the backend
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Add candidate values (known property ids, category names)
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn property_id(&self) -> Option<&str> {
        self.property_id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Render the structured error payload returned to tool callers.
    ///
    /// `error` always holds the human-readable message; the remaining keys
    /// appear only when the error carries that context.
    pub fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        let message = if self.message.is_empty() {
            self.kind.code().to_string()
        } else {
            self.message.clone()
        };
        payload.insert("error".to_string(), Value::String(message));
        payload.insert("code".to_string(), Value::from(self.code()));
        payload.insert("class".to_string(), Value::from(self.class().as_str()));
        if let Some(property_id) = &self.property_id {
            payload.insert("property_id".to_string(), Value::from(property_id.as_str()));
        }
        if let Some(field) = &self.field {
            payload.insert("field".to_string(), Value::from(field.as_str()));
        }
        if let Some(details) = &self.details {
            payload.insert("details".to_string(), Value::from(details.as_str()));
        }
        if let Some(candidates) = &self.candidates {
            payload.insert(
                "candidates".to_string(),
                Value::Array(candidates.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(request_id) = &self.request_id {
            payload.insert("request_id".to_string(), Value::from(request_id.as_str()));
        }
        if let Some(trace_id) = &self.trace_id {
            payload.insert("trace_id".to_string(), Value::from(trace_id.as_str()));
        }
        Value::Object(payload)
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(property_id) = &self.property_id {
            write!(f, " (property_id: {})", property_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while normalising, compiling, and running a query
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    // ===== Argument Errors =====
    /// A dimension or metric list normalised to zero names
    #[error("{} list cannot be empty after parsing.", .kind.title())]
    EmptyList { kind: FieldKind },

    /// A dimension or metric argument had an unusable JSON type
    #[error("{} must be a list or a string: {reason}", .kind.title())]
    InvalidList { kind: FieldKind, reason: String },

    /// No property id was supplied
    #[error("property_id is required. Use list_ga4_properties tool to get available property IDs.")]
    MissingProperty,

    /// The property directory does not know the id
    #[error("Invalid property ID: {property_id}.")]
    UnknownProperty {
        property_id: String,
        known: Vec<String>,
    },

    /// Generic named-argument error at the tool boundary
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Unknown catalog category
    #[error("Category '{category}' not found. Available categories: {available:?}")]
    UnknownCategory {
        kind: FieldKind,
        category: String,
        available: Vec<String>,
    },

    /// Unknown tool name
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    // ===== Filter Errors =====
    /// Filter text was not valid JSON
    #[error("Failed to parse dimension_filter JSON: {reason}")]
    InvalidFilterJson { reason: String },

    /// Leaf filter names a field outside the dimension catalog
    #[error("Invalid dimension '{field}' in dimension_filter.")]
    UnknownFilterField { field: String },

    /// Leaf filter without a usable fieldName
    #[error("Filter is missing a fieldName.")]
    MissingFilterField,

    /// Leaf filter without stringFilter or inListFilter
    #[error("Filter on '{field}' has no stringFilter or inListFilter.")]
    MissingMatcher { field: String },

    /// Leaf filter with both stringFilter and inListFilter
    #[error("Filter on '{field}' has both stringFilter and inListFilter.")]
    AmbiguousMatcher { field: String },

    /// Structurally invalid filter node
    #[error("Invalid dimension_filter structure: {reason}")]
    MalformedFilter { reason: String },

    /// Filter nested deeper than the compiler allows
    #[error("dimension_filter nesting exceeds the maximum depth of {max_depth}.")]
    FilterTooDeep { max_depth: usize },

    // ===== Upstream Errors =====
    /// Backend failure with no recognised pattern
    #[error("Error fetching GA4 data: {message}")]
    Upstream {
        message: String,
        details: Option<String>,
    },

    /// Backend reported the property as missing or the resource name as invalid
    #[error("Property ID '{property_id}' not found or not accessible. Use list_ga4_properties to get available property IDs.")]
    PropertyNotAccessible {
        property_id: String,
        details: Option<String>,
    },

    /// Backend rejected the credentials' access to the property
    #[error("Permission denied for property '{property_id}'. Check that the authorised account can read it.")]
    PermissionDenied {
        property_id: String,
        details: Option<String>,
    },

    /// Backend quota exhausted
    #[error("GA4 quota exhausted; retry later.")]
    QuotaExceeded { details: Option<String> },

    /// No property directory, or the directory itself failed
    #[error("{reason}")]
    DirectoryUnavailable { reason: String },

    // ===== Generic Errors =====
    /// Missing or invalid process configuration
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn with_details_suffix(message: String, details: &Option<String>) -> String {
    match details {
        Some(details) => format!("{} Details: {}", message, details),
        None => message,
    }
}

/// Conversion from QueryError to ExError
impl From<QueryError> for ExError {
    fn from(err: QueryError) -> Self {
        let message = err.to_string();
        match err {
            QueryError::EmptyList { kind } => ExError::new(ExErrorKind::EmptyList)
                .with_field(kind.plural())
                .with_message(message),

            QueryError::InvalidList { kind, .. } => ExError::new(ExErrorKind::InvalidArgument)
                .with_field(kind.plural())
                .with_message(message),

            QueryError::MissingProperty => {
                ExError::new(ExErrorKind::MissingProperty).with_message(message)
            }

            QueryError::UnknownProperty { property_id, known } => {
                let message = if known.is_empty() {
                    format!(
                        "Invalid property ID: {}. Use list_ga4_properties tool to get available property IDs.",
                        property_id
                    )
                } else {
                    format!(
                        "Invalid property ID: {}. Available property IDs: {:?}",
                        property_id, known
                    )
                };
                ExError::new(ExErrorKind::UnknownProperty)
                    .with_property_id(property_id)
                    .with_candidates(known)
                    .with_message(message)
            }

            QueryError::InvalidArgument { name, .. } => ExError::new(ExErrorKind::InvalidArgument)
                .with_field(name)
                .with_message(message),

            QueryError::UnknownCategory { available, .. } => {
                ExError::new(ExErrorKind::UnknownCategory)
                    .with_candidates(available)
                    .with_message(message)
            }

            QueryError::UnknownTool { .. } => {
                ExError::new(ExErrorKind::UnknownTool).with_message(message)
            }

            QueryError::InvalidFilterJson { .. } => {
                ExError::new(ExErrorKind::InvalidJson).with_message(message)
            }

            QueryError::UnknownFilterField { field }
            | QueryError::MissingMatcher { field }
            | QueryError::AmbiguousMatcher { field } => ExError::new(ExErrorKind::InvalidFilter)
                .with_field(field)
                .with_message(message),

            QueryError::MissingFilterField
            | QueryError::MalformedFilter { .. }
            | QueryError::FilterTooDeep { .. } => {
                ExError::new(ExErrorKind::InvalidFilter).with_message(message)
            }

            QueryError::Upstream { ref details, .. } => {
                let full = with_details_suffix(message, details);
                let ex = ExError::new(ExErrorKind::Upstream).with_message(full);
                match details {
                    Some(d) => ex.with_details(d.clone()),
                    None => ex,
                }
            }

            QueryError::PropertyNotAccessible {
                ref property_id,
                ref details,
            } => {
                let full = with_details_suffix(message, details);
                let ex = ExError::new(ExErrorKind::PropertyNotAccessible)
                    .with_property_id(property_id.clone())
                    .with_message(full);
                match details {
                    Some(d) => ex.with_details(d.clone()),
                    None => ex,
                }
            }

            QueryError::PermissionDenied {
                ref property_id,
                ref details,
            } => {
                let full = with_details_suffix(message, details);
                let ex = ExError::new(ExErrorKind::PermissionDenied)
                    .with_property_id(property_id.clone())
                    .with_message(full);
                match details {
                    Some(d) => ex.with_details(d.clone()),
                    None => ex,
                }
            }

            QueryError::QuotaExceeded { ref details } => {
                let full = with_details_suffix(message, details);
                let ex = ExError::new(ExErrorKind::QuotaExceeded).with_message(full);
                match details {
                    Some(d) => ex.with_details(d.clone()),
                    None => ex,
                }
            }

            QueryError::DirectoryUnavailable { .. } => {
                ExError::new(ExErrorKind::DirectoryUnavailable).with_message(message)
            }

            QueryError::Configuration { .. } => {
                ExError::new(ExErrorKind::Configuration).with_message(message)
            }

            QueryError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            QueryError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            QueryError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_err_prefixed_code() {
        let kinds = [
            ExErrorKind::EmptyList,
            ExErrorKind::InvalidFilter,
            ExErrorKind::Upstream,
            ExErrorKind::Configuration,
            ExErrorKind::Internal,
        ];
        for kind in kinds {
            assert!(kind.code().starts_with("ERR_"));
        }
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = ExError::new(ExErrorKind::InvalidFilter)
            .with_op("get_ga4_data")
            .with_field("country")
            .with_message("bad filter");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_INVALID_FILTER]"));
        assert!(text.contains("get_ga4_data"));
        assert!(text.contains("bad filter"));
        assert!(text.contains("country"));
    }

    #[test]
    fn test_payload_falls_back_to_code_without_message() {
        let payload = ExError::new(ExErrorKind::Internal).to_payload();
        assert_eq!(payload["error"], "ERR_INTERNAL");
        assert_eq!(payload["class"], "internal");
        assert!(payload.get("candidates").is_none());
    }

    #[test]
    fn test_upstream_details_are_appended_once() {
        let ex: ExError = QueryError::Upstream {
            message: "deadline exceeded".to_string(),
            details: Some("retry info".to_string()),
        }
        .into();
        assert_eq!(
            ex.message(),
            "Error fetching GA4 data: deadline exceeded Details: retry info"
        );
        assert_eq!(ex.details(), Some("retry info"));
    }
}

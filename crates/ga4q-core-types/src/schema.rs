//! Canonical schema constants for structured logging and events
//!
//! These constants keep tool logging and error payloads consistent.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TOOL: &str = "tool";

// Query identifiers
pub const FIELD_PROPERTY_ID: &str = "property_id";
pub const FIELD_CATEGORY: &str = "category";

// Collection sizes
pub const FIELD_DIMENSION_COUNT: &str = "dimension_count";
pub const FIELD_METRIC_COUNT: &str = "metric_count";
pub const FIELD_ROW_COUNT: &str = "row_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_CLASS: &str = "err.class";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

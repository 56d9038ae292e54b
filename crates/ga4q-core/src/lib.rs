//! GA4Q Core - query normalisation and filter compilation
//!
//! This crate holds the request-independent pieces of the report tools:
//! - The dimension and metric catalog
//! - Normalisation of loosely-typed field list arguments
//! - Compilation of nested dimension filters into validated trees
//! - Flattening of column-oriented report responses into rows
//! - The property directory and report backend seams
//!
//! Nothing here performs I/O; collaborators behind the traits do.

pub use ga4q_core_types as core_types;

pub mod backend;
pub mod catalog;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod normalize;
pub mod property;
pub mod query;
pub mod report;

// Re-export commonly used types
pub use backend::{BackendFailure, ReportBackend};
pub use catalog::{Catalog, FieldKind};
pub use errors::{ErrorClass, ExError, ExErrorKind, QueryError, Result};
pub use filter::{FilterCompiler, FilterNode, MAX_FILTER_DEPTH};
pub use normalize::{normalize_field_list, FieldList};
pub use property::{normalize_property_id, PropertyDirectory, PropertyInfo, StaticPropertyDirectory};
pub use query::{DateRange, QueryRequest};
pub use report::{flatten_rows, ReportResponse, ReportRow};

//! Tool orchestration layer.
//!
//! `report` runs the report pipeline, `tool_query` dispatches every tool,
//! and `read_tools` holds the result shapes of the catalog and property
//! tools.

pub mod read_tools;
pub mod report;
pub mod tool_query;

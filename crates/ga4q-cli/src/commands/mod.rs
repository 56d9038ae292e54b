//! CLI commands
//!
//! Each command builds a `ToolContext` from its flags and delegates to the
//! engine; nothing here talks to the network.

pub mod catalog;
pub mod config;
pub mod flatten;
pub mod plan;
pub mod report;
pub mod tool;

use std::path::Path;

use ga4q_core::errors::QueryError;
use ga4q_core::property::StaticPropertyDirectory;
use serde_json::Value;

/// Load a property directory from a JSON array file.
pub(crate) fn load_directory(path: &Path) -> Result<StaticPropertyDirectory, QueryError> {
    StaticPropertyDirectory::from_json(&read_text(path)?)
}

pub(crate) fn read_text(path: &Path) -> Result<String, QueryError> {
    std::fs::read_to_string(path).map_err(|e| QueryError::Io {
        message: format!("{}: {}", path.display(), e),
    })
}

/// Pretty-print a JSON payload to stdout.
pub(crate) fn print_json(value: &Value) -> Result<(), QueryError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

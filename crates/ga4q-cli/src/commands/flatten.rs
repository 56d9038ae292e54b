//! Flatten command
//!
//! Usage: ga4q flatten <FILE>

use std::path::PathBuf;

use clap::Args;
use ga4q_core::report::{flatten_rows, ReportResponse};

use super::{print_json, read_text};

#[derive(Debug, Args)]
pub struct FlattenArgs {
    /// Saved runReport response (JSON)
    pub file: PathBuf,
}

/// Execute flatten command
pub fn execute(args: FlattenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let response = ReportResponse::from_json(&read_text(&args.file)?)?;
    let rows = flatten_rows(&response);
    tracing::debug!(row_count = rows.len(), "flattened saved response");
    print_json(&serde_json::to_value(&rows)?)?;
    Ok(())
}

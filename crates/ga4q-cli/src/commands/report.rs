//! Report command
//!
//! Usage: ga4q report [QUERY FLAGS] --replay <FILE>
//!
//! Runs the full `get_ga4_data` pipeline against a saved runReport response
//! and prints the flattened rows.

use std::path::PathBuf;

use clap::Args;
use ga4q_core::catalog::Catalog;
use ga4q_core_types::RequestContext;
use ga4q_engine::commands::tool_query::{apply_tool_query, ToolContext, ToolQuery};

use super::plan::QueryArgs;
use super::{load_directory, print_json};
use crate::config::Settings;
use crate::replay::ReplayBackend;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Saved runReport response to answer from
    #[arg(long)]
    pub replay: Option<PathBuf>,
}

/// Execute report command
pub fn execute(args: ReportArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let directory = args
        .query
        .properties
        .as_deref()
        .map(load_directory)
        .transpose()?;
    let backend = args
        .replay
        .as_deref()
        .map(ReplayBackend::from_file)
        .transpose()?;

    let mut ctx =
        ToolContext::new(Catalog::builtin()).with_max_filter_depth(settings.max_filter_depth);
    if let Some(directory) = &directory {
        ctx = ctx.with_directory(directory);
    }
    if let Some(backend) = &backend {
        ctx = ctx.with_backend(backend);
    }

    let query = ToolQuery::GetData(args.query.to_report_args());
    let result = apply_tool_query(query, &ctx, &RequestContext::new())?;
    print_json(&result.to_json())?;
    Ok(())
}

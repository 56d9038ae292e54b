//! Plan command
//!
//! Usage: ga4q plan --property-id <ID> [--dimensions <LIST>] [--metrics <LIST>]
//!                  [--start <DATE>] [--end <DATE>] [--filter <JSON>]
//!                  [--properties <FILE>]
//!
//! Prints the runReport request body that `get_ga4_data` would send.

use std::path::PathBuf;

use clap::Args;
use ga4q_core::catalog::Catalog;
use ga4q_core::query::{DEFAULT_END_DATE, DEFAULT_START_DATE};
use ga4q_engine::commands::report::{prepare_report, ReportArgs, ReportContext};
use ga4q_engine::errors::from_query;
use serde_json::Value;

use super::{load_directory, print_json};
use crate::config::Settings;

/// Report arguments shared by `plan` and `report`
#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// GA4 property id, bare or as `properties/<id>`
    #[arg(short, long)]
    pub property_id: Option<String>,

    /// Dimensions: comma-separated names or a JSON array
    #[arg(short, long)]
    pub dimensions: Option<String>,

    /// Metrics: comma-separated names or a JSON array
    #[arg(short, long)]
    pub metrics: Option<String>,

    /// Start date (YYYY-MM-DD or relative, e.g. 7daysAgo)
    #[arg(long, default_value = DEFAULT_START_DATE)]
    pub start: String,

    /// End date (YYYY-MM-DD or relative, e.g. yesterday)
    #[arg(long, default_value = DEFAULT_END_DATE)]
    pub end: String,

    /// Dimension filter expression (JSON)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Known properties (JSON array); enables property id validation
    #[arg(long)]
    pub properties: Option<PathBuf>,
}

impl QueryArgs {
    pub fn to_report_args(&self) -> ReportArgs {
        let mut args = ReportArgs {
            date_range_start: self.start.clone(),
            date_range_end: self.end.clone(),
            ..ReportArgs::default()
        };
        if let Some(id) = &self.property_id {
            args.property_id = Value::String(id.clone());
        }
        if let Some(dimensions) = &self.dimensions {
            args.dimensions = Value::String(dimensions.clone());
        }
        if let Some(metrics) = &self.metrics {
            args.metrics = Value::String(metrics.clone());
        }
        if let Some(filter) = &self.filter {
            args.dimension_filter = Value::String(filter.clone());
        }
        args
    }
}

/// Execute plan command
pub fn execute(args: QueryArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let directory = args
        .properties
        .as_deref()
        .map(load_directory)
        .transpose()?;

    let mut ctx = ReportContext::new(Catalog::builtin())
        .with_max_filter_depth(settings.max_filter_depth);
    if let Some(directory) = &directory {
        ctx = ctx.with_directory(directory);
    }

    let request = prepare_report(&args.to_report_args(), &ctx).map_err(|e| from_query("plan", e))?;
    tracing::debug!(property = %request.resource_name(), "planned report request");
    print_json(&request.to_wire())?;
    Ok(())
}

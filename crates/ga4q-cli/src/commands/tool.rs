//! Tool command
//!
//! Usage: ga4q tool <NAME> [--args <JSON>] [--trace-id <ID>]
//!                  [--properties <FILE>] [--replay <FILE>]
//!
//! Invokes one named tool exactly as a tool host would and prints its JSON
//! payload. Error payloads are printed too, and the command then fails.

use std::path::PathBuf;

use clap::Args;
use ga4q_core::catalog::Catalog;
use ga4q_core::errors::{ExError, QueryError};
use ga4q_core_types::{RequestContext, TraceId};
use ga4q_engine::commands::tool_query::{dispatch_tool, tag_request, ToolContext};
use ga4q_engine::errors::from_query;
use serde_json::Value;

use super::{load_directory, print_json};
use crate::config::Settings;
use crate::replay::ReplayBackend;

#[derive(Debug, Args)]
pub struct ToolArgs {
    /// Tool name, e.g. get_ga4_data
    pub name: String,

    /// Tool arguments as a JSON object
    #[arg(short, long, default_value = "{}")]
    pub args: String,

    /// Trace id propagated from the calling agent
    #[arg(long)]
    pub trace_id: Option<String>,

    /// Known properties (JSON array)
    #[arg(long)]
    pub properties: Option<PathBuf>,

    /// Saved runReport response for get_ga4_data
    #[arg(long)]
    pub replay: Option<PathBuf>,
}

/// Execute tool command
pub fn execute(args: ToolArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let directory = args.properties.as_deref().map(load_directory).transpose()?;
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

    let mut request = RequestContext::new();
    if let Some(trace_id) = args.trace_id {
        request = request.with_trace_id(TraceId::from_string(trace_id));
    }

    let outcome = parse_arguments(&args.name, &args.args, &request)
        .and_then(|arguments| dispatch_tool(&args.name, &arguments, &ctx, &request));

    match outcome {
        Ok(result) => {
            print_json(&result.to_json())?;
            Ok(())
        }
        Err(err) => {
            print_json(&err.to_payload())?;
            Err(err.into())
        }
    }
}

fn parse_arguments(name: &str, raw: &str, request: &RequestContext) -> Result<Value, ExError> {
    serde_json::from_str(raw).map_err(|e| {
        let err = QueryError::InvalidArgument {
            name: "arguments".to_string(),
            reason: format!("not valid JSON: {e}"),
        };
        tag_request(from_query(name, err), request)
    })
}

//! Catalog command
//!
//! Usage: ga4q catalog <dimensions|metrics> [--category <NAME>]

use clap::{Args, Subcommand};
use ga4q_core::catalog::Catalog;
use ga4q_core_types::RequestContext;
use ga4q_engine::commands::tool_query::{apply_tool_query, ToolContext, ToolQuery};

use super::print_json;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List dimension categories, or one category's dimensions
    Dimensions(CategoryArgs),
    /// List metric categories, or one category's metrics
    Metrics(CategoryArgs),
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Show the fields of this category with descriptions
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Execute catalog command
pub fn execute(args: CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let query = match args.command {
        CatalogCommand::Dimensions(CategoryArgs { category: None }) => {
            ToolQuery::ListDimensionCategories
        }
        CatalogCommand::Dimensions(CategoryArgs {
            category: Some(category),
        }) => ToolQuery::GetDimensionsByCategory { category },
        CatalogCommand::Metrics(CategoryArgs { category: None }) => ToolQuery::ListMetricCategories,
        CatalogCommand::Metrics(CategoryArgs {
            category: Some(category),
        }) => ToolQuery::GetMetricsByCategory { category },
    };

    let ctx = ToolContext::new(Catalog::builtin());
    let result = apply_tool_query(query, &ctx, &RequestContext::new())?;
    print_json(&result.to_json())?;
    Ok(())
}

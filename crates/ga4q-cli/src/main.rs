//! ga4q CLI
//!
//! Command-line front end for the GA4 query core: catalog browsing, request
//! planning, offline report runs and direct tool invocation.

use clap::{Parser, Subcommand};
use ga4q_core::logging_facility;

mod commands;
mod config;
mod replay;

use config::{Settings, SettingsArgs};

#[derive(Debug, Parser)]
#[command(name = "ga4q")]
#[command(about = "ga4q - GA4 report query tools", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the dimension and metric catalog
    Catalog(commands::catalog::CatalogArgs),
    /// Print the runReport request a query would send
    Plan(commands::plan::QueryArgs),
    /// Run a query against a saved response and print flattened rows
    Report(commands::report::ReportArgs),
    /// Flatten a saved runReport response
    Flatten(commands::flatten::FlattenArgs),
    /// Invoke a tool by name with JSON arguments
    Tool(commands::tool::ToolArgs),
    /// Show effective settings
    Config(commands::config::ConfigArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from(cli.settings);
    logging_facility::init(settings.log_format.profile());

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::execute(args),
        Commands::Plan(args) => commands::plan::execute(args, &settings),
        Commands::Report(args) => commands::report::execute(args, &settings),
        Commands::Flatten(args) => commands::flatten::execute(args),
        Commands::Tool(args) => commands::tool::execute(args, &settings),
        Commands::Config(args) => commands::config::execute(args, &settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

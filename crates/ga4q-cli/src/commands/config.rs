//! Config command
//!
//! Usage: ga4q config [--check]
//!
//! Prints the effective settings with the client secret redacted.

use clap::Args;

use super::print_json;
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Fail unless OAuth client credentials are configured
    #[arg(long)]
    pub check: bool,
}

/// Execute config command
pub fn execute(args: ConfigArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    print_json(&settings.to_json())?;
    if args.check {
        settings.require_credentials()?;
        tracing::info!(transport = settings.transport.as_str(), "credentials present");
    }
    Ok(())
}

//! Main entry point for the Coffee Shop CLI

use clap::Parser;
use coffeeshop_cli::cli::Args;
use coffeeshop_common::logging;
use coffeeshop_env::environment;
use color_eyre::eyre::{eyre, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // The production flag only selects how chatty the default filter is
    let binary_name = env!("CARGO_BIN_NAME").replace('-', "_");
    let default_filter = logging::default_filter(environment().production, &binary_name);
    logging::init_logging(&args.verbosity, &default_filter)
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Running with {} environment", environment().mode());

    Ok(args.run().await?)
}

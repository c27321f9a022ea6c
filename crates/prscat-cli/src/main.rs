mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prscat_core::CatalogConfig;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CatalogConfig::from_env();
    init_tracing(&config.log_filter);
    commands::run(config, cli)
}

/// Logs go to stderr so command output on stdout stays valid JSON.
fn init_tracing(directives: &str) {
    let filter = EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(prscat_core::config::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

//! CLI entry point for twirl.

mod cli;
mod commands;
mod config;
mod output;

use std::sync::Arc;

use clap::Parser;
use twirl_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Logs go through [`output::log_line`] so a running spinner can hold them back.
fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(Arc::new(output::log_line));
    if verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn");
    }
    if let Err(e) = twirl_observability::init(config) {
        output::warning(&e.to_string());
    }
}

#[tokio::main]
async fn main() {
    config::load_env();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = commands::handle(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

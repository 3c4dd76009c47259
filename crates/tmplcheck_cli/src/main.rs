//! tmplcheck CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success, possibly with warnings
//! - 1: Validation failure or unreadable manifest/schema

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::Cli;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tmplcheck={default_level},warn")));

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    match commands::validate::execute(cli.args) {
        Ok(true) => ExitCode::from(ExitCodes::SUCCESS),
        Ok(false) => ExitCode::from(ExitCodes::FAILURE),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(ExitCodes::FAILURE)
        }
    }
}

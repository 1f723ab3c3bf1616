//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `release_fixer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use release_fixer::app::print_summary;
use release_fixer::initialization::init_logger_with;
use release_fixer::{run_fix, Config, ErrorKind, FixError, Opt};

fn main() -> Result<()> {
    // Missing <FILE> is reported by clap with usage and exit status 2
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_fix(&config) {
        Ok(report) => {
            print_summary(&report, &config.summary);
            Ok(())
        }
        Err(e) => {
            eprintln!("release_fixer error: {:#}", e);
            process::exit(exit_code_for(&e));
        }
    }
}

/// Maps a run error to the process exit status.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<FixError>()
        .map(FixError::kind)
        .unwrap_or(ErrorKind::FileAccess)
        .exit_code()
}

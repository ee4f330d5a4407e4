//! # calckit - command-line entry point
//!
//! 1. Parse CLI arguments
//! 2. Load configuration (file < env < flags)
//! 3. Initialize tracing on stderr (from flag/env alone if loading failed)
//! 4. Dispatch the command and print its output to stdout

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use calckit::cli::Cli;
use calckit::commands::{execute_command, failure_message};
use calckit::config::{self, Config, LogLevel};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = failure_message(err);
            error!("{message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    // Config failures still need a subscriber for the error report in `main`.
    let config = resolve_config(&cli).inspect_err(|_| {
        init_tracing(config::bootstrap_log_level(cli.log_level, |key| {
            std::env::var(key).ok()
        }));
    })?;
    init_tracing(config.log_level);
    debug!(?config, "configuration resolved");

    execute_command(cli.command, &config)
}

/// Load config from file and environment, then apply CLI flags on top.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    Ok(config)
}

/// Initialize tracing subscriber with environment filter.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so stdout
/// carries only command output.
fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

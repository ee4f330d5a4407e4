//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use calckit_core::Operation;
use clap::{Parser, Subcommand};

use crate::config::{LogLevel, OutputFormat};

/// calckit - chainable accumulator and helper functions
#[derive(Parser, Debug)]
#[command(name = "calckit")]
#[command(version)]
#[command(about = "Chainable accumulator and text/arithmetic helpers")]
#[command(
    long_about = "calckit runs an accumulator through a sequence of operations, evaluates two-operand arithmetic, and applies text helpers such as email shape validation and capitalization."
)]
pub struct Cli {
    /// Config file (defaults to the XDG config dir, then ./calckit.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an accumulator through operations like `add:10 mul:2 div:3`
    #[command(allow_negative_numbers = true)]
    Eval {
        /// Starting value (defaults to the configured `initial`)
        #[arg(short, long)]
        initial: Option<f64>,

        /// Operations: add|sub|mul|div|set:<n>, or reset (symbol aliases like `-:3` go after `--`)
        #[arg(required = true)]
        ops: Vec<Operation>,
    },

    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Add { a: f64, b: f64 },

    /// Subtract the second number from the first
    #[command(allow_negative_numbers = true)]
    Subtract { a: f64, b: f64 },

    /// Multiply two numbers
    #[command(allow_negative_numbers = true)]
    Multiply { a: f64, b: f64 },

    /// Check whether text has the shape of an email address
    Email {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Upper-case the first character of text
    Capitalize {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

//! CLI command handlers.
//!
//! Every handler returns the rendered output instead of printing, so the
//! dispatcher is testable without capturing stdout.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use anyhow::{Context, Result};
use calckit_core::prelude::*;
use tracing::{debug, info};

use crate::cli::Commands;
use crate::config::Config;
use crate::output::{ArithReport, CapitalizeReport, EmailReport, EvalReport, render};

/// Execute a CLI command with the resolved configuration.
///
/// # Errors
///
/// Returns an error if an `eval` operation fails (division by zero) or
/// output serialization fails.
pub fn execute_command(command: Commands, config: &Config) -> Result<String> {
    match command {
        Commands::Eval { initial, ops } => cmd_eval(initial.unwrap_or(config.initial), ops, config),
        Commands::Add { a, b } => cmd_arith("add", a, b, add, config),
        Commands::Subtract { a, b } => cmd_arith("subtract", a, b, subtract, config),
        Commands::Multiply { a, b } => cmd_arith("multiply", a, b, multiply, config),
        Commands::Email { text } => cmd_email(text, config),
        Commands::Capitalize { text } => cmd_capitalize(&text, config),
    }
}

/// Run an accumulator from `initial` through `ops`.
fn cmd_eval(initial: f64, ops: Vec<Operation>, config: &Config) -> Result<String> {
    info!(initial, steps = ops.len(), "evaluating operations");

    let steps = ops.len();
    let mut acc = Accumulator::new(initial);
    acc.apply_all(ops)
        .with_context(|| format!("Evaluation of {steps} operation(s) from {initial} failed"))?;

    let report = EvalReport {
        value: acc.value(),
        is_even: acc.is_even(),
        is_positive: acc.is_positive(),
        steps,
    };
    debug!(?report, "evaluation finished");
    render(&report, config.format, config.precision)
}

fn cmd_arith(
    operation: &'static str,
    a: f64,
    b: f64,
    f: fn(f64, f64) -> f64,
    config: &Config,
) -> Result<String> {
    let report = ArithReport {
        operation,
        a,
        b,
        result: f(a, b),
    };
    debug!(?report, "arithmetic helper");
    render(&report, config.format, config.precision)
}

fn cmd_email(text: String, config: &Config) -> Result<String> {
    let valid = is_valid_email(&text);
    debug!(email = %text, valid, "email shape check");
    render(&EmailReport { email: text, valid }, config.format, None)
}

fn cmd_capitalize(text: &str, config: &Config) -> Result<String> {
    let report = CapitalizeReport {
        input: text.to_string(),
        output: capitalize(text),
    };
    render(&report, config.format, None)
}

/// Normalize any command failure into a single display line.
#[must_use]
pub fn failure_message(err: anyhow::Error) -> String {
    let context = err.to_string();
    let root = err
        .downcast::<Error>()
        .map_or_else(|other| other.root_cause().to_string(), |core| {
            get_error_message(&Failure::error(core))
        });
    if context == root {
        root
    } else {
        format!("{context}: {root}")
    }
}

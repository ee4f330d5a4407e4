//! Integration tests for config loading and command dispatch.
//!
//! These tests verify that:
//! - Config files on disk are parsed, validated, and applied
//! - CLI arguments flow through to rendered output
//! - Failures carry a readable message

#![forbid(clippy::unwrap_used)]
#![forbid(clippy::expect_used)]
#![forbid(clippy::panic)]

use std::io::Write;

use calckit::cli::Cli;
use calckit::commands::{execute_command, failure_message};
use calckit::config::{self, ConfigError, LogLevel, OutputFormat};
use clap::Parser;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn write_config(content: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Config from an explicit file drives `eval`.
///
/// # GIVEN
/// A config file with `initial = 10` and `precision = 2`
///
/// # WHEN
/// `eval mul:2 sub:5 div:3` runs with that config
///
/// # THEN
/// The output is the fixed-precision result
#[test]
fn test_explicit_config_file_drives_eval() -> TestResult {
    let file = write_config("initial = 10\nprecision = 2\nlog_level = \"info\"\n")?;
    let config = config::load_file(file.path())?;
    assert_eq!(config.log_level, LogLevel::Info);

    let cli = Cli::try_parse_from(["calckit", "eval", "mul:2", "sub:5", "div:3"])?;
    let output = execute_command(cli.command, &config)?;

    assert_eq!(output, "5.00");
    Ok(())
}

/// A malformed config file is reported with its path.
#[test]
fn test_malformed_config_file() -> TestResult {
    let file = write_config("initial = [")?;
    let result = config::load_file(file.path());

    match result {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
        other => return Err(format!("expected parse error, got {other:?}").into()),
    }
    Ok(())
}

/// JSON output through the full parse-and-dispatch path.
#[test]
fn test_json_output_for_email() -> TestResult {
    let cli = Cli::try_parse_from(["calckit", "--format", "json", "email", "user @example.com"])?;
    let mut config = config::Config::default();
    if let Some(format) = cli.format {
        config.format = format;
    }
    assert_eq!(config.format, OutputFormat::Json);

    let output = execute_command(cli.command, &config)?;
    assert_eq!(output, r#"{"email":"user @example.com","valid":false}"#);
    Ok(())
}

/// Division by zero surfaces as a failure with context.
///
/// # GIVEN
/// An eval chain that divides by zero after one step
///
/// # WHEN
/// The command runs
///
/// # THEN
/// It fails and the message names the dividend
#[test]
fn test_division_by_zero_reports_failure() -> TestResult {
    let cli = Cli::try_parse_from(["calckit", "eval", "--initial", "3", "add:1", "div:0"])?;
    let outcome = execute_command(cli.command, &config::Config::default());

    let message = match outcome {
        Ok(output) => return Err(format!("expected failure, got {output}").into()),
        Err(err) => failure_message(err),
    };
    assert_eq!(
        message,
        "Evaluation of 2 operation(s) from 3 failed: cannot divide 4 by zero"
    );
    Ok(())
}

//! Command result rendering for text and JSON output.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;

/// Format a number with fixed decimals, or the shortest exact form.
#[must_use]
pub fn format_number(value: f64, precision: Option<u8>) -> String {
    match precision {
        Some(places) => format!("{value:.prec$}", prec = usize::from(places)),
        None => value.to_string(),
    }
}

/// A command result that can be printed as plain text or serialized.
pub trait Report: Serialize {
    /// Plain-text rendering.
    fn text(&self, precision: Option<u8>) -> String;
}

/// Render a report in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render<R: Report>(report: &R, format: OutputFormat, precision: Option<u8>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.text(precision)),
        OutputFormat::Json => serde_json::to_string(report).context("Failed to serialize report"),
    }
}

/// Final state of an `eval` run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    pub value: f64,
    pub is_even: bool,
    pub is_positive: bool,
    pub steps: usize,
}

impl Report for EvalReport {
    fn text(&self, precision: Option<u8>) -> String {
        format_number(self.value, precision)
    }
}

/// Result of a two-operand helper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArithReport {
    pub operation: &'static str,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

impl Report for ArithReport {
    fn text(&self, precision: Option<u8>) -> String {
        format_number(self.result, precision)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailReport {
    pub email: String,
    pub valid: bool,
}

impl Report for EmailReport {
    fn text(&self, _precision: Option<u8>) -> String {
        let verdict = if self.valid { "valid" } else { "invalid" };
        verdict.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapitalizeReport {
    pub input: String,
    pub output: String,
}

impl Report for CapitalizeReport {
    fn text(&self, _precision: Option<u8>) -> String {
        self.output.clone()
    }
}

//! Normalization of heterogeneous failure representations to display text.
//!
//! A [`Failure`] is a closed union of the shapes a failure can arrive in: a
//! structured error, a dynamically-typed value, or nothing at all.
//! [`get_error_message`] always produces a string and never fails.

use std::error::Error as StdError;

use serde_json::Value;

/// Fallback text for failures that carry no usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A failure in one of the shapes [`get_error_message`] understands.
#[derive(Debug)]
pub enum Failure {
    /// A structured error; its `Display` output is the message.
    Error(Box<dyn StdError + Send + Sync>),
    /// A dynamically-shaped value (string, number, record, ...).
    Value(Value),
    /// No value at all.
    Undefined,
}

impl Failure {
    /// Wrap a structured error.
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Box::new(err))
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Failure {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        Self::Error(err)
    }
}

impl From<Value> for Failure {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Failure {
    fn from(text: &str) -> Self {
        Self::Value(Value::String(text.to_owned()))
    }
}

impl From<String> for Failure {
    fn from(text: String) -> Self {
        Self::Value(Value::String(text))
    }
}

impl<T: Into<Self>> From<Option<T>> for Failure {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// Resolve a failure to display text.
///
/// Checked in order: structured error, plain string, record with a
/// `message` field (coerced to text), then the [`UNKNOWN_ERROR`] fallback.
#[must_use]
pub fn get_error_message(failure: &Failure) -> String {
    match failure {
        Failure::Error(err) => err.to_string(),
        Failure::Value(Value::String(text)) => text.clone(),
        Failure::Value(Value::Object(record)) => record
            .get("message")
            .map_or_else(|| UNKNOWN_ERROR.to_owned(), coerce_to_text),
        Failure::Value(_) | Failure::Undefined => UNKNOWN_ERROR.to_owned(),
    }
}

/// Loose string coercion of a dynamic value.
fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        // integral floats drop the fraction: 404.0 renders as "404"
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_u64().map(|u| u.to_string()))
            .or_else(|| n.as_f64().map(|f| f.to_string()))
            .unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_owned(),
        // null elements render empty inside a joined list
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

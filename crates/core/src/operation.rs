//! Accumulator mutations expressed as data.
//!
//! Textual form is `name[:operand]`, e.g. `add:10`, `mul:-2`, `reset`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One mutation of an [`Accumulator`](crate::Accumulator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "operand", rename_all = "lowercase")]
pub enum Operation {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
    Set(f64),
    Reset,
}

impl Operation {
    /// Canonical short name used in the textual form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Subtract(_) => "sub",
            Self::Multiply(_) => "mul",
            Self::Divide(_) => "div",
            Self::Set(_) => "set",
            Self::Reset => "reset",
        }
    }

    /// Operand carried by this operation, if any.
    #[must_use]
    pub const fn operand(&self) -> Option<f64> {
        match self {
            Self::Add(n)
            | Self::Subtract(n)
            | Self::Multiply(n)
            | Self::Divide(n)
            | Self::Set(n) => Some(*n),
            Self::Reset => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(n) => write!(f, "{}:{n}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, operand) = match trimmed.split_once(':') {
            Some((name, operand)) => (name.trim(), Some(operand.trim())),
            None => (trimmed, None),
        };

        let lowered = name.to_lowercase();
        let build: fn(f64) -> Self = match lowered.as_str() {
            "add" | "+" => Self::Add,
            "sub" | "subtract" | "-" => Self::Subtract,
            "mul" | "multiply" | "*" => Self::Multiply,
            "div" | "divide" | "/" => Self::Divide,
            "set" => Self::Set,
            "reset" => {
                return match operand {
                    None => Ok(Self::Reset),
                    Some(_) => Err(Error::invalid_operation(s, "'reset' takes no operand")),
                };
            }
            "" => return Err(Error::invalid_operation(s, "missing operation name")),
            other => {
                return Err(Error::invalid_operation(
                    s,
                    format!("unknown operation '{other}'"),
                ));
            }
        };

        let raw = operand
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| Error::invalid_operation(s, format!("'{lowered}' needs an operand")))?;

        raw.parse::<f64>()
            .map(build)
            .map_err(|e| Error::invalid_operation(s, format!("bad operand '{raw}': {e}")))
    }
}

//! Prelude module - common imports for calckit
//!
//! ```rust
//! use calckit_core::prelude::*;
//! ```

pub use crate::accumulator::Accumulator;
pub use crate::error::{Error, Result};
pub use crate::helpers::{
    Failure, UNKNOWN_ERROR, add, capitalize, get_error_message, is_valid_email, multiply, subtract,
};
pub use crate::operation::Operation;

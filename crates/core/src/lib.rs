#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # calckit-core
//!
//! Core types for calckit.
//!
//! This crate provides:
//! - [`Accumulator`]: a chainable `f64` register whose only failure is division by zero
//! - [`Operation`]: accumulator mutations as data, parseable from `name[:operand]`
//! - [`helpers`]: pure arithmetic, error-message normalization, and text helpers
//! - A prelude with common imports

pub mod accumulator;
pub mod error;
pub mod helpers;
pub mod operation;
pub mod prelude;

// Re-export commonly used items
pub use accumulator::Accumulator;
pub use error::{Error, Result};
pub use helpers::{Failure, capitalize, get_error_message, is_valid_email};
pub use operation::Operation;

//! Pure, stateless helper functions.
//!
//! Nothing here keeps state between calls and nothing here fails.

pub mod arith;
pub mod failure;
pub mod text;

pub use arith::{add, multiply, subtract};
pub use failure::{Failure, UNKNOWN_ERROR, get_error_message};
pub use text::{capitalize, is_valid_email};

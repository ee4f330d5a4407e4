//! Stateful numeric register with chainable arithmetic.
//!
//! Mutators return `&mut Self` so calls chain. `divide` is the only
//! fallible mutator: a zero divisor is rejected before the register is
//! touched.
//!
//! ```
//! use calckit_core::Accumulator;
//!
//! # fn main() -> calckit_core::Result<()> {
//! let mut acc = Accumulator::default();
//! acc.add(10.0).multiply(2.0).subtract(5.0).divide(3.0)?;
//! assert!((acc.value() - 5.0).abs() < 0.01);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::operation::Operation;

/// A single `f64` register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    value: f64,
}

impl Accumulator {
    /// Create an accumulator holding `initial`.
    #[must_use]
    pub const fn new(initial: f64) -> Self {
        Self { value: initial }
    }

    pub fn add(&mut self, n: f64) -> &mut Self {
        self.value += n;
        self
    }

    pub fn subtract(&mut self, n: f64) -> &mut Self {
        self.value -= n;
        self
    }

    pub fn multiply(&mut self, n: f64) -> &mut Self {
        self.value *= n;
        self
    }

    /// Divide the register by `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when `n` is zero (either sign). The
    /// register is left unchanged.
    pub fn divide(&mut self, n: f64) -> Result<&mut Self> {
        if n == 0.0 {
            debug!(dividend = self.value, "rejected division by zero");
            return Err(Error::division_by_zero(self.value));
        }
        self.value /= n;
        Ok(self)
    }

    pub const fn set_value(&mut self, n: f64) -> &mut Self {
        self.value = n;
        self
    }

    /// Return the register to zero, keeping the same instance.
    pub const fn reset(&mut self) {
        self.value = 0.0;
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// True when the value is an even number, including zero and negative evens.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.value % 2.0 == 0.0
    }

    /// True only for values strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }

    /// Apply a single [`Operation`].
    ///
    /// # Errors
    ///
    /// Only `Operation::Divide(0.0)` fails, with [`Error::DivisionByZero`].
    pub fn apply(&mut self, op: Operation) -> Result<&mut Self> {
        trace!(%op, before = self.value, "applying operation");
        match op {
            Operation::Add(n) => Ok(self.add(n)),
            Operation::Subtract(n) => Ok(self.subtract(n)),
            Operation::Multiply(n) => Ok(self.multiply(n)),
            Operation::Divide(n) => self.divide(n),
            Operation::Set(n) => Ok(self.set_value(n)),
            Operation::Reset => {
                self.reset();
                Ok(self)
            }
        }
    }

    /// Apply operations in order, stopping at the first failure.
    ///
    /// Operations before the failing one stay applied.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Accumulator::apply`].
    pub fn apply_all<I>(&mut self, ops: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Operation>,
    {
        ops.into_iter().try_fold(self, |acc, op| acc.apply(op))
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<f64> for Accumulator {
    fn from(initial: f64) -> Self {
        Self::new(initial)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_default_starts_at_zero() {
        assert_eq!(Accumulator::default().value(), 0.0);
    }

    #[test]
    fn test_new_with_initial_value() {
        assert_eq!(Accumulator::new(10.0).value(), 10.0);
    }

    #[test]
    fn test_add() {
        let mut acc = Accumulator::default();
        acc.add(5.0);
        assert_eq!(acc.value(), 5.0);
    }

    #[test]
    fn test_subtract() {
        let mut acc = Accumulator::new(10.0);
        acc.subtract(3.0);
        assert_eq!(acc.value(), 7.0);
    }

    #[test]
    fn test_multiply() {
        let mut acc = Accumulator::new(5.0);
        acc.multiply(3.0);
        assert_eq!(acc.value(), 15.0);
    }

    #[test]
    fn test_divide() {
        let mut acc = Accumulator::new(15.0);
        acc.divide(3.0).unwrap();
        assert_eq!(acc.value(), 5.0);
    }

    #[test]
    fn test_divide_by_zero_leaves_value_untouched() {
        let mut acc = Accumulator::new(10.0);
        let err = acc.divide(0.0).unwrap_err();
        assert_eq!(err, Error::DivisionByZero { dividend: 10.0 });
        assert_eq!(acc.value(), 10.0);
    }

    #[test]
    fn test_divide_by_negative_zero_is_rejected() {
        let mut acc = Accumulator::new(4.0);
        assert!(acc.divide(-0.0).is_err());
        assert_eq!(acc.value(), 4.0);
    }

    #[test]
    fn test_chaining() {
        let mut acc = Accumulator::default();
        acc.add(10.0).multiply(2.0).subtract(5.0);
        assert_eq!(acc.value(), 15.0);
    }

    #[test]
    fn test_set_value() {
        let mut acc = Accumulator::new(3.0);
        acc.set_value(42.0).add(1.0);
        assert_eq!(acc.value(), 43.0);
    }

    #[test]
    fn test_reset_then_reuse() {
        let mut acc = Accumulator::new(100.0);
        acc.reset();
        assert_eq!(acc.value(), 0.0);
        acc.add(2.0).multiply(3.0);
        assert_eq!(acc.value(), 6.0);
    }

    #[test]
    fn test_is_even() {
        assert!(Accumulator::new(0.0).is_even());
        assert!(Accumulator::new(4.0).is_even());
        assert!(Accumulator::new(-4.0).is_even());
        assert!(!Accumulator::new(3.0).is_even());
        assert!(!Accumulator::new(-3.0).is_even());
        assert!(!Accumulator::new(2.5).is_even());
    }

    #[test]
    fn test_is_positive() {
        assert!(Accumulator::new(5.0).is_positive());
        assert!(!Accumulator::new(0.0).is_positive());
        assert!(!Accumulator::new(-5.0).is_positive());
    }

    #[test]
    fn test_apply_dispatches_each_operation() {
        let mut acc = Accumulator::default();
        acc.apply(Operation::Set(8.0)).unwrap();
        acc.apply(Operation::Divide(2.0)).unwrap();
        acc.apply(Operation::Subtract(1.0)).unwrap();
        assert_eq!(acc.value(), 3.0);
        acc.apply(Operation::Reset).unwrap();
        assert_eq!(acc.value(), 0.0);
    }

    #[test]
    fn test_apply_all_stops_at_first_failure() {
        let mut acc = Accumulator::default();
        let ops = [
            Operation::Add(6.0),
            Operation::Divide(0.0),
            Operation::Add(100.0),
        ];
        let err = acc.apply_all(ops).unwrap_err();
        assert!(err.is_division_by_zero());
        assert_eq!(acc.value(), 6.0);
    }

    #[test]
    fn test_display_prints_value() {
        assert_eq!(Accumulator::new(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Accumulator::new(1.5)).unwrap();
        assert_eq!(json, r#"{"value":1.5}"#);
        let back: Accumulator = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), 1.5);
    }
}

//! End-to-end accumulator scenarios through the public API.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use calckit_core::prelude::*;

/// Chained arithmetic from the default state.
///
/// # GIVEN
/// An accumulator at its default value
///
/// # WHEN
/// add 10, multiply by 2, subtract 5, divide by 3
///
/// # THEN
/// The value is 5 within 0.01
#[test]
fn test_chained_scenario_from_default() -> Result<()> {
    let mut acc = Accumulator::default();

    acc.add(10.0).multiply(2.0).subtract(5.0).divide(3.0)?;

    assert!((acc.value() - 5.0).abs() < 0.01, "got {}", acc.value());
    Ok(())
}

/// The same scenario expressed as parsed operations.
#[test]
fn test_parsed_operations_scenario() -> Result<()> {
    let ops = ["add:10", "mul:2", "sub:5", "div:3"]
        .iter()
        .map(|raw| raw.parse::<Operation>())
        .collect::<Result<Vec<_>>>()?;

    let mut acc = Accumulator::default();
    acc.apply_all(ops)?;

    assert!((acc.value() - 5.0).abs() < 0.01);
    assert!(acc.is_positive());
    Ok(())
}

/// Division by zero mid-chain.
///
/// # GIVEN
/// An accumulator that has reached 20
///
/// # WHEN
/// The next step divides by zero
///
/// # THEN
/// The error is DivisionByZero, the value is still 20, and the instance keeps working
#[test]
fn test_division_by_zero_mid_chain() {
    let mut acc = Accumulator::new(10.0);
    acc.multiply(2.0);

    let outcome = acc.divide(0.0).map(|acc| acc.value());

    assert_eq!(outcome, Err(Error::DivisionByZero { dividend: 20.0 }));
    assert!((acc.value() - 20.0).abs() < f64::EPSILON);

    acc.reset();
    acc.add(3.0);
    assert!((acc.value() - 3.0).abs() < f64::EPSILON);
    assert!(!acc.is_even());
}

/// Errors raised by the accumulator flow through error normalization.
#[test]
fn test_accumulator_error_normalizes_to_message() {
    let mut acc = Accumulator::new(1.0);
    let message = acc
        .divide(0.0)
        .map(|_| String::new())
        .unwrap_or_else(|e| get_error_message(&Failure::error(e)));

    assert_eq!(message, "cannot divide 1 by zero");
}

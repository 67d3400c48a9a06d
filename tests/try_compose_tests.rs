//! Tests for fallible composition.
//!
//! `try_compose_r!` and `try_compose_l!` short-circuit on the first `Err`
//! and convert errors with `From`, like the `?` operator.

#![cfg(feature = "compose")]

use std::cell::Cell;
use std::num::ParseIntError;

use fcompose::compose::{Invoke, InvokeMut, TryComposeLeft, try_compose_l};
use fcompose::try_compose_r;
use rstest::rstest;

#[derive(Debug, PartialEq, Eq)]
enum CalculationError {
    Parse(String),
    DivisionByZero,
    Negative(i64),
}

impl From<ParseIntError> for CalculationError {
    fn from(error: ParseIntError) -> Self {
        Self::Parse(error.to_string())
    }
}

fn parse(text: &str) -> Result<i64, ParseIntError> {
    text.trim().parse()
}

fn reciprocal_percent(value: i64) -> Result<i64, CalculationError> {
    if value == 0 {
        Err(CalculationError::DivisionByZero)
    } else {
        Ok(100 / value)
    }
}

fn non_negative(value: i64) -> Result<i64, CalculationError> {
    if value < 0 {
        Err(CalculationError::Negative(value))
    } else {
        Ok(value)
    }
}

// =============================================================================
// Short Circuit
// =============================================================================

#[rstest]
#[case("4", Ok(25))]
#[case(" 50 ", Ok(2))]
#[case("0", Err(CalculationError::DivisionByZero))]
#[case("-5", Err(CalculationError::Negative(-20)))]
#[case("x", Err(CalculationError::Parse("invalid digit found in string".to_string())))]
fn test_left_chain(#[case] input: &str, #[case] expected: Result<i64, CalculationError>) {
    let composed = try_compose_l!(parse, reciprocal_percent, non_negative);
    assert_eq!(composed.invoke((input,)), expected);
}

#[rstest]
#[case("4", Ok(25))]
#[case("0", Err(CalculationError::DivisionByZero))]
fn test_right_chain_matches_left_chain(
    #[case] input: &str,
    #[case] expected: Result<i64, CalculationError>,
) {
    let composed = try_compose_r!(non_negative, reciprocal_percent, parse);
    assert_eq!(composed.invoke((input,)), expected);
}

#[rstest]
fn test_first_failure_stops_evaluation() {
    let evaluated = Cell::new(0);
    let counted = |value: i64| -> Result<i64, CalculationError> {
        evaluated.set(evaluated.get() + 1);
        Ok(value)
    };

    let composed = try_compose_l!(counted, reciprocal_percent, counted, non_negative, counted);

    assert_eq!(composed.invoke((5,)), Ok(20));
    assert_eq!(evaluated.get(), 3);

    evaluated.set(0);
    assert_eq!(composed.invoke((0,)), Err(CalculationError::DivisionByZero));
    assert_eq!(evaluated.get(), 1);
}

#[rstest]
fn test_binary_entry_stage() {
    let checked_div = |numerator: i64, denominator: i64| {
        numerator
            .checked_div(denominator)
            .ok_or(CalculationError::DivisionByZero)
    };

    let composed = try_compose_r!(non_negative, checked_div);
    assert_eq!(composed.invoke((-9, 3)), Err(CalculationError::Negative(-3)));
    assert_eq!(composed.invoke((9, 0)), Err(CalculationError::DivisionByZero));
    assert_eq!(composed.invoke((9, 3)), Ok(3));
}

// =============================================================================
// Stage Kinds
// =============================================================================

#[rstest]
fn test_stateful_stage() {
    let mut budget = 2;
    let spend = |value: i64| -> Result<i64, CalculationError> {
        if budget == 0 {
            return Err(CalculationError::Negative(budget));
        }
        budget -= 1;
        Ok(value)
    };

    let mut composed = try_compose_l!(non_negative, spend);
    assert_eq!(composed.invoke_mut((1,)), Ok(1));
    assert_eq!(composed.invoke_mut((2,)), Ok(2));
    assert_eq!(composed.invoke_mut((3,)), Err(CalculationError::Negative(0)));
}

#[rstest]
fn test_constructor_and_parts() {
    let composed: TryComposeLeft<_, _> = try_compose_l(parse, reciprocal_percent);
    assert_eq!(composed.invoke(("10",)), Ok(10));

    let (first, then) = composed.into_parts();
    assert_eq!(first("7"), Ok(7));
    assert_eq!(then(0), Err(CalculationError::DivisionByZero));
}

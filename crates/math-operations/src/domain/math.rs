//! # Operation Math
//!
//! One pure function per operation. Preconditions are checked before the
//! math runs so the error kind never depends on how `f64` primitives fail.

use crate::domain::errors::OperationError;
use crate::OperationResult;

/// A success always carries a finite `f64`; anything else is a fault.
fn finite(result: f64) -> OperationResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(OperationError::NonFiniteResult)
    }
}

pub fn add(a: f64, b: f64) -> OperationResult<f64> {
    finite(a + b)
}

pub fn subtract(a: f64, b: f64) -> OperationResult<f64> {
    finite(a - b)
}

pub fn multiply(a: f64, b: f64) -> OperationResult<f64> {
    finite(a * b)
}

/// `a / b`. Both `0.0` and `-0.0` are rejected as divisors.
pub fn divide(a: f64, b: f64) -> OperationResult<f64> {
    if b == 0.0 {
        return Err(OperationError::DivisionByZero);
    }
    finite(a / b)
}

/// `base ^ exponent`.
///
/// A non-finite result from finite operands means the exponentiation has no
/// real answer (negative base with a fractional exponent), overflowed, or
/// divided by zero (`0 ^ -1`). All three are reported as an invalid operation.
pub fn power(base: f64, exponent: f64) -> OperationResult<f64> {
    let result = base.powf(exponent);
    if !result.is_finite() && base.is_finite() && exponent.is_finite() {
        return Err(OperationError::InvalidOperation(
            "Invalid power operation".to_string(),
        ));
    }
    finite(result)
}

/// `-inf` is negative too.
pub fn sqrt(number: f64) -> OperationResult<f64> {
    if number < 0.0 {
        return Err(OperationError::NegativeSquareRoot);
    }
    finite(number.sqrt())
}

pub fn sin(number: f64) -> OperationResult<f64> {
    finite(number.sin())
}

pub fn cos(number: f64) -> OperationResult<f64> {
    finite(number.cos())
}

/// Tangent in radians. An infinite angle has no tangent.
pub fn tan(number: f64) -> OperationResult<f64> {
    if number.is_infinite() {
        return Err(OperationError::InvalidOperation(
            "Invalid tangent operation".to_string(),
        ));
    }
    finite(number.tan())
}

//! Four-function arithmetic helpers.

use log::warn;

use crate::error::CalcError;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`. Fails on a zero divisor (either sign); everything else
/// follows IEEE 754, so NaN and infinite operands pass through.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        warn!("Rejected division of {} by zero", a);
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

//! Binary operator semantics.
//!
//! Float arithmetic with Python-compatible edge cases: floored modulo,
//! errors (not infinities) on division by zero, and an exponent bound so
//! `9 ** 9 ** 9` fails fast instead of grinding.

use crate::{EvalError, EvalLimits};

/// Binary arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

/// Apply `op` to two operands.
pub(crate) fn evaluate_binary(
    op: BinaryOp,
    left: f64,
    right: f64,
    limits: &EvalLimits,
) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => checked_div(left, right),
        BinaryOp::Mod => floored_mod(left, right),
        BinaryOp::Pow => checked_pow(left, right, limits),
    }
}

fn checked_div(left: f64, right: f64) -> Result<f64, EvalError> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left / right)
}

/// Modulo whose result takes the sign of the divisor.
fn floored_mod(left: f64, right: f64) -> Result<f64, EvalError> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let r = left % right;
    if r != 0.0 && (r < 0.0) != (right < 0.0) {
        Ok(r + right)
    } else {
        Ok(r)
    }
}

fn checked_pow(base: f64, exponent: f64, limits: &EvalLimits) -> Result<f64, EvalError> {
    if exponent.abs() > limits.max_exponent {
        return Err(EvalError::MagnitudeExceeded);
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(base.powf(exponent))
}

/// Square root; negative operands have no real result.
pub(crate) fn checked_sqrt(value: f64) -> Result<f64, EvalError> {
    if value < 0.0 {
        return Err(EvalError::NotFinite);
    }
    Ok(value.sqrt())
}

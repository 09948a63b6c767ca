//! Tree-walking evaluation with cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::operators::{checked_sqrt, evaluate_binary};
use crate::parser::{Expr, Parser};
use crate::{EvalError, EvalLimits};

/// Evaluates one parsed tree.
///
/// Checks `cancel` and the deadline at every node so an abandoned or
/// overdue evaluation stops at the next step, and applies the magnitude
/// guard to every intermediate.
struct Evaluator<'a> {
    limits: &'a EvalLimits,
    cancel: &'a AtomicBool,
    deadline: Instant,
}

impl Evaluator<'_> {
    fn eval(&self, expr: &Expr) -> Result<f64, EvalError> {
        if self.cancel.load(Ordering::Relaxed) || Instant::now() >= self.deadline {
            return Err(EvalError::Timeout);
        }
        let value = match expr {
            Expr::Number(n) => *n,
            Expr::Neg(inner) => -self.eval(inner)?,
            Expr::Sqrt(inner) => checked_sqrt(self.eval(inner)?)?,
            Expr::Binary { op, left, right } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                evaluate_binary(*op, l, r, self.limits)?
            }
        };
        self.guard(value)
    }

    fn guard(&self, value: f64) -> Result<f64, EvalError> {
        if value.is_nan() {
            Err(EvalError::NotFinite)
        } else if value.is_infinite() || value.abs() > self.limits.magnitude {
            Err(EvalError::MagnitudeExceeded)
        } else {
            Ok(value)
        }
    }
}

/// Parse and evaluate on the current thread.
///
/// `source` must already use `/` for division and `.` for decimals.
pub(crate) fn evaluate_source(
    source: &str,
    limits: &EvalLimits,
    cancel: &AtomicBool,
    deadline: Instant,
) -> Result<f64, EvalError> {
    let expr = Parser::parse(source, limits)?;
    Evaluator {
        limits,
        cancel,
        deadline,
    }
    .eval(&expr)
}

//! Evaluation errors.

use thiserror::Error;

/// Why an expression produced no number.
///
/// [`EvalError::is_timeout`] separates the resource-limit family (the
/// expression is well-formed but too expensive) from everything else.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression is {len} characters long, limit is {max}")]
    ExpressionTooLong { len: usize, max: usize },

    #[error("evaluation did not finish before the deadline")]
    Timeout,

    #[error("intermediate value exceeds the magnitude limit")]
    MagnitudeExceeded,

    #[error("factorial of {operand} is too large to compute")]
    RunawayFactorial { operand: u64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a real number")]
    NotFinite,

    #[error("unexpected `{found}` at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown name `{name}`")]
    UnknownIdentifier { name: String },

    #[error("evaluation worker failed: {0}")]
    Worker(String),
}

impl EvalError {
    /// The expression hit a time or size bound rather than being invalid.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            EvalError::Timeout | EvalError::MagnitudeExceeded | EvalError::RunawayFactorial { .. }
        )
    }
}

//! Evaluation bounds.

use std::time::Duration;

/// Resource bounds applied to every evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalLimits {
    /// Longest accepted expression, in characters.
    pub max_len: usize,
    /// Wall-clock budget for one evaluation.
    pub deadline: Duration,
    /// Largest absolute intermediate value.
    pub magnitude: f64,
    /// Largest absolute exponent accepted by `**`.
    pub max_exponent: f64,
    /// Largest operand rewritten by factorial expansion. Capped at 20, the
    /// largest factorial that fits in `u64`.
    pub max_factorial: u64,
}

impl EvalLimits {
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

impl Default for EvalLimits {
    fn default() -> Self {
        EvalLimits {
            max_len: 200,
            deadline: Duration::from_millis(500),
            magnitude: 1e30,
            max_exponent: 4_000_000.0,
            max_factorial: 20,
        }
    }
}

//! Deadline-bounded evaluation.
//!
//! Each evaluation runs on its own worker thread. The caller waits on a
//! channel with `recv_timeout`; when the deadline passes it raises the
//! worker's cancel flag and returns without joining. The worker checks the
//! flag and the same deadline at every node and exits, so nothing outlives
//! the cancelled expression for long.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::eval::evaluate_source;
use crate::{EvalError, EvalLimits};

/// Evaluate with the default limits (200 characters, 500 ms).
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with(expression, &EvalLimits::default())
}

/// Evaluate `expression` under `limits`.
///
/// `:` is accepted as division and `,` as the decimal separator.
#[tracing::instrument(level = "trace", skip(limits))]
pub fn evaluate_with(expression: &str, limits: &EvalLimits) -> Result<f64, EvalError> {
    let len = expression.chars().count();
    if len > limits.max_len {
        return Err(EvalError::ExpressionTooLong {
            len,
            max: limits.max_len,
        });
    }

    let source = expression.replace(':', "/").replace(',', ".");
    let deadline = Instant::now() + limits.deadline;
    let cancel = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    let worker_cancel = Arc::clone(&cancel);
    let worker_limits = limits.clone();
    thread::Builder::new()
        .name("tally-eval".to_owned())
        .spawn(move || {
            let result = evaluate_source(&source, &worker_limits, &worker_cancel, deadline);
            // Receiver is gone if the deadline already passed
            let _ = tx.send(result);
        })
        .map_err(|e| EvalError::Worker(e.to_string()))?;

    match rx.recv_timeout(limits.deadline) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            cancel.store(true, Ordering::Relaxed);
            tracing::warn!(
                deadline_ms = limits.deadline.as_millis(),
                "evaluation abandoned after deadline"
            );
            Err(EvalError::Timeout)
        }
        Err(RecvTimeoutError::Disconnected) => {
            Err(EvalError::Worker("worker exited without a result".to_owned()))
        }
    }
}

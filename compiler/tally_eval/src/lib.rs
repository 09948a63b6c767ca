//! Sandboxed arithmetic evaluation.
//!
//! The sandbox is the grammar itself: numbers, `+ - * / % **`, parentheses
//! and a single `sqrt` function. There are no names, attributes or calls
//! beyond that, so there is nothing to escape into. Resource use is bounded
//! separately by [`EvalLimits`]: input length, a magnitude guard on every
//! intermediate value, and a wall-clock deadline enforced by running the
//! evaluation on a cancellable worker thread.
//!
//! Factorials are expanded textually by [`apply_factorials`] before
//! evaluation.

mod error;
mod eval;
mod factorial;
mod limits;
mod operators;
mod parser;
mod sandbox;
mod token;

pub use error::EvalError;
pub use factorial::{apply_factorials, apply_factorials_up_to, factorial};
pub use limits::EvalLimits;
pub use sandbox::{evaluate, evaluate_with};

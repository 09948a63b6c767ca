//! Shared helpers for reading tests.

use tally_interp::{Interpreter, LanguageSet, ParseOutcome, RandomSource};

/// Draws the lower bound every time.
pub struct FixedRandom;

impl RandomSource for FixedRandom {
    fn draw(&self, low: i64, _high: i64) -> i64 {
        low
    }
}

pub fn interpreter() -> Interpreter {
    Interpreter::builder().random(FixedRandom).build()
}

/// Parse `text` expecting `expected`.
pub fn read(text: &str, expected: i64) -> ParseOutcome {
    interpreter().parse_single(text, expected)
}

/// Assert that `text` reads as `expected` when `expected` is what comes next.
#[track_caller]
pub fn assert_reads(text: &str, expected: i64) {
    let outcome = read(text, expected);
    assert_eq!(
        outcome.value,
        Some(expected),
        "{text:?} read as {:?} via {}",
        outcome.value,
        outcome.method
    );
}

/// Language codes of an outcome, for readable assertions.
pub fn codes(languages: LanguageSet) -> Vec<&'static str> {
    languages.codes().collect()
}

//! Shared regular expressions.
//!
//! Every pattern is a literal compiled on first use.

use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "patterns are compile-time literals")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern compiles")
}

/// `random(a, b)` with integer or decimal bounds.
pub(crate) static RANDOM_CALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)random\s*\(\s*(-?[0-9]+(?:\.[0-9]+)?)\s*,\s*(-?[0-9]+(?:\.[0-9]+)?)\s*\)")
});

/// Any `random(` opener, well-formed or not.
pub(crate) static RANDOM_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)random\s*\("));

/// `sqrt(x)` with a parenthesis-free argument.
pub(crate) static SQRT_CALL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)sqrt\s*\(\s*([^()]+?)\s*\)"));

pub(crate) static SQRT_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)sqrt\s*\("));

/// A constant name standing as a whole word.
pub(crate) static CONSTANT_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:pi|e|phi|tau|euler|golden)\b"));

/// An operator with whitespace on both sides.
pub(crate) static SPACED_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\s[+\-*/:()%^]\s"));

/// Hyphenated number compounds that must not read as subtraction.
pub(crate) static COMPOUND_MASKS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        compile(r"(?i)\b(?:twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety)-\w+\b"),
        compile(r"(?i)\b\w+-(?:one|two|three|four|five|six|seven|eight|nine|teen|ty)\b"),
        compile(r"(?i)\bvingt-(?:et-)?\w+\b"),
        compile(r"(?i)\bdix-(?:sept|huit|neuf)\b"),
    ]
});

pub(crate) static SIMPLE_INTEGER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+$"));

pub(crate) static SIMPLE_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[-+]?[0-9]*[.,][0-9]+$"));

/// A decimal literal anywhere in the text.
pub(crate) static DECIMAL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[0-9]+[.,][0-9]+"));

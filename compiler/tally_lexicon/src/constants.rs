//! Named mathematical constants.

use std::f64::consts::{E, PI, TAU};

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Constant names, matched case-insensitively as whole words.
pub const MATH_CONSTANTS: &[(&str, f64)] = &[
    ("pi", PI),
    ("e", E),
    ("phi", GOLDEN_RATIO),
    ("tau", TAU),
    ("euler", E),
    ("golden", GOLDEN_RATIO),
];

/// Value of a named constant.
pub fn constant(name: &str) -> Option<f64> {
    MATH_CONSTANTS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(constant("PI"), Some(PI));
        assert_eq!(constant("Golden"), Some(GOLDEN_RATIO));
        assert_eq!(constant("pie"), None);
    }

    #[test]
    fn golden_ratio_matches_definition() {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        assert!((phi - GOLDEN_RATIO).abs() < 1e-15);
    }
}

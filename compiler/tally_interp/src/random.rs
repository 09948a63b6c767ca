//! `random(a, b)` calls.
//!
//! Calls are resolved to a drawn integer before any candidate is built, so
//! every reading of one message sees the same draws.

use rand::Rng;
use regex::Captures;

use crate::patterns::RANDOM_CALL;

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// An integer in `low..=high`. Callers guarantee `low <= high`.
    fn draw(&self, low: i64, high: i64) -> i64;
}

/// The thread-local generator from `rand`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// One resolved `random(min, max)` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomDraw {
    pub min: f64,
    pub max: f64,
    pub drawn: i64,
}

/// Replace every `random(a, b)` call with a draw, left to right.
///
/// Reversed bounds are swapped. Decimal bounds are truncated toward zero
/// before drawing.
pub(crate) fn resolve_calls(text: &str, source: &dyn RandomSource) -> (String, Vec<RandomDraw>) {
    let mut draws = Vec::new();
    let resolved = RANDOM_CALL.replace_all(text, |caps: &Captures<'_>| {
        let a = bound(&caps[1]);
        let b = bound(&caps[2]);
        let (min, max) = if a > b { (b, a) } else { (a, b) };
        let drawn = source.draw(min.trunc() as i64, max.trunc() as i64);
        tracing::trace!(min, max, drawn, "random draw");
        draws.push(RandomDraw { min, max, drawn });
        drawn.to_string()
    });
    (resolved.into_owned(), draws)
}

fn bound(text: &str) -> f64 {
    text.parse().unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Always draws the lower bound.
    pub(crate) struct LowestRandom;

    impl RandomSource for LowestRandom {
        fn draw(&self, low: i64, _high: i64) -> i64 {
            low
        }
    }

    #[test]
    fn replaces_in_order() {
        let (text, draws) = resolve_calls("random(1,3) + RANDOM( 7 , 9 )", &LowestRandom);
        assert_eq!(text, "1 + 7");
        assert_eq!(
            draws,
            vec![
                RandomDraw { min: 1.0, max: 3.0, drawn: 1 },
                RandomDraw { min: 7.0, max: 9.0, drawn: 7 },
            ]
        );
    }

    #[test]
    fn reversed_and_decimal_bounds() {
        let (text, draws) = resolve_calls("random(9.7,2.2)", &LowestRandom);
        assert_eq!(text, "2");
        assert_eq!(draws, vec![RandomDraw { min: 2.2, max: 9.7, drawn: 2 }]);
    }

    #[test]
    fn malformed_calls_are_left_alone() {
        let (text, draws) = resolve_calls("random(1) + 2", &LowestRandom);
        assert_eq!(text, "random(1) + 2");
        assert!(draws.is_empty());
    }

    #[test]
    fn thread_random_stays_in_range() {
        for _ in 0..100 {
            let drawn = ThreadRandom.draw(-3, 3);
            assert!((-3..=3).contains(&drawn));
        }
        assert_eq!(ThreadRandom.draw(5, 5), 5);
    }
}

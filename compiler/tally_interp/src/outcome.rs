//! Results handed back to callers.

use std::fmt;

use tally_lexicon::LanguageSet;

use crate::random::RandomDraw;
use crate::tags::TypeTags;

/// Why a message produced no value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Failure {
    /// The message does not begin with anything numeric.
    NotParseable,
    /// Every reading failed or was non-positive.
    NoValidInterpretation,
    /// The arithmetic reading exceeded the evaluator's time or size bounds.
    EvaluationTimeout,
}

impl Failure {
    /// The `method` string reported for this failure.
    pub fn method(self) -> &'static str {
        match self {
            Failure::NotParseable => "starts_with_non_parseable",
            Failure::NoValidInterpretation => "no_valid_interpretation",
            Failure::EvaluationTimeout => "evaluation_timeout",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// The reading of one message.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutcome {
    /// `None` when the message could not be read; see [`failure`](Self::failure).
    pub value: Option<i64>,
    pub type_tags: TypeTags,
    /// How the value was obtained, e.g. `simple_integer` or
    /// `context_match_written`.
    pub method: String,
    /// Draws made for `random(a, b)` calls, in textual order. `None` when
    /// the message had none.
    pub random_draws: Option<Vec<RandomDraw>>,
    pub languages: LanguageSet,
    pub failure: Option<Failure>,
}

impl ParseOutcome {
    pub(crate) fn failed(failure: Failure) -> Self {
        ParseOutcome {
            value: None,
            type_tags: TypeTags::empty(),
            method: failure.method().to_owned(),
            random_draws: None,
            languages: LanguageSet::empty(),
            failure: Some(failure),
        }
    }

    pub(crate) fn simple(value: i64, type_tags: TypeTags, method: &str) -> Self {
        ParseOutcome {
            value: Some(value),
            type_tags,
            method: method.to_owned(),
            random_draws: None,
            languages: LanguageSet::empty(),
            failure: None,
        }
    }

    pub fn is_match(&self, expected: i64) -> bool {
        self.value == Some(expected)
    }
}

/// A run of consecutive values read from one message.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceOutcome {
    pub values: Vec<i64>,
    pub type_tags: TypeTags,
    /// `multiple_consecutive` for a run of two or more, the single reading's
    /// method for one, `no_consecutive_match` for none.
    pub method: String,
    pub random_draws: Option<Vec<RandomDraw>>,
    pub languages: LanguageSet,
    pub count: usize,
}

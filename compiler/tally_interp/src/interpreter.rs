//! The single-value pipeline.

use std::sync::LazyLock;

use tally_lexicon::Lexicon;

use crate::candidate::{generate, round_to_count, CandidateSet, GenerateOptions};
use crate::config::{InterpreterBuilder, InterpreterConfig};
use crate::confusables;
use crate::detect::starts_with_parseable;
use crate::disambiguate::select;
use crate::outcome::{Failure, ParseOutcome, SequenceOutcome};
use crate::patterns::{SIMPLE_DECIMAL, SIMPLE_INTEGER};
use crate::random::RandomSource;
use crate::tags::{self, TypeTags};

/// Reads chat messages as numbers.
///
/// Holds no per-message state; one instance can serve any number of
/// threads.
pub struct Interpreter {
    pub(crate) lexicon: &'static Lexicon,
    pub(crate) config: InterpreterConfig,
    pub(crate) random: Box<dyn RandomSource>,
}

impl Interpreter {
    /// An interpreter with the default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    fn options(&self) -> GenerateOptions<'_> {
        GenerateOptions {
            lexicon: self.lexicon,
            limits: &self.config.limits,
            random: self.random.as_ref(),
            max_phrase_words: self.config.max_phrase_words,
        }
    }

    /// Every reading of `text`, before disambiguation.
    ///
    /// `random(a, b)` calls are drawn afresh on each call.
    pub fn candidates(&self, text: &str) -> CandidateSet {
        let folded = confusables::fold(text);
        generate(folded.trim(), self.options())
    }

    /// Read `text` as one value, preferring readings equal to `expected`.
    pub fn parse_single(&self, text: &str, expected: i64) -> ParseOutcome {
        self.explain(text, expected).outcome
    }

    /// [`parse_single`](Self::parse_single), plus the readings it chose
    /// from.
    ///
    /// `candidates` is empty when a fast path or the prefix check decided
    /// the outcome. Any `random(a, b)` draws are shared by both.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn explain(&self, text: &str, expected: i64) -> Explanation {
        let folded = confusables::fold(text);
        let text = folded.trim();

        if !starts_with_parseable(text, self.lexicon) {
            return ParseOutcome::failed(Failure::NotParseable).into();
        }

        if SIMPLE_INTEGER.is_match(text) {
            return match text.parse::<i64>() {
                Ok(value) => ParseOutcome::simple(value, TypeTags::INTEGER, "simple_integer"),
                Err(_) => ParseOutcome::failed(Failure::NoValidInterpretation),
            }
            .into();
        }

        if SIMPLE_DECIMAL.is_match(text) {
            let rounded = text
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .and_then(round_to_count)
                .filter(|&v| v > 0);
            if let Some(value) = rounded {
                return ParseOutcome::simple(value, TypeTags::DECIMAL, "simple_decimal").into();
            }
        }

        let candidates = generate(text, self.options());
        let outcome = match select(&candidates, expected) {
            Ok(selection) => {
                let candidate = selection.candidate;
                let input_tags = tags::analyze(text, self.lexicon);
                ParseOutcome {
                    value: Some(candidate.value),
                    type_tags: tags::for_reading(input_tags, text, candidate.kind, self.lexicon),
                    method: selection.method(),
                    random_draws: (!candidate.random_draws.is_empty())
                        .then(|| candidate.random_draws.clone()),
                    languages: candidate.languages,
                    failure: None,
                }
            }
            Err(failure) => {
                tracing::debug!(%failure, "no reading");
                ParseOutcome::failed(failure)
            }
        };
        Explanation {
            outcome,
            candidates,
        }
    }
}

/// An outcome together with the candidate readings behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct Explanation {
    pub outcome: ParseOutcome,
    pub candidates: CandidateSet,
}

impl From<ParseOutcome> for Explanation {
    fn from(outcome: ParseOutcome) -> Self {
        Explanation {
            outcome,
            candidates: CandidateSet::default(),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_INTERPRETER: LazyLock<Interpreter> = LazyLock::new(Interpreter::new);

/// [`Interpreter::parse_single`] on a default interpreter.
pub fn parse_single(text: &str, expected: i64) -> ParseOutcome {
    DEFAULT_INTERPRETER.parse_single(text, expected)
}

/// [`Interpreter::parse_sequence`] on a default interpreter.
pub fn parse_sequence(text: &str, expected: i64) -> SequenceOutcome {
    DEFAULT_INTERPRETER.parse_sequence(text, expected)
}

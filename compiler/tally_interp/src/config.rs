//! Interpreter configuration and its builder.

use tally_eval::EvalLimits;
use tally_lexicon::{global_lexicon, Lexicon};

use crate::random::{RandomSource, ThreadRandom};
use crate::Interpreter;

/// Tunables for one [`Interpreter`].
#[derive(Clone, Debug, PartialEq)]
pub struct InterpreterConfig {
    /// Bounds on every sandboxed evaluation.
    pub limits: EvalLimits,
    /// Longest phrase, in words, tried as a written English number.
    pub max_phrase_words: usize,
    /// Most values accepted from one message by `parse_sequence`.
    pub max_sequence: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            limits: EvalLimits::default(),
            max_phrase_words: 3,
            max_sequence: 10,
        }
    }
}

/// Builder for [`Interpreter`] instances.
///
/// Defaults to the process-wide lexicon, [`InterpreterConfig::default`] and
/// the thread-local random generator.
pub struct InterpreterBuilder {
    lexicon: &'static Lexicon,
    config: InterpreterConfig,
    random: Box<dyn RandomSource>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            lexicon: global_lexicon(),
            config: InterpreterConfig::default(),
            random: Box::new(ThreadRandom),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the evaluation limits.
    #[must_use]
    pub fn limits(mut self, limits: EvalLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Set the most values one message may contribute to a sequence.
    #[must_use]
    pub fn max_sequence(mut self, max: usize) -> Self {
        self.config.max_sequence = max;
        self
    }

    /// Set the random source used for `random(a, b)`.
    ///
    /// Tests inject a deterministic source here.
    #[must_use]
    pub fn random(mut self, source: impl RandomSource + 'static) -> Self {
        self.random = Box::new(source);
        self
    }

    /// Use a lexicon other than the global one.
    #[must_use]
    pub fn lexicon(mut self, lexicon: &'static Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            lexicon: self.lexicon,
            config: self.config,
            random: self.random,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Contextual interpreter for numbers typed into chat.
//!
//! A message like `vingt-deux`, `4! + 1`, `sqrt(XVI) + five` or
//! `zeven is meer dan zes` usually has more than one plausible reading.
//! The interpreter produces every reading it can (see [`CandidateKind`]),
//! then uses the value the caller expects next to pick one:
//!
//! ```text
//! text -> fold look-alikes -> simple fast paths
//!      -> candidate strategies (normalize + sandboxed eval)
//!      -> disambiguation by expected value, then fixed priority
//!      -> ParseOutcome { value, type_tags, method, random_draws, languages }
//! ```
//!
//! [`Interpreter::parse_sequence`] reads runs of consecutive values
//! (`"7 8 9"`) with the same pipeline.
//!
//! The interpreter never returns an error: failures are reported through
//! [`ParseOutcome::failure`].

mod candidate;
mod config;
mod confusables;
mod detect;
mod disambiguate;
mod interpreter;
mod normalize;
mod outcome;
mod patterns;
mod random;
mod sequence;
mod tags;

pub use candidate::{Candidate, CandidateKind, CandidateSet};
pub use config::{InterpreterBuilder, InterpreterConfig};
pub use disambiguate::{Stage, CONTEXT_PRIORITY, DEFAULT_PRIORITY};
pub use interpreter::{parse_sequence, parse_single, Explanation, Interpreter};
pub use outcome::{Failure, ParseOutcome, SequenceOutcome};
pub use random::{RandomDraw, RandomSource, ThreadRandom};
pub use tags::TypeTags;

pub use tally_eval::EvalLimits;
pub use tally_lexicon::LanguageSet;

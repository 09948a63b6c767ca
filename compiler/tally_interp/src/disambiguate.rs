//! Choosing one reading.
//!
//! Resolution runs through three stages: a candidate equal to the expected
//! value wins, ranked by [`CONTEXT_PRIORITY`]; otherwise the best-ranked
//! candidate by [`DEFAULT_PRIORITY`]; otherwise the first one produced.
//! Failure is decided before any of that: a timed-out set fails as a
//! timeout and an empty set has no interpretation.

use crate::candidate::{Candidate, CandidateKind, CandidateSet};
use crate::outcome::Failure;

/// Ranking among candidates that match the expected value.
pub const CONTEXT_PRIORITY: [CandidateKind; 7] = [
    CandidateKind::Written,
    CandidateKind::HyphenatedMath,
    CandidateKind::MathExpression,
    CandidateKind::FactorialMath,
    CandidateKind::Extracted,
    CandidateKind::Constant,
    CandidateKind::Multilang,
];

/// Ranking when nothing matches the expected value.
pub const DEFAULT_PRIORITY: [CandidateKind; 7] = [
    CandidateKind::Written,
    CandidateKind::HyphenatedMath,
    CandidateKind::MathExpression,
    CandidateKind::FactorialMath,
    CandidateKind::Constant,
    CandidateKind::Extracted,
    CandidateKind::Multilang,
];

/// Which stage picked the winner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    ContextMatch,
    Priority,
    Fallback,
}

impl Stage {
    pub fn prefix(self) -> &'static str {
        match self {
            Stage::ContextMatch => "context_match",
            Stage::Priority => "priority",
            Stage::Fallback => "fallback",
        }
    }
}

#[derive(Debug)]
pub(crate) struct Selection<'a> {
    pub candidate: &'a Candidate,
    pub stage: Stage,
}

impl Selection<'_> {
    /// `<stage>_<kind>`, e.g. `context_match_written`.
    pub fn method(&self) -> String {
        format!("{}_{}", self.stage.prefix(), self.candidate.kind)
    }
}

fn first_of_kind<'a>(
    candidates: impl Iterator<Item = &'a Candidate> + Clone,
    ranking: &[CandidateKind],
) -> Option<&'a Candidate> {
    ranking
        .iter()
        .find_map(|&kind| candidates.clone().find(|c| c.kind == kind))
}

/// Pick the reading for `expected`.
pub(crate) fn select(set: &CandidateSet, expected: i64) -> Result<Selection<'_>, Failure> {
    if set.timed_out {
        return Err(Failure::EvaluationTimeout);
    }
    let Some(first) = set.candidates.first() else {
        return Err(Failure::NoValidInterpretation);
    };

    let matching = set.candidates.iter().filter(|c| c.value == expected);
    let selection = if let Some(candidate) = first_of_kind(matching, &CONTEXT_PRIORITY) {
        Selection {
            candidate,
            stage: Stage::ContextMatch,
        }
    } else if let Some(candidate) = first_of_kind(set.candidates.iter(), &DEFAULT_PRIORITY) {
        Selection {
            candidate,
            stage: Stage::Priority,
        }
    } else {
        Selection {
            candidate: first,
            stage: Stage::Fallback,
        }
    };

    tracing::debug!(
        expected,
        value = selection.candidate.value,
        method = %selection.method(),
        "selected reading"
    );
    Ok(selection)
}

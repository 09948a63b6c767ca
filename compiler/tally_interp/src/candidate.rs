//! Candidate generation.
//!
//! A message is read by a fixed sequence of [`Strategy`] variants. Each one
//! looks at the same prepared [`Context`] and either produces a reading,
//! produces nothing, or reports that evaluation ran out of budget. The
//! generator only collects; choosing between readings is the
//! disambiguator's job.

use std::fmt;

use tally_eval::{apply_factorials_up_to, evaluate_with, EvalLimits};
use tally_lexicon::{constant, english, LanguageSet, Lexicon};

use crate::detect::{
    can_be_hyphenated_math, has_constant_word, has_math_operators, has_spaced_operators,
    has_unspaced_operators, is_valid_compound_word,
};
use crate::normalize::normalize_expression;
use crate::random::{resolve_calls, RandomDraw, RandomSource};

/// How a candidate reading was obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// A spelled-out English number.
    Written,
    /// Two number words joined by a hyphen, read as a subtraction.
    HyphenatedMath,
    MathExpression,
    /// An arithmetic expression containing `!`.
    FactorialMath,
    /// The first number found inside prose.
    Extracted,
    Constant,
    /// A Lexicon word or phrase.
    Multilang,
}

impl CandidateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateKind::Written => "written",
            CandidateKind::HyphenatedMath => "hyphenated_math",
            CandidateKind::MathExpression => "math_expression",
            CandidateKind::FactorialMath => "factorial_math",
            CandidateKind::Extracted => "extracted",
            CandidateKind::Constant => "constant",
            CandidateKind::Multilang => "multilang",
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reading of a message.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub value: i64,
    pub kind: CandidateKind,
    pub description: String,
    pub random_draws: Vec<RandomDraw>,
    pub languages: LanguageSet,
}

/// Every reading of one message, in generation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateSet {
    pub candidates: Vec<Candidate>,
    /// The arithmetic reading exceeded the evaluator's limits. Remaining
    /// strategies were not run.
    pub timed_out: bool,
}

impl CandidateSet {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Round half to even, rejecting values outside `i64`.
pub(crate) fn round_to_count(value: f64) -> Option<i64> {
    let rounded = value.round_ties_even();
    (rounded.is_finite() && rounded.abs() < 9.2e18).then_some(rounded as i64)
}

/// Settings the generator needs from the interpreter.
#[derive(Copy, Clone)]
pub(crate) struct GenerateOptions<'a> {
    pub lexicon: &'a Lexicon,
    pub limits: &'a EvalLimits,
    pub random: &'a dyn RandomSource,
    pub max_phrase_words: usize,
}

/// Prepared input shared by every strategy.
struct Context<'a> {
    /// The trimmed message with look-alike operators folded.
    text: &'a str,
    /// `text` with every `random(a, b)` replaced by its draw.
    processed: String,
    draws: Vec<RandomDraw>,
    options: GenerateOptions<'a>,
}

impl Context<'_> {
    fn candidate(&self, kind: CandidateKind, value: i64, languages: LanguageSet) -> Candidate {
        Candidate {
            value,
            kind,
            description: format!("{kind}: {} = {value}", self.text),
            random_draws: self.draws.clone(),
            languages,
        }
    }

    fn is_math(&self) -> bool {
        has_spaced_operators(&self.processed)
            || has_unspaced_operators(&self.processed)
            || self.text.contains('!')
            || self.processed.to_lowercase().contains("sqrt(")
            || has_constant_word(&self.processed)
            || !self.draws.is_empty()
    }

    /// Normalize, expand factorials and evaluate `expression`.
    fn evaluate(&self, expression: &str) -> Result<Option<(i64, LanguageSet)>, TimedOut> {
        let normalized = normalize_expression(expression, self.options.lexicon);
        let limits = self.options.limits;
        let expanded = apply_factorials_up_to(&normalized.text, limits.max_factorial);
        match evaluate_with(&expanded, limits) {
            Ok(value) => Ok(round_to_count(value)
                .filter(|&v| v > 0)
                .map(|v| (v, normalized.languages))),
            Err(e) if e.is_timeout() => Err(TimedOut),
            Err(e) => {
                tracing::debug!(expression = %expanded, error = %e, "evaluation failed");
                Ok(None)
            }
        }
    }
}

struct TimedOut;

enum Attempt {
    Produced(Candidate),
    Nothing,
    TimedOut,
}

impl From<Option<Candidate>> for Attempt {
    fn from(candidate: Option<Candidate>) -> Self {
        candidate.map_or(Attempt::Nothing, Attempt::Produced)
    }
}

/// The readings tried, in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Strategy {
    HyphenatedMath,
    Math,
    Written,
    Extracted,
    Constant,
    Multilang,
}

const STRATEGIES: [Strategy; 6] = [
    Strategy::HyphenatedMath,
    Strategy::Math,
    Strategy::Written,
    Strategy::Extracted,
    Strategy::Constant,
    Strategy::Multilang,
];

impl Strategy {
    /// Prose readings only run when the message is not arithmetic, or when
    /// nothing else has produced a reading.
    fn applies(self, is_math: bool, produced_any: bool) -> bool {
        match self {
            Strategy::HyphenatedMath | Strategy::Written => true,
            Strategy::Math => is_math,
            Strategy::Extracted | Strategy::Constant | Strategy::Multilang => {
                !is_math || !produced_any
            }
        }
    }

    fn run(self, ctx: &Context<'_>) -> Attempt {
        match self {
            Strategy::HyphenatedMath => hyphenated_math(ctx).into(),
            Strategy::Math => math_expression(ctx),
            Strategy::Written => written(ctx).into(),
            Strategy::Extracted => extracted(ctx).into(),
            Strategy::Constant => named_constant(ctx).into(),
            Strategy::Multilang => multilang(ctx).into(),
        }
    }
}

/// Read `text` every way that applies.
#[tracing::instrument(level = "debug", skip_all, fields(text = %text))]
pub(crate) fn generate(text: &str, options: GenerateOptions<'_>) -> CandidateSet {
    let (processed, draws) = resolve_calls(text, options.random);
    let ctx = Context {
        text,
        processed,
        draws,
        options,
    };
    let is_math = ctx.is_math();

    let mut set = CandidateSet::default();
    for strategy in STRATEGIES {
        if !strategy.applies(is_math, !set.is_empty()) {
            continue;
        }
        match strategy.run(&ctx) {
            Attempt::Produced(candidate) => {
                tracing::trace!(
                    kind = %candidate.kind,
                    value = candidate.value,
                    description = %candidate.description,
                    "candidate"
                );
                set.candidates.push(candidate);
            }
            Attempt::Nothing => {}
            Attempt::TimedOut => {
                set.timed_out = true;
                return set;
            }
        }
    }
    set
}

/// `six-five` as `6 - 5`. Only when both sides are number words.
fn hyphenated_math(ctx: &Context<'_>) -> Option<Candidate> {
    let lexicon = ctx.options.lexicon;
    if !ctx.processed.contains('-') || !can_be_hyphenated_math(&ctx.processed, lexicon) {
        return None;
    }
    let expression = ctx.processed.replace('-', " - ");
    // a timeout only drops this reading
    let (value, languages) = ctx.evaluate(&expression).ok().flatten()?;
    Some(ctx.candidate(CandidateKind::HyphenatedMath, value, languages))
}

fn math_expression(ctx: &Context<'_>) -> Attempt {
    let kind = if ctx.text.contains('!') {
        CandidateKind::FactorialMath
    } else {
        CandidateKind::MathExpression
    };
    match ctx.evaluate(&ctx.processed) {
        Ok(Some((value, languages))) => Attempt::Produced(ctx.candidate(kind, value, languages)),
        Ok(None) => Attempt::Nothing,
        Err(TimedOut) => Attempt::TimedOut,
    }
}

/// A spelled-out English number of at most a few words.
fn written(ctx: &Context<'_>) -> Option<Candidate> {
    let lexicon = ctx.options.lexicon;
    if ctx.processed.contains('-') && !is_valid_compound_word(&ctx.processed, lexicon) {
        return None;
    }
    let collapsed = ctx.processed.split_whitespace().collect::<Vec<_>>().join(" ");
    let found = [ctx.processed.as_str(), collapsed.as_str()]
        .into_iter()
        .filter(|phrase| phrase.split_whitespace().count() <= ctx.options.max_phrase_words)
        .find_map(|phrase| {
            let value = i64::try_from(english::resolve(phrase)?).ok()?;
            (value > 0).then(|| ctx.candidate(CandidateKind::Written, value, LanguageSet::EN))
        });
    found
}

/// Longest run of tokens tried as one Lexicon phrase (`"treinta y uno"`).
const MAX_PHRASE_TOKENS: usize = 4;

/// The first number mentioned in prose (`zeven is meer dan zes`).
fn extracted(ctx: &Context<'_>) -> Option<Candidate> {
    if has_math_operators(ctx.text) {
        return None;
    }
    let lexicon = ctx.options.lexicon;
    let tokens: Vec<&str> = ctx
        .text
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .filter(|token| !token.is_empty())
        .collect();

    let mut i = 0;
    'tokens: while i < tokens.len() {
        for width in (2..=MAX_PHRASE_TOKENS).rev() {
            let Some(window) = tokens.get(i..i + width) else {
                continue;
            };
            if let Some(hit) = lexicon.lookup(&window.join(" ")) {
                if hit.value > 0 {
                    let value = i64::from(hit.value);
                    return Some(extracted_candidate(value, hit.languages));
                }
                i += width;
                continue 'tokens;
            }
        }

        let token = tokens[i];
        i += 1;

        if token.bytes().all(|b| b.is_ascii_digit()) {
            match token.parse::<i64>() {
                Ok(value) if value > 0 => {
                    return Some(extracted_candidate(value, LanguageSet::empty()));
                }
                _ => continue,
            }
        }
        // a lone "I" in a sentence is the pronoun
        if token == "I" && tokens.len() > 1 {
            continue;
        }
        if let Some(hit) = lexicon.lookup(token) {
            if hit.value > 0 {
                return Some(extracted_candidate(i64::from(hit.value), hit.languages));
            }
            continue;
        }
        if token.contains('-') && !is_valid_compound_word(token, lexicon) {
            continue;
        }
        if let Some(value) = english::resolve(token).and_then(|v| i64::try_from(v).ok()) {
            if value > 0 {
                return Some(extracted_candidate(value, LanguageSet::EN));
            }
        }
    }
    None
}

fn extracted_candidate(value: i64, languages: LanguageSet) -> Candidate {
    Candidate {
        value,
        kind: CandidateKind::Extracted,
        description: format!("extracted: {value}"),
        random_draws: Vec::new(),
        languages,
    }
}

/// The whole message is a constant name (`tau`).
fn named_constant(ctx: &Context<'_>) -> Option<Candidate> {
    let value = round_to_count(constant(ctx.processed.trim())?).filter(|&v| v > 0)?;
    Some(ctx.candidate(CandidateKind::Constant, value, LanguageSet::empty()))
}

/// The whole message is one Lexicon word or phrase.
fn multilang(ctx: &Context<'_>) -> Option<Candidate> {
    if has_spaced_operators(&ctx.processed) {
        return None;
    }
    let hit = ctx.options.lexicon.lookup(&ctx.processed)?;
    (hit.value > 0)
        .then(|| ctx.candidate(CandidateKind::Multilang, i64::from(hit.value), hit.languages))
}

#[cfg(test)]
mod tests;

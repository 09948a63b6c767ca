//! Cheap structural questions about a message.

use tally_lexicon::{constant, english, Lexicon};

use crate::normalize::{read_word, word_spans};
use crate::patterns::{COMPOUND_MASKS, CONSTANT_WORD, SPACED_OPERATOR};

/// Characters that make a message look like arithmetic.
const OPERATORS: [char; 9] = ['+', '-', '*', '/', ':', '(', ')', '%', '^'];

pub(crate) fn is_operator(ch: char) -> bool {
    OPERATORS.contains(&ch)
}

/// Any operator, a factorial mark, or a `sqrt(` call.
pub(crate) fn has_math_operators(text: &str) -> bool {
    text.contains(|c: char| is_operator(c) || c == '!') || text.to_lowercase().contains("sqrt(")
}

/// An operator with whitespace on both sides (`3 + 4`, `L - XX`).
pub(crate) fn has_spaced_operators(text: &str) -> bool {
    SPACED_OPERATOR.is_match(text)
}

/// An operator left over once hyphenated number compounds are masked out.
pub(crate) fn has_unspaced_operators(text: &str) -> bool {
    let mut masked = text.to_owned();
    for mask in COMPOUND_MASKS.iter() {
        masked = mask.replace_all(&masked, "_").into_owned();
    }
    masked.contains(is_operator)
}

pub(crate) fn has_constant_word(text: &str) -> bool {
    CONSTANT_WORD.is_match(text)
}

/// Whether `word` is one hyphenated number rather than a subtraction.
///
/// True for a verbatim Lexicon entry, an English tens-ones pair, or a span
/// the strict English grammar reads as a single number different from the
/// sum of its halves (`one-hundred`). Pairings the grammar rejects, like
/// `six-five`, are not compounds.
pub(crate) fn is_valid_compound_word(word: &str, lexicon: &Lexicon) -> bool {
    let word = word.trim().to_lowercase();
    if lexicon.contains_word(&word) || english::is_tens_ones(&word) {
        return true;
    }
    let Some((left, right)) = word.split_once('-') else {
        return false;
    };
    if right.contains('-') || word.contains(char::is_whitespace) {
        return false;
    }
    match (english::resolve(&word), english::resolve(left), english::resolve(right)) {
        (Some(whole), Some(l), Some(r)) => whole != l + r,
        _ => false,
    }
}

/// Exactly two hyphen-separated operands, each a recognizable number word.
pub(crate) fn can_be_hyphenated_math(text: &str, lexicon: &Lexicon) -> bool {
    let mut parts = text.split('-');
    let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    [left, right]
        .iter()
        .all(|part| read_word(part.trim(), lexicon).is_some())
}

/// Whether the message begins with something the interpreter can read.
///
/// A digit, an operator that can open an expression, a `sqrt(`/`random(`
/// call, or a first word that is a constant or a number word. A first word
/// like `six-five` counts when both halves are number words.
pub(crate) fn starts_with_parseable(text: &str, lexicon: &Lexicon) -> bool {
    let text = text.trim();
    let Some(first) = text.chars().next() else {
        return false;
    };
    if first.is_ascii_digit() || matches!(first, '(' | '-' | '+' | ':') {
        return true;
    }
    let lower = text.to_lowercase();
    if lower.starts_with("sqrt(") || lower.starts_with("random(") {
        return true;
    }
    let Some(span) = word_spans(text).into_iter().next().filter(|s| s.start == 0) else {
        return false;
    };
    let word = &text[span];
    constant(word).is_some()
        || read_word(word, lexicon).is_some()
        || (word.contains('-') && can_be_hyphenated_math(word, lexicon))
}

//! What a message is made of.
//!
//! Type tags describe the input, not the reading: they are computed from
//! the message text, then lightly adjusted for the reading that won.

use std::fmt;

use bitflags::bitflags;
use tally_lexicon::{english, Lexicon};

use crate::candidate::CandidateKind;
use crate::detect::{has_constant_word, has_math_operators, is_operator, is_valid_compound_word};
use crate::normalize::word_spans;
use crate::patterns::{DECIMAL_LITERAL, RANDOM_CALL, RANDOM_OPEN, SQRT_OPEN};

bitflags! {
    /// Kinds of content found in a message.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeTags: u16 {
        const INTEGER = 1 << 0;
        const DECIMAL = 1 << 1;
        const MATH = 1 << 2;
        const FACTORIAL = 1 << 3;
        const SQRT = 1 << 4;
        const RANDOM = 1 << 5;
        const CONSTANTS = 1 << 6;
        const TEXT = 1 << 7;
        const MULTILANG = 1 << 8;
        const ROMAN = 1 << 9;
        const MULTIPLE = 1 << 10;
    }
}

const NAMES: [(TypeTags, &str); 11] = [
    (TypeTags::INTEGER, "integer"),
    (TypeTags::DECIMAL, "decimal"),
    (TypeTags::MATH, "math"),
    (TypeTags::FACTORIAL, "factorial"),
    (TypeTags::SQRT, "sqrt"),
    (TypeTags::RANDOM, "random"),
    (TypeTags::CONSTANTS, "constants"),
    (TypeTags::TEXT, "text"),
    (TypeTags::MULTILANG, "multilang"),
    (TypeTags::ROMAN, "roman"),
    (TypeTags::MULTIPLE, "multiple"),
];

impl TypeTags {
    /// Tag names in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .into_iter()
            .filter(move |(tag, _)| self.contains(*tag))
            .map(|(_, name)| name)
    }

    pub fn parse_name(name: &str) -> Option<Self> {
        NAMES.iter().find(|(_, n)| *n == name).map(|(tag, _)| *tag)
    }
}

impl fmt::Display for TypeTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// A `!` directly after a digit or a letter.
fn has_factorial(text: &str) -> bool {
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if ch == '!' && prev.is_some_and(|p| p.is_ascii_digit() || p.is_alphabetic()) {
            return true;
        }
        prev = Some(ch);
    }
    false
}

/// Tags for `text` regardless of how it is read.
pub(crate) fn analyze(text: &str, lexicon: &Lexicon) -> TypeTags {
    let mut tags = TypeTags::empty();

    if has_factorial(text) {
        tags |= TypeTags::FACTORIAL | TypeTags::MATH;
    }
    if text.contains(is_operator) {
        tags |= TypeTags::MATH;
    }
    if SQRT_OPEN.is_match(text) {
        tags |= TypeTags::SQRT;
    }
    if RANDOM_OPEN.is_match(text) {
        tags |= TypeTags::RANDOM;
    }
    if has_constant_word(text) {
        tags |= TypeTags::CONSTANTS;
    }

    let sentence = text.split_whitespace().nth(1).is_some() && !has_math_operators(text);
    for span in word_spans(text) {
        let word = &text[span];
        // a lone "I" in prose is the pronoun
        if sentence && word == "I" {
            continue;
        }
        if lexicon.roman(word).is_some() {
            tags |= TypeTags::ROMAN;
        } else if lexicon.lookup(word).is_some() {
            tags |= TypeTags::MULTILANG;
        } else if english::resolve(word).is_some() {
            tags |= TypeTags::TEXT;
        }
    }

    // `random(1,5)` separates its bounds with a comma
    if DECIMAL_LITERAL.is_match(&RANDOM_CALL.replace_all(text, "_")) {
        tags |= TypeTags::DECIMAL;
    }
    let trimmed = text.trim();
    if tags.is_empty() && !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        tags |= TypeTags::INTEGER;
    }
    tags
}

/// Adjust input tags for the reading that won.
///
/// Operands of a hyphen subtraction are not written text. A written or
/// Lexicon reading of a hyphenated compound is not arithmetic.
pub(crate) fn for_reading(
    mut tags: TypeTags,
    text: &str,
    kind: CandidateKind,
    lexicon: &Lexicon,
) -> TypeTags {
    match kind {
        CandidateKind::HyphenatedMath => tags.remove(TypeTags::TEXT),
        CandidateKind::Written | CandidateKind::Multilang
            if !tags.contains(TypeTags::FACTORIAL) =>
        {
            if !has_operator_outside_compounds(text, lexicon) {
                tags.remove(TypeTags::MATH);
            }
        }
        _ => {}
    }
    tags
}

fn has_operator_outside_compounds(text: &str, lexicon: &Lexicon) -> bool {
    let mut masked = text.to_owned();
    for span in word_spans(text).into_iter().rev() {
        let word = &text[span.clone()];
        if word.contains('-') && is_valid_compound_word(word, lexicon) {
            masked.replace_range(span, "_");
        }
    }
    masked.contains(is_operator)
}

//! Rewriting chat text into a plain arithmetic expression.
//!
//! [`normalize_expression`] applies, in order: `^` to `**`, `:` to `/`,
//! `sqrt(x)` to `(x)**0.5`, constant names to their values, and finally
//! every number-word span to its digits. Word spans are substituted right
//! to left so earlier byte offsets stay valid.

use std::ops::Range;

use regex::Captures;
use tally_lexicon::{constant, english, LanguageSet, Lexicon, WordValue};

use crate::patterns::{CONSTANT_WORD, SQRT_CALL};

/// An expression ready for the evaluator, plus the languages of the words
/// that were substituted into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Normalized {
    pub text: String,
    pub languages: LanguageSet,
}

pub(crate) fn normalize_expression(text: &str, lexicon: &Lexicon) -> Normalized {
    let text = text.replace('^', "**").replace(':', "/");
    let text = SQRT_CALL.replace_all(&text, "($1)**0.5");
    let mut text = CONSTANT_WORD
        .replace_all(&text, |caps: &Captures<'_>| {
            constant(&caps[0]).map_or_else(|| caps[0].to_owned(), |value| value.to_string())
        })
        .into_owned();

    let mut languages = LanguageSet::empty();
    for span in word_spans(&text).into_iter().rev() {
        let Some(hit) = read_word(&text[span.clone()], lexicon) else {
            continue;
        };
        languages |= hit.languages;
        text.replace_range(span, &hit.value.to_string());
    }

    Normalized { text, languages }
}

/// A single word span read through the Lexicon, then the English resolver.
pub(crate) fn read_word(word: &str, lexicon: &Lexicon) -> Option<WordValue> {
    lexicon.lookup(word).or_else(|| {
        let value = english::resolve(word)?;
        Some(WordValue {
            value: u32::try_from(value).ok()?,
            languages: LanguageSet::EN,
        })
    })
}

/// Byte ranges of maximal alphabetic runs joined by single hyphens.
///
/// Any script counts as alphabetic, so kana and kanji form spans too.
pub(crate) fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if !ch.is_alphabetic() {
            continue;
        }
        let mut end = start + ch.len_utf8();
        loop {
            match chars.peek() {
                Some(&(idx, c)) if c.is_alphabetic() => {
                    end = idx + c.len_utf8();
                    chars.next();
                }
                Some(&(idx, '-')) if text[idx + 1..].starts_with(char::is_alphabetic) => {
                    end = idx + 1;
                    chars.next();
                }
                _ => break,
            }
        }
        spans.push(start..end);
    }
    spans
}

#[cfg(test)]
mod tests;

//! The process-wide word table.
//!
//! Built once from the static per-language lists, the generated Japanese
//! spellings and the Roman numeral table, then shared read-only.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::words::{ALL_TABLES, SPANISH_ONES, SPANISH_TENS, TURKISH_ONES, TURKISH_TENS};
use crate::{japanese, roman, LanguageSet};

/// A recognized number word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WordValue {
    pub value: u32,
    pub languages: LanguageSet,
}

impl WordValue {
    const fn new(value: u32, languages: LanguageSet) -> Self {
        WordValue { value, languages }
    }
}

/// Tens accepted by two-word composition (`"tjugo fem"`, `"vingt sept"`).
const COMPOSABLE_TENS: [u32; 8] = [20, 30, 40, 50, 60, 70, 80, 90];

/// Read-only mapping from words and Roman numerals to values.
pub struct Lexicon {
    /// Lowercase word -> reading.
    words: FxHashMap<String, WordValue>,
    /// Uppercase numeral -> value. Matched case-sensitively.
    roman: FxHashMap<String, u32>,
}

impl Lexicon {
    /// Build the table from the static lists.
    pub fn new() -> Self {
        let mut lexicon = Lexicon {
            words: FxHashMap::default(),
            roman: roman::numerals().collect(),
        };

        for table in ALL_TABLES {
            for &(word, value, languages) in *table {
                lexicon.insert(word, value, languages);
            }
        }
        for &(ones, value) in TURKISH_ONES {
            lexicon.insert(ones, value, LanguageSet::TR);
        }
        for &(tens, tens_value) in TURKISH_TENS {
            for &(ones, value) in TURKISH_ONES {
                lexicon.insert(&format!("{tens} {ones}"), tens_value + value, LanguageSet::TR);
            }
        }
        for &(tens, tens_value) in SPANISH_TENS {
            for &(ones, value) in SPANISH_ONES {
                lexicon.insert(&format!("{tens} y {ones}"), tens_value + value, LanguageSet::ES);
            }
        }
        for (spelling, value) in japanese::spellings() {
            lexicon.insert(&spelling, value, LanguageSet::JA);
        }

        lexicon
    }

    /// Merge one entry.
    ///
    /// Same value: the language sets are unioned. Different value: the new
    /// reading replaces the old one.
    fn insert(&mut self, word: &str, value: u32, languages: LanguageSet) {
        self.words
            .entry(word.to_owned())
            .and_modify(|existing| {
                if existing.value == value {
                    existing.languages |= languages;
                } else {
                    *existing = WordValue::new(value, languages);
                }
            })
            .or_insert(WordValue::new(value, languages));
    }

    /// Exact (case-insensitive) table hit, no composition.
    pub fn word(&self, word: &str) -> Option<WordValue> {
        self.words.get(&word.trim().to_lowercase()).copied()
    }

    /// Roman numeral value. Case-sensitive.
    pub fn roman(&self, word: &str) -> Option<u32> {
        self.roman.get(word.trim()).copied()
    }

    /// Full lookup used by the interpreter.
    ///
    /// Tries, in order: a Roman numeral, the word table, French spacing
    /// variants (`"vingt et un"` -> `"vingt-et-un"`), two-word tens and
    /// units composition, and the French `soixante-`/`quatre-vingt-`
    /// prefixes. Anything else is `None`.
    pub fn lookup(&self, word: &str) -> Option<WordValue> {
        if let Some(value) = self.roman(word) {
            return Some(WordValue::new(value, LanguageSet::LA));
        }

        let clean = word.trim().to_lowercase();
        if let Some(&hit) = self.words.get(&clean) {
            return Some(hit);
        }

        let hyphenated = clean.replace(" et ", "-et-").replace(' ', "-");
        if let Some(&hit) = self.words.get(&hyphenated) {
            return Some(hit);
        }

        let parts: Vec<&str> = clean.split_whitespace().collect();
        if let [tens, ones] = parts.as_slice() {
            if let (Some(t), Some(o)) = (self.words.get(*tens), self.words.get(*ones)) {
                if COMPOSABLE_TENS.contains(&t.value) && (1..=9).contains(&o.value) {
                    return Some(WordValue::new(t.value + o.value, t.languages | o.languages));
                }
            }
        }

        self.prefixed(&clean, "soixante-", 60, 10..=19)
            .or_else(|| self.prefixed(&clean, "quatre-vingt-", 80, 1..=19))
    }

    /// `<prefix><remainder>` where the remainder reads as a value in `range`.
    fn prefixed(
        &self,
        clean: &str,
        prefix: &str,
        base: u32,
        range: std::ops::RangeInclusive<u32>,
    ) -> Option<WordValue> {
        let rest = clean.strip_prefix(prefix)?;
        let hit = self.words.get(rest)?;
        range
            .contains(&hit.value)
            .then_some(WordValue::new(base + hit.value, LanguageSet::FR | hit.languages))
    }

    /// Whether `word` is an entry of the word table verbatim.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(&word.trim().to_lowercase())
    }

    /// Number of word entries.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

// Global singleton for the lexicon
static GLOBAL_LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Get the global lexicon (lazily initialized).
pub fn global_lexicon() -> &'static Lexicon {
    GLOBAL_LEXICON.get_or_init(Lexicon::new)
}

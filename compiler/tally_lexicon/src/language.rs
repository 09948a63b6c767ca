//! Language tags attached to recognized number words.
//!
//! A word can legitimately belong to several languages at once ("fem" is
//! Swedish, Danish and Norwegian), so tags are carried as a set rather than
//! a single enum value. Iteration follows declaration order, which keeps
//! rendered output stable.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Set of languages a number word was recognized in.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct LanguageSet: u16 {
        /// English.
        const EN = 1 << 0;
        /// Dutch.
        const NL = 1 << 1;
        /// French.
        const FR = 1 << 2;
        /// German.
        const DE = 1 << 3;
        /// Swedish.
        const SE = 1 << 4;
        /// Turkish.
        const TR = 1 << 5;
        /// Danish.
        const DK = 1 << 6;
        /// Welsh.
        const CY = 1 << 7;
        /// Spanish.
        const ES = 1 << 8;
        /// Norwegian.
        const NO = 1 << 9;
        /// Japanese (romaji, kana and kanji).
        const JA = 1 << 10;
        /// Latin, used for Roman numerals.
        const LA = 1 << 11;
    }
}

/// Short codes, index-aligned with the flag bits.
const CODES: [&str; 12] = [
    "en", "nl", "fr", "de", "se", "tr", "dk", "cy", "es", "no", "ja", "la",
];

impl LanguageSet {
    /// Short code of a single-language set, `None` for empty or mixed sets.
    pub fn code(self) -> Option<&'static str> {
        if self.bits().count_ones() != 1 {
            return None;
        }
        CODES.get(self.bits().trailing_zeros() as usize).copied()
    }

    /// Parse a short code such as `"fr"`.
    pub fn from_code(code: &str) -> Option<Self> {
        CODES
            .iter()
            .position(|&c| c.eq_ignore_ascii_case(code))
            .and_then(|bit| Self::from_bits(1 << bit))
    }

    /// Codes of every language in the set, in declaration order.
    pub fn codes(self) -> impl Iterator<Item = &'static str> {
        self.iter().filter_map(LanguageSet::code)
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.codes().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(code)?;
        }
        Ok(())
    }
}

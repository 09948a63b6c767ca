//! Number-word tables for the tally interpreter.
//!
//! Everything here is static data plus pure lookups:
//!
//! - [`Lexicon`]: words in a dozen languages, generated Japanese spellings
//!   and Roman numerals, each tagged with a [`LanguageSet`].
//! - [`english`]: a strict grammar for spelled-out English cardinals.
//! - [`constants`]: named constants (`pi`, `tau`, `golden`, ...).
//!
//! The lexicon is built once per process; use [`global_lexicon`].

pub mod constants;
pub mod english;
mod japanese;
mod language;
pub mod roman;
mod table;
mod words;

pub use constants::{constant, MATH_CONSTANTS};
pub use language::LanguageSet;
pub use table::{global_lexicon, Lexicon, WordValue};

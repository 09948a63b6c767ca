use super::*;
use pretty_assertions::assert_eq;
use tally_lexicon::global_lexicon;

fn normalize(text: &str) -> Normalized {
    normalize_expression(text, global_lexicon())
}

fn spans(text: &str) -> Vec<&str> {
    word_spans(text).into_iter().map(|r| &text[r]).collect()
}

#[test]
fn operators_and_sqrt() {
    assert_eq!(normalize("2^3").text, "2**3");
    assert_eq!(normalize("10:2").text, "10/2");
    assert_eq!(normalize("sqrt(81) + 1").text, "(81)**0.5 + 1");
    assert_eq!(normalize("SQRT( 16 )").text, "(16)**0.5");
}

#[test]
fn constants_are_whole_words() {
    assert_eq!(normalize("pi+2").text, format!("{}+2", std::f64::consts::PI));
    assert_eq!(normalize("TAU").text, std::f64::consts::TAU.to_string());
    // not a constant inside a longer word
    assert_eq!(normalize("pizza").text, "pizza");
}

#[test]
fn words_become_digits() {
    let out = normalize("sqrt(81) + twee");
    assert_eq!(out.text, "(81)**0.5 + 2");
    assert_eq!(out.languages, LanguageSet::NL);

    let out = normalize("vier! + vingt-deux");
    assert_eq!(out.text, "4! + 22");
    assert!(out.languages.contains(LanguageSet::FR));

    let out = normalize("twenty-one - 2");
    assert_eq!(out.text, "21 - 2");
    assert_eq!(out.languages, LanguageSet::EN);
}

#[test]
fn roman_and_japanese_spans() {
    let out = normalize("VII + trois");
    assert_eq!(out.text, "7 + 3");
    assert_eq!(out.languages, LanguageSet::LA | LanguageSet::FR);

    let out = normalize("さん + ヨン");
    assert_eq!(out.text, "3 + 4");
    assert_eq!(out.languages, LanguageSet::JA);
}

#[test]
fn unknown_words_are_kept() {
    let out = normalize("banana + 2");
    assert_eq!(out.text, "banana + 2");
    assert!(out.languages.is_empty());
}

#[test]
fn span_boundaries() {
    assert_eq!(spans("vingt-deux + six"), vec!["vingt-deux", "six"]);
    assert_eq!(spans("a--b"), vec!["a", "b"]);
    assert_eq!(spans("five-"), vec!["five"]);
    assert_eq!(spans("3+にじゅうさん"), vec!["にじゅうさん"]);
    assert!(spans("12 + 3").is_empty());
}

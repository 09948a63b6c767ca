use pretty_assertions::assert_eq;
use tally_interp::{Failure, LanguageSet, TypeTags};

use crate::common::{assert_reads, codes, read};

#[test]
fn numerals() {
    let cases = [
        ("I", 1),
        ("V", 5),
        ("X", 10),
        ("L", 50),
        ("C", 100),
        ("LX", 60),
        ("XXIII", 23),
        ("XC", 90),
        ("XCIX", 99),
    ];
    for (text, value) in cases {
        let outcome = read(text, value);
        assert_eq!(outcome.value, Some(value), "{text}");
        assert_eq!(codes(outcome.languages), vec!["la"], "{text}");
        assert!(outcome.type_tags.contains(TypeTags::ROMAN), "{text}");
    }
}

#[test]
fn numeral_arithmetic() {
    assert_reads("V + III", 8);
    assert_reads("X * II", 20);

    let outcome = read("L - XX", 30);
    assert_eq!(outcome.value, Some(30));
    assert!(outcome.type_tags.contains(TypeTags::MATH | TypeTags::ROMAN));

    let outcome = read("X + zeven", 17);
    assert_eq!(outcome.value, Some(17));
    assert_eq!(outcome.languages, LanguageSet::NL | LanguageSet::LA);

    let outcome = read("sqrt(XVI) + five", 9);
    assert_eq!(outcome.value, Some(9));
    assert_eq!(codes(outcome.languages), vec!["en", "la"]);
}

#[test]
fn lowercase_is_not_roman() {
    assert_eq!(read("v", 5).failure, Some(Failure::NotParseable));
    assert_eq!(read("lx", 60).failure, Some(Failure::NotParseable));
}

#[test]
fn japanese_kana() {
    let outcome = read("なな", 7);
    assert_eq!(outcome.value, Some(7));
    assert!(outcome.type_tags.contains(TypeTags::MULTILANG));
    assert!(outcome.languages.contains(LanguageSet::JA));

    assert_reads("にじゅうさん", 23);

    let outcome = read("ナナ", 7);
    assert_eq!(outcome.value, Some(7));
    assert!(outcome.languages.contains(LanguageSet::JA));
}

#[test]
fn japanese_kanji() {
    assert_reads("七", 7);
    assert_reads("二十三", 23);
    assert_reads("百", 100);
}

#[test]
fn japanese_arithmetic() {
    let outcome = read("さん + ヨン", 7);
    assert_eq!(outcome.value, Some(7));
    assert_eq!(codes(outcome.languages), vec!["ja"]);
    assert_reads("sqrt(十六)", 4);
}

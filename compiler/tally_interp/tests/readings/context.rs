use pretty_assertions::assert_eq;
use tally_interp::{Failure, LanguageSet, TypeTags};

use crate::common::{codes, read};

#[test]
fn english_compound_or_subtraction() {
    let outcome = read("twenty-one", 21);
    assert_eq!(outcome.value, Some(21));
    assert!(outcome.type_tags.contains(TypeTags::TEXT));
    assert!(!outcome.type_tags.contains(TypeTags::MATH));

    let outcome = read("twenty-one", 19);
    assert_eq!(outcome.value, Some(19));
    assert!(outcome.type_tags.contains(TypeTags::MATH));
    assert!(!outcome.type_tags.contains(TypeTags::TEXT));
}

#[test]
fn french_compound_or_subtraction() {
    let outcome = read("vingt-deux", 22);
    assert_eq!(outcome.value, Some(22));
    assert_eq!(outcome.method, "context_match_multilang");
    assert_eq!(outcome.type_tags, TypeTags::MULTILANG);
    assert_eq!(codes(outcome.languages), vec!["fr"]);

    let outcome = read("vingt-deux", 18);
    assert_eq!(outcome.value, Some(18));
    assert_eq!(outcome.method, "context_match_hyphenated_math");
}

#[test]
fn ungrammatical_pair_is_subtraction() {
    let outcome = read("six-five", 1);
    assert_eq!(outcome.value, Some(1));
    assert_eq!(outcome.method, "context_match_hyphenated_math");
    assert_eq!(outcome.type_tags, TypeTags::MATH);
    // the only reading, so it wins whatever was expected
    assert_eq!(read("six-five", 65).value, Some(1));
}

#[test]
fn other_pairs_subtract() {
    assert_eq!(read("twelve-two", 10).value, Some(10));
    assert_eq!(read("seven-three", 4).value, Some(4));

    let outcome = read("tien-drie", 7);
    assert_eq!(outcome.value, Some(7));
    assert_eq!(codes(outcome.languages), vec!["nl"]);

    // a negative difference is not a count, but the pair is still read
    let outcome = read("five-six", 1);
    assert_eq!(outcome.value, None);
    assert_eq!(outcome.failure, Some(Failure::NoValidInterpretation));
}

#[test]
fn no_match_falls_back_to_priority() {
    let outcome = read("twenty-one", 40);
    assert_eq!(outcome.value, Some(21));
    assert_eq!(outcome.method, "priority_written");

    let outcome = read("vingt-deux", 40);
    assert_eq!(outcome.value, Some(18));
    assert_eq!(outcome.method, "priority_hyphenated_math");
}

#[test]
fn number_inside_prose() {
    for expected in [7, 6] {
        let outcome = read("zeven is meer dan zes", expected);
        assert_eq!(outcome.value, Some(7));
        assert_eq!(outcome.languages, LanguageSet::NL);
    }
    assert_eq!(read("zeven is meer dan zes", 7).method, "context_match_extracted");
}

#[test]
fn pronoun_is_not_a_numeral() {
    let outcome = read("I think five", 5);
    assert_eq!(outcome.value, Some(5));
    assert_eq!(codes(outcome.languages), vec!["en"]);

    let outcome = read("I", 1);
    assert_eq!(outcome.value, Some(1));
    assert_eq!(codes(outcome.languages), vec!["la"]);
}

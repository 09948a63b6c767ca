use pretty_assertions::assert_eq;
use tally_interp::{LanguageSet, TypeTags};

use crate::common::interpreter;

#[test]
fn consecutive_digits() {
    let outcome = interpreter().parse_sequence("4 5 6", 4);
    assert_eq!(outcome.values, vec![4, 5, 6]);
    assert_eq!(outcome.count, 3);
    assert!(outcome.type_tags.contains(TypeTags::MULTIPLE));
    assert_eq!(outcome.method, "multiple_consecutive");
}

#[test]
fn digits_and_words() {
    let outcome = interpreter().parse_sequence("4 five six", 4);
    assert_eq!(outcome.values, vec![4, 5, 6]);
    assert!(outcome.languages.contains(LanguageSet::EN));
}

#[test]
fn expressions_in_a_run() {
    let outcome = interpreter().parse_sequence("3+2 3+3", 5);
    assert_eq!(outcome.values, vec![5, 6]);
    assert_eq!(outcome.count, 2);
    assert!(outcome.type_tags.contains(TypeTags::MATH | TypeTags::MULTIPLE));
}

#[test]
fn gap_ends_the_run() {
    let outcome = interpreter().parse_sequence("3+3 3+5 9 10", 6);
    assert_eq!(outcome.values, vec![6]);
    assert_eq!(outcome.count, 1);
}

#[test]
fn at_most_ten_values() {
    let text = (1..=12).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
    let outcome = interpreter().parse_sequence(&text, 1);
    assert_eq!(outcome.values, (1..=10).collect::<Vec<i64>>());
    assert_eq!(outcome.count, 10);
    assert!(outcome.type_tags.contains(TypeTags::MULTIPLE));
}

#[test]
fn draws_are_collected_across_values() {
    let outcome = interpreter().parse_sequence("random(2,4) random(3,9)", 2);
    assert_eq!(outcome.values, vec![2, 3]);
    assert_eq!(outcome.random_draws.map(|d| d.len()), Some(2));
}

#[test]
fn roman_run() {
    let outcome = interpreter().parse_sequence("VII VIII IX", 7);
    assert_eq!(outcome.values, vec![7, 8, 9]);
    assert!(outcome.type_tags.contains(TypeTags::ROMAN));
}

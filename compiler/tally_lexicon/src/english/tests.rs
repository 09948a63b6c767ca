use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn single_words() {
    assert_eq!(resolve("zero"), Some(0));
    assert_eq!(resolve("seven"), Some(7));
    assert_eq!(resolve("Nineteen"), Some(19));
    assert_eq!(resolve("forty"), Some(40));
    assert_eq!(resolve("hundred"), Some(100));
}

#[test]
fn compounds() {
    assert_eq!(resolve("twenty-one"), Some(21));
    assert_eq!(resolve("twenty one"), Some(21));
    assert_eq!(resolve("ninety-nine"), Some(99));
    assert_eq!(resolve("one hundred and five"), Some(105));
    assert_eq!(resolve("three hundred forty-two"), Some(342));
    assert_eq!(resolve("two thousand twenty"), Some(2020));
    assert_eq!(resolve("one million two hundred thousand"), Some(1_200_000));
}

#[test]
fn ungrammatical_phrases_are_rejected() {
    assert_eq!(resolve("six five"), None);
    assert_eq!(resolve("six-five"), None);
    assert_eq!(resolve("twenty twenty"), None);
    assert_eq!(resolve("thousand"), None);
    assert_eq!(resolve("one thousand one million"), None);
    assert_eq!(resolve("zero one"), None);
    assert_eq!(resolve("and"), None);
    assert_eq!(resolve(""), None);
}

#[test]
fn non_english_is_rejected() {
    assert_eq!(resolve("vingt-deux"), None);
    assert_eq!(resolve("zeven"), None);
    assert_eq!(resolve("5"), None);
}

#[test]
fn tens_ones_shape() {
    assert!(is_tens_ones("twenty-one"));
    assert!(is_tens_ones("Ninety-Nine"));
    assert!(!is_tens_ones("twenty-ten"));
    assert!(!is_tens_ones("six-five"));
    assert!(!is_tens_ones("twenty"));
    assert!(is_tens_word("Sixty"));
    assert!(!is_tens_word("six"));
}

fn tens_name(n: u64) -> &'static str {
    TENS.iter().find(|(_, v)| *v == n * 10).map_or("", |(name, _)| *name)
}

fn ones_name(n: u64) -> &'static str {
    ONES.iter().find(|(_, v)| *v == n).map_or("", |(name, _)| *name)
}

proptest! {
    #[test]
    fn hyphenated_tens_ones_resolve(tens in 2u64..=9, ones in 1u64..=9) {
        let word = format!("{}-{}", tens_name(tens), ones_name(ones));
        prop_assert_eq!(resolve(&word), Some(tens * 10 + ones));
        prop_assert!(is_tens_ones(&word));
    }

    #[test]
    fn two_unit_words_never_resolve(a in 1u64..=9, b in 1u64..=9) {
        let phrase = format!("{} {}", ones_name(a), ones_name(b));
        prop_assert_eq!(resolve(&phrase), None);
    }
}

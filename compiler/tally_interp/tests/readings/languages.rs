use pretty_assertions::assert_eq;
use tally_interp::{LanguageSet, TypeTags};

use crate::common::{assert_reads, codes, read};

#[test]
fn single_words() {
    let cases = [
        ("zeven", 7, LanguageSet::NL),
        ("quatorze", 14, LanguageSet::FR),
        ("siebzehn", 17, LanguageSet::DE),
        ("tjugo", 20, LanguageSet::SE),
        ("kırk", 40, LanguageSet::TR),
        ("halvtreds", 50, LanguageSet::DK),
        ("pedwar", 4, LanguageSet::CY),
        ("quince", 15, LanguageSet::ES),
    ];
    for (text, value, language) in cases {
        let outcome = read(text, value);
        assert_eq!(outcome.value, Some(value), "{text}");
        assert!(outcome.languages.contains(language), "{text}");
        assert!(outcome.type_tags.contains(TypeTags::MULTILANG), "{text}");
    }
}

#[test]
fn shared_spellings_report_every_language() {
    let outcome = read("acht", 8);
    assert_eq!(codes(outcome.languages), vec!["nl", "de"]);
}

#[test]
fn multi_word_phrases() {
    assert_reads("treinta y uno", 31);
    assert_reads("on bir", 11);
    assert_reads("vingt et un", 21);
    assert_reads("twintig vier", 24);
}

#[test]
fn sums_across_languages() {
    let outcome = read("on + beş", 15);
    assert_eq!(outcome.value, Some(15));
    assert_eq!(codes(outcome.languages), vec!["tr"]);

    let outcome = read("ti + fem", 15);
    assert_eq!(outcome.value, Some(15));
    assert!(outcome.languages.contains(LanguageSet::DK));

    let outcome = read("deg + pump", 15);
    assert_eq!(outcome.value, Some(15));
    assert!(outcome.languages.contains(LanguageSet::CY));

    let outcome = read("VII + trois", 10);
    assert_eq!(outcome.value, Some(10));
    assert_eq!(codes(outcome.languages), vec!["fr", "la"]);
}

#[test]
fn english_words() {
    let outcome = read("forty two", 42);
    assert_eq!(outcome.value, Some(42));
    assert_eq!(outcome.method, "context_match_written");
    assert_eq!(codes(outcome.languages), vec!["en"]);

    assert_reads("one hundred", 100);
    assert_reads("Seventeen", 17);
}

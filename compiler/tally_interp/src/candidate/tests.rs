use super::*;
use pretty_assertions::assert_eq;
use tally_lexicon::global_lexicon;

use crate::random::tests::LowestRandom;

fn read(text: &str) -> CandidateSet {
    let limits = EvalLimits::default();
    generate(
        text,
        GenerateOptions {
            lexicon: global_lexicon(),
            limits: &limits,
            random: &LowestRandom,
            max_phrase_words: 3,
        },
    )
}

fn readings(text: &str) -> Vec<(CandidateKind, i64)> {
    read(text)
        .candidates
        .iter()
        .map(|c| (c.kind, c.value))
        .collect()
}

#[test]
fn hyphenated_english() {
    assert_eq!(
        readings("twenty-one"),
        vec![
            (CandidateKind::HyphenatedMath, 19),
            (CandidateKind::Written, 21),
        ]
    );
}

#[test]
fn hyphenated_french() {
    assert_eq!(
        readings("vingt-deux"),
        vec![
            (CandidateKind::HyphenatedMath, 18),
            (CandidateKind::Multilang, 22),
        ]
    );
}

#[test]
fn ungrammatical_pair_is_only_subtraction() {
    assert_eq!(readings("six-five"), vec![(CandidateKind::HyphenatedMath, 1)]);
}

#[test]
fn arithmetic_suppresses_prose_readings() {
    assert_eq!(readings("pi+2"), vec![(CandidateKind::MathExpression, 5)]);
    assert_eq!(readings("4! + 1"), vec![(CandidateKind::FactorialMath, 25)]);
    assert_eq!(readings("sqrt(81) + twee"), vec![(CandidateKind::MathExpression, 11)]);
}

#[test]
fn extraction_from_prose() {
    let set = read("zeven is meer dan zes");
    assert_eq!(set.candidates.len(), 1);
    let candidate = &set.candidates[0];
    assert_eq!(candidate.kind, CandidateKind::Extracted);
    assert_eq!(candidate.value, 7);
    assert_eq!(candidate.languages, LanguageSet::NL);
}

#[test]
fn extraction_prefers_first_number() {
    assert_eq!(readings("ik heb 12 appels"), vec![(CandidateKind::Extracted, 12)]);
    assert_eq!(readings("I said five"), vec![(CandidateKind::Extracted, 5)]);
}

#[test]
fn multi_word_lexicon_phrase() {
    let set = read("treinta y uno");
    assert!(set
        .candidates
        .iter()
        .any(|c| c.kind == CandidateKind::Multilang && c.value == 31));
}

#[test]
fn constant_reading() {
    let set = read("tau");
    // a bare constant is also arithmetic
    assert_eq!(set.candidates[0].kind, CandidateKind::MathExpression);
    assert_eq!(set.candidates[0].value, 6);
}

#[test]
fn random_draws_are_recorded() {
    let set = read("random(5,9) + 1");
    assert_eq!(set.candidates.len(), 1);
    let candidate = &set.candidates[0];
    assert_eq!(candidate.value, 6);
    assert_eq!(
        candidate.random_draws,
        vec![RandomDraw {
            min: 5.0,
            max: 9.0,
            drawn: 5
        }]
    );
}

#[test]
fn runaway_factorial_times_out() {
    let set = read("21!");
    assert!(set.timed_out);
    assert!(set.is_empty());
}

#[test]
fn non_positive_results_are_dropped() {
    assert!(read("3-3").is_empty());
    assert!(read("1-5").is_empty());
    assert!(read("0.4").is_empty());
}

#[test]
fn rounding_ties_to_even() {
    assert_eq!(round_to_count(7.5), Some(8));
    assert_eq!(round_to_count(6.5), Some(6));
    assert_eq!(round_to_count(-2.5), Some(-2));
    assert_eq!(round_to_count(1e300), None);
    assert_eq!(round_to_count(f64::NAN), None);
}

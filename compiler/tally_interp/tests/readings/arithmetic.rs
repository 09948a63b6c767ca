use pretty_assertions::assert_eq;
use tally_interp::{Failure, RandomDraw, TypeTags};

use crate::common::{assert_reads, read};

#[test]
fn basic_operators() {
    assert_reads("3 + 4", 7);
    assert_reads("2*3+1", 7);
    assert_reads("2^3", 8);
    assert_reads("17 % 5", 2);
    assert_reads("(1+2)*3", 9);
}

#[test]
fn colon_is_division() {
    assert_reads("10:2", 5);
    assert_reads("20 : 4", 5);
    let outcome = read("30:6 + 2", 7);
    assert_eq!(outcome.value, Some(7));
    assert!(outcome.type_tags.contains(TypeTags::MATH));
    assert_eq!(read("10/2", 5).value, read("10:2", 5).value);
}

#[test]
fn constants() {
    assert_reads("pi+2", 5);
    let outcome = read("pi+2", 5);
    assert!(outcome.type_tags.contains(TypeTags::CONSTANTS));
    assert_reads("tau", 6);
    assert_reads("e*2", 5);
}

#[test]
fn factorials() {
    let outcome = read("4! + 1", 25);
    assert_eq!(outcome.value, Some(25));
    assert_eq!(outcome.method, "context_match_factorial_math");
    assert!(outcome
        .type_tags
        .contains(TypeTags::FACTORIAL | TypeTags::MATH));
    assert_reads("3!+2!", 8);
    assert_reads("0!", 1);
}

#[test]
fn runaway_factorials_time_out() {
    for text in ["21!", "100!", "5! + 30!"] {
        let outcome = read(text, 1);
        assert_eq!(outcome.value, None, "{text}");
        assert_eq!(outcome.failure, Some(Failure::EvaluationTimeout), "{text}");
    }
}

#[test]
fn square_roots() {
    let outcome = read("sqrt(81) + twee", 11);
    assert_eq!(outcome.value, Some(11));
    assert!(outcome.type_tags.contains(TypeTags::SQRT));
    assert_reads("sqrt(sqrt(16))", 2);
    assert_reads("√16 + 1", 5);
}

#[test]
fn decimals_round_half_even() {
    assert_reads("7,5", 8);
    assert_reads("7.5", 8);
    assert_eq!(read("2.5", 3).value, Some(2));
    assert_reads("1.5 * 3", 4);
}

#[test]
fn random_calls() {
    let outcome = read("random(5,5)", 5);
    assert_eq!(outcome.value, Some(5));
    assert_eq!(
        outcome.random_draws,
        Some(vec![RandomDraw {
            min: 5.0,
            max: 5.0,
            drawn: 5
        }])
    );

    let outcome = read("random(10,1) + random(2,3)", 3);
    assert_eq!(outcome.value, Some(3));
    let draws = outcome.random_draws.unwrap();
    assert_eq!(draws.len(), 2);
    assert_eq!((draws[0].min, draws[0].max), (1.0, 10.0));
    assert_eq!(draws[1].drawn, 2);
}

#[test]
fn mixed_expressions() {
    assert_reads("5! / vingt + sqrt(seize) - e", 7);
    assert_reads("tau^2 - phi*acht + drie!", 33);
    assert_reads("(sqrt(hundert) + cinq) * deux - sieben", 23);
    assert_reads("pi+sqrt(16)-trois+5!", 124);
    assert_reads("vier! + vingt-deux", 46);
    assert_reads("twee! + drei! + quatre!", 32);
    assert_reads("7,5 + fem - tau", 6);
    assert_reads("3! + sqrt(seize) * trois - e + random(1,1)", 16);
}

#[test]
fn failures() {
    assert_eq!(read("", 1).failure, Some(Failure::NotParseable));
    assert_eq!(read("what is 5", 5).failure, Some(Failure::NotParseable));
    assert_eq!(read("1/0", 1).failure, Some(Failure::NoValidInterpretation));
    assert_eq!(read("5-5", 0).failure, Some(Failure::NoValidInterpretation));
    let long = "1+".repeat(150) + "1";
    assert_eq!(read(&long, 151).failure, Some(Failure::NoValidInterpretation));
}

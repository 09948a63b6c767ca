//! The `lookup` command: every table reading of one word.

use tally_lexicon::{constant, english, global_lexicon};

/// Readings of `word`, one `(source, description)` pair per table hit.
pub fn word_readings(word: &str) -> Vec<(&'static str, String)> {
    let lexicon = global_lexicon();
    let mut readings = Vec::new();

    if let Some(value) = lexicon.roman(word) {
        readings.push(("roman", value.to_string()));
    }
    if let Some(hit) = lexicon.lookup(word) {
        readings.push(("lexicon", format!("{} [{}]", hit.value, hit.languages)));
    }
    if let Some(value) = english::resolve(word) {
        readings.push(("english", value.to_string()));
    }
    if let Some(value) = constant(word) {
        readings.push(("constant", value.to_string()));
    }
    readings
}

pub fn lookup_word(word: &str) {
    let readings = word_readings(word);
    if readings.is_empty() {
        println!("{word}: no reading");
        return;
    }
    for (source, reading) in readings {
        println!("{word}: {source:<8} {reading}");
    }
}

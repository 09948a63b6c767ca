//! English number-word resolver.
//!
//! Accepts spelled-out cardinals such as `"seven"`, `"twenty-one"`,
//! `"one hundred and five"` or `"two thousand twenty"`. The grammar is
//! strict: a phrase must read as exactly one number, so `"six five"` and
//! `"twenty twenty"` are rejected instead of being summed.

const ONES: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, u64)] = &[
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
];

fn parse_ones(w: &str) -> Option<u64> {
    ONES.iter().find(|(name, _)| *name == w).map(|(_, v)| *v)
}

fn parse_tens(w: &str) -> Option<u64> {
    TENS.iter().find(|(name, _)| *name == w).map(|(_, v)| *v)
}

fn parse_scale(w: &str) -> Option<u64> {
    SCALES.iter().find(|(name, _)| *name == w).map(|(_, v)| *v)
}

fn parse_digit(w: &str) -> Option<u64> {
    parse_ones(w).filter(|v| (1..=9).contains(v))
}

/// Whether `word` is a tens word followed by a unit, e.g. `"forty-two"`.
pub fn is_tens_ones(word: &str) -> bool {
    let lower = word.to_lowercase();
    lower
        .split_once('-')
        .is_some_and(|(tens, ones)| parse_tens(tens).is_some() && parse_digit(ones).is_some())
}

/// Whether `word` is one of the English tens words.
pub fn is_tens_word(word: &str) -> bool {
    parse_tens(&word.to_lowercase()).is_some()
}

/// Parse one sub-thousand group starting at `start`.
///
/// Shape: `[digit "hundred" | "hundred"] [tens [digit] | ones]`.
/// Returns `(value, next_index)`.
fn parse_group(words: &[&str], start: usize) -> Option<(u64, usize)> {
    let mut value = 0;
    let mut i = start;

    if let (Some(d), Some(&"hundred")) = (words.get(i).and_then(|w| parse_digit(w)), words.get(i + 1)) {
        value = d * 100;
        i += 2;
    } else if words.get(i) == Some(&"hundred") {
        value = 100;
        i += 1;
    }

    if let Some(w) = words.get(i) {
        if let Some(tens) = parse_tens(w) {
            value += tens;
            i += 1;
            if let Some(d) = words.get(i).and_then(|w| parse_digit(w)) {
                value += d;
                i += 1;
            }
        } else if let Some(n) = parse_ones(w).filter(|&n| n > 0) {
            value += n;
            i += 1;
        }
    }

    (i > start).then_some((value, i))
}

/// Resolve a spelled-out English cardinal.
///
/// Words may be separated by whitespace or hyphens; `"and"` between
/// groups is ignored. Input is matched case-insensitively.
pub fn resolve(text: &str) -> Option<u64> {
    let lower = text.trim().to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty() && *w != "and")
        .collect();

    if words.is_empty() {
        return None;
    }
    if words == ["zero"] {
        return Some(0);
    }

    let mut total = 0u64;
    let mut last_scale = u64::MAX;
    let mut i = 0;
    while i < words.len() {
        let (group, next) = parse_group(&words, i)?;
        i = next;
        match words.get(i).and_then(|w| parse_scale(w)) {
            Some(scale) if scale < last_scale => {
                total += group * scale;
                last_scale = scale;
                i += 1;
            }
            Some(_) => return None,
            None if i == words.len() => total += group,
            // another group with no scale between: "six five"
            None => return None,
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests;

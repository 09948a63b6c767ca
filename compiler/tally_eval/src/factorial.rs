//! Textual factorial expansion.
//!
//! `<digits>!` spans are replaced by their value before parsing, so
//! factorials compose with the rest of the expression (`4! + 1` becomes
//! `24 + 1`). Operands above the limit are left as written; the parser then
//! reports them as [`EvalError::RunawayFactorial`](crate::EvalError).

/// `n!` when `n <= max` (and `max` is capped at 20).
pub fn factorial(n: u64, max: u64) -> Option<u64> {
    (n <= max.min(20)).then(|| (1..=n).product())
}

/// Expand every `<digits>!` with an operand of at most 20.
pub fn apply_factorials(text: &str) -> String {
    apply_factorials_up_to(text, 20)
}

/// Expand every `<digits>!` with an operand of at most `max`.
///
/// Digit runs that are the fractional part of a decimal (`2.5!`) are not
/// integers and are left alone.
pub fn apply_factorials_up_to(text: &str, max: u64) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if bytes.get(i) != Some(&b'!') || (start > 0 && bytes[start - 1] == b'.') {
            continue;
        }
        let Some(value) = text[start..i].parse().ok().and_then(|n| factorial(n, max)) else {
            continue;
        };
        out.push_str(&text[copied..start]);
        out.push_str(&value.to_string());
        i += 1;
        copied = i;
    }

    out.push_str(&text[copied..]);
    out
}

//! Operator look-alikes.
//!
//! Chat clients and phone keyboards substitute typographic characters for
//! ASCII operators (`×`, `−`, fullwidth parentheses). They are folded back
//! before any other rewrite so the rest of the pipeline only sees ASCII
//! operators.

/// Sorted by code point for binary search.
///
/// Format: `(found, ascii)`
const OPERATOR_CONFUSABLES: &[(char, char)] = &[
    // Latin-1 Supplement
    ('\u{00B7}', '*'), // Middle Dot
    ('\u{00D7}', '*'), // Multiplication Sign
    ('\u{00F7}', '/'), // Division Sign
    // Dashes
    ('\u{2010}', '-'), // Hyphen
    ('\u{2011}', '-'), // Non-Breaking Hyphen
    ('\u{2012}', '-'), // Figure Dash
    ('\u{2013}', '-'), // En Dash
    ('\u{2044}', '/'), // Fraction Slash
    // Mathematical operators
    ('\u{2212}', '-'), // Minus Sign
    ('\u{2215}', '/'), // Division Slash
    ('\u{2217}', '*'), // Asterisk Operator
    ('\u{2219}', '*'), // Bullet Operator
    ('\u{2236}', ':'), // Ratio
    // Fullwidth forms
    ('\u{FF01}', '!'),
    ('\u{FF05}', '%'),
    ('\u{FF08}', '('),
    ('\u{FF09}', ')'),
    ('\u{FF0A}', '*'),
    ('\u{FF0B}', '+'),
    ('\u{FF0C}', ','),
    ('\u{FF0D}', '-'),
    ('\u{FF0E}', '.'),
    ('\u{FF0F}', '/'),
    ('\u{FF1A}', ':'),
    ('\u{FF3E}', '^'),
];

/// ASCII replacement for an operator look-alike.
fn lookup(ch: char) -> Option<char> {
    OPERATOR_CONFUSABLES
        .binary_search_by_key(&ch, |&(found, _)| found)
        .ok()
        .map(|idx| OPERATOR_CONFUSABLES[idx].1)
}

/// Replace operator look-alikes and fullwidth digits with ASCII.
///
/// `√x` becomes `sqrt(x)` when `x` is a run of digits.
pub(crate) fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{221A}' {
            let mut digits = String::new();
            while let Some(&next) = chars.peek().filter(|c| c.is_ascii_digit()) {
                digits.push(next);
                chars.next();
            }
            if digits.is_empty() {
                out.push_str("sqrt");
            } else {
                out.push_str("sqrt(");
                out.push_str(&digits);
                out.push(')');
            }
            continue;
        }
        if let Some(digit) = fullwidth_digit(ch) {
            out.push(digit);
            continue;
        }
        out.push(lookup(ch).unwrap_or(ch));
    }
    out
}

fn fullwidth_digit(ch: char) -> Option<char> {
    let offset = u32::from(ch).checked_sub(0xFF10)?;
    (offset < 10).then(|| char::from(b'0' + offset as u8))
}

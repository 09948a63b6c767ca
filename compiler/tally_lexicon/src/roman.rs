//! Roman numerals I through C.
//!
//! Only canonical uppercase forms are accepted: `"IIII"`, `"iv"` and `"IC"`
//! are not numerals. Lowercase is rejected so that ordinary words such as
//! "mix" or "did" never read as numbers.

/// Highest numeral in the table.
pub const ROMAN_MAX: u32 = 100;

/// Subtractive-notation symbol table, largest first.
const SYMBOLS: &[(u32, &str)] = &[
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Canonical numeral for `n` (1..=100).
pub fn to_roman(mut n: u32) -> Option<String> {
    if n == 0 || n > ROMAN_MAX {
        return None;
    }
    let mut out = String::new();
    for &(value, symbol) in SYMBOLS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    Some(out)
}

/// Every `(numeral, value)` pair in the table.
pub(crate) fn numerals() -> impl Iterator<Item = (String, u32)> {
    (1..=ROMAN_MAX).filter_map(|n| to_roman(n).map(|s| (s, n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_forms() {
        assert_eq!(to_roman(4).as_deref(), Some("IV"));
        assert_eq!(to_roman(23).as_deref(), Some("XXIII"));
        assert_eq!(to_roman(60).as_deref(), Some("LX"));
        assert_eq!(to_roman(99).as_deref(), Some("XCIX"));
        assert_eq!(to_roman(100).as_deref(), Some("C"));
        assert_eq!(to_roman(0), None);
        assert_eq!(to_roman(101), None);
    }

    #[test]
    fn table_covers_range() {
        assert_eq!(numerals().count(), 100);
    }
}

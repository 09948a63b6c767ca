//! Generated Japanese spellings for 0-100.
//!
//! Japanese numerals up to one hundred are fully regular: an optional tens
//! digit, the word for ten, and an optional unit. Rather than listing every
//! spelling, each script declares its digit readings (with alternates such
//! as `yon`/`shi` for four) and the table is expanded at construction.
//! Katakana is derived from hiragana by codepoint offset.

/// Readings of one writing system.
struct Script {
    /// Readings for 0-9, first entry is the common one.
    digits: [&'static [&'static str]; 10],
    ten: &'static [&'static str],
    hundred: &'static [&'static str],
}

const ROMAJI: Script = Script {
    digits: [
        &["rei", "zero"],
        &["ichi"],
        &["ni"],
        &["san"],
        &["yon", "shi"],
        &["go"],
        &["roku"],
        &["nana", "shichi"],
        &["hachi"],
        &["kyuu", "kyu", "ku"],
    ],
    ten: &["juu", "ju"],
    hundred: &["hyaku", "ippyaku"],
};

const HIRAGANA: Script = Script {
    digits: [
        &["れい", "ぜろ"],
        &["いち"],
        &["に"],
        &["さん"],
        &["よん", "し"],
        &["ご"],
        &["ろく"],
        &["なな", "しち"],
        &["はち"],
        &["きゅう", "く"],
    ],
    ten: &["じゅう"],
    hundred: &["ひゃく"],
};

const KANJI: Script = Script {
    digits: [
        &["零", "〇"],
        &["一"],
        &["二"],
        &["三"],
        &["四"],
        &["五"],
        &["六"],
        &["七"],
        &["八"],
        &["九"],
    ],
    ten: &["十"],
    hundred: &["百"],
};

/// Offset between a hiragana letter and its katakana counterpart.
const KATAKANA_SHIFT: u32 = 0x60;

/// Every generated `(spelling, value)` pair, romaji first.
pub(crate) fn spellings() -> Vec<(String, u32)> {
    let mut out = Vec::new();
    for n in 0..=100 {
        for spelling in spell(n, &ROMAJI) {
            out.push((spelling, n));
        }
        for spelling in spell(n, &HIRAGANA) {
            out.push((to_katakana(&spelling), n));
            out.push((spelling, n));
        }
        for spelling in spell(n, &KANJI) {
            out.push((spelling, n));
        }
    }
    out
}

/// All spellings of `n` (0-100) in one script.
fn spell(n: u32, script: &Script) -> Vec<String> {
    if n == 100 {
        return script.hundred.iter().map(|&s| s.to_owned()).collect();
    }
    let (tens, ones) = (n / 10, (n % 10) as usize);
    if tens == 0 {
        return script.digits[ones].iter().map(|&s| s.to_owned()).collect();
    }

    // 10 is just "ten"; 20-90 prefix the digit
    let mut heads: Vec<String> = Vec::new();
    for &ten in script.ten {
        if tens == 1 {
            heads.push(ten.to_owned());
        } else {
            for &digit in script.digits[tens as usize] {
                heads.push(format!("{digit}{ten}"));
            }
        }
    }
    if ones == 0 {
        return heads;
    }

    let mut out = Vec::with_capacity(heads.len() * script.digits[ones].len());
    for head in &heads {
        for &unit in script.digits[ones] {
            out.push(format!("{head}{unit}"));
        }
    }
    out
}

/// Map hiragana letters to katakana, leaving anything else untouched.
pub(crate) fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + KATAKANA_SHIFT).unwrap_or(c),
            _ => c,
        })
        .collect()
}

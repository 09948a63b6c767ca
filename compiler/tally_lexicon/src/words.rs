//! Static number-word tables.
//!
//! Entries are listed per language. A word listed more than once keeps its
//! first position; a repeat with the same value widens the language set and
//! a repeat with a different value replaces the earlier reading (see
//! `Lexicon::new`). Regular Spanish `"treinta y uno"` and Turkish
//! `"on bir"` compounds are generated from the `*_ONES` tables instead of
//! being spelled out.

use crate::LanguageSet;

/// `(word, value, languages)`. Words are lowercase.
pub(crate) type WordEntry = (&'static str, u32, LanguageSet);

const NL: LanguageSet = LanguageSet::NL;
const FR: LanguageSet = LanguageSet::FR;
const DE: LanguageSet = LanguageSet::DE;
const SE: LanguageSet = LanguageSet::SE;
const TR: LanguageSet = LanguageSet::TR;
const DK: LanguageSet = LanguageSet::DK;
const CY: LanguageSet = LanguageSet::CY;
const ES: LanguageSet = LanguageSet::ES;
const NO: LanguageSet = LanguageSet::NO;

pub(crate) const DUTCH: &[WordEntry] = &[
    ("nul", 0, NL),
    ("een", 1, NL),
    ("twee", 2, NL),
    ("drie", 3, NL),
    ("vier", 4, NL.union(DE)),
    ("vijf", 5, NL),
    ("zes", 6, NL),
    ("zeven", 7, NL),
    ("acht", 8, NL.union(DE)),
    ("negen", 9, NL),
    ("tien", 10, NL),
    ("elf", 11, NL.union(DE)),
    ("twaalf", 12, NL.union(DE)),
    ("dertien", 13, NL),
    ("veertien", 14, NL),
    ("vijftien", 15, NL),
    ("zestien", 16, NL),
    ("zeventien", 17, NL),
    ("achttien", 18, NL),
    ("negentien", 19, NL),
    ("twintig", 20, NL),
    ("eenentwintig", 21, NL),
    ("tweeëntwintig", 22, NL),
    ("drieëntwintig", 23, NL),
    ("vierentwintig", 24, NL),
    ("vijfentwintig", 25, NL),
    ("zesentwintig", 26, NL),
    ("zevenentwintig", 27, NL),
    ("achtentwintig", 28, NL),
    ("negenentwintig", 29, NL),
    ("dertig", 30, NL),
    ("veertig", 40, NL.union(DE)),
    ("vijftig", 50, NL),
    ("zestig", 60, NL.union(DE)),
    ("zeventig", 70, NL.union(DE)),
    ("tachtig", 80, NL.union(DE)),
    ("negentig", 90, NL.union(DE)),
    ("honderd", 100, NL),
];

pub(crate) const FRENCH: &[WordEntry] = &[
    ("zéro", 0, FR),
    ("zero", 0, FR),
    ("un", 1, FR.union(CY)),
    ("une", 1, FR),
    ("deux", 2, FR),
    ("trois", 3, FR),
    ("quatre", 4, FR),
    ("cinq", 5, FR),
    ("six", 6, FR),
    ("sept", 7, FR),
    ("huit", 8, FR),
    ("neuf", 9, FR),
    ("dix", 10, FR),
    ("onze", 11, FR),
    ("douze", 12, FR),
    ("treize", 13, FR),
    ("quatorze", 14, FR),
    ("quinze", 15, FR),
    ("seize", 16, FR),
    ("dix-sept", 17, FR),
    ("dix-huit", 18, FR),
    ("dix-neuf", 19, FR),
    ("vingt", 20, FR),
    ("vingt-et-un", 21, FR),
    ("vingt-deux", 22, FR),
    ("vingt-trois", 23, FR),
    ("vingt-quatre", 24, FR),
    ("vingt-cinq", 25, FR),
    ("vingt-six", 26, FR),
    ("vingt-sept", 27, FR),
    ("vingt-huit", 28, FR),
    ("vingt-neuf", 29, FR),
    ("trente", 30, FR),
    ("quarante", 40, FR),
    ("cinquante", 50, FR),
    ("soixante", 60, FR),
    ("soixante-dix", 70, FR),
    ("quatre-vingt", 80, FR),
    ("quatre-vingts", 80, FR),
    ("quatre-vingt-dix", 90, FR),
    ("cent", 100, FR.union(CY)),
];

pub(crate) const SPANISH: &[WordEntry] = &[
    ("cero", 0, ES),
    ("uno", 1, ES),
    ("un", 1, ES),
    ("dos", 2, ES),
    ("tres", 3, ES),
    ("cuatro", 4, ES),
    ("cinco", 5, ES),
    ("seis", 6, ES),
    ("siete", 7, ES),
    ("ocho", 8, ES),
    ("nueve", 9, ES),
    ("diez", 10, ES),
    ("once", 11, ES),
    ("doce", 12, ES),
    ("trece", 13, ES),
    ("catorce", 14, ES),
    ("quince", 15, ES),
    ("dieciseis", 16, ES),
    ("dieciséis", 16, ES),
    ("diecisiete", 17, ES),
    ("dieciocho", 18, ES),
    ("diecinueve", 19, ES),
    ("veinte", 20, ES),
    ("veintiuno", 21, ES),
    ("veintiún", 21, ES),
    ("veintidos", 22, ES),
    ("veintidós", 22, ES),
    ("veintitres", 23, ES),
    ("veintitrés", 23, ES),
    ("veinticuatro", 24, ES),
    ("veinticinco", 25, ES),
    ("veintiseis", 26, ES),
    ("veintiséis", 26, ES),
    ("veintisiete", 27, ES),
    ("veintiocho", 28, ES),
    ("veintinueve", 29, ES),
    ("treinta", 30, ES),
    ("cuarenta", 40, ES),
    ("cincuenta", 50, ES),
    ("sesenta", 60, ES),
    ("setenta", 70, ES),
    ("ochenta", 80, ES),
    ("noventa", 90, ES),
    ("cien", 100, ES),
    ("ciento", 100, ES),
];

/// Tens combined as `"<tens> y <ones>"`.
pub(crate) const SPANISH_TENS: &[(&str, u32)] = &[
    ("treinta", 30),
    ("cuarenta", 40),
    ("cincuenta", 50),
    ("sesenta", 60),
    ("setenta", 70),
    ("ochenta", 80),
    ("noventa", 90),
];

pub(crate) const SPANISH_ONES: &[(&str, u32)] = &[
    ("uno", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
];

pub(crate) const GERMAN: &[WordEntry] = &[
    ("null", 0, DE.union(NO)),
    ("eins", 1, DE),
    ("zwei", 2, DE),
    ("drei", 3, DE.union(NL)),
    ("fünf", 5, DE),
    ("fuenf", 5, DE),
    ("funf", 5, DE),
    ("sechs", 6, DE),
    ("sieben", 7, DE),
    ("neun", 9, DE),
    ("zehn", 10, DE),
    ("zwölf", 12, DE),
    ("zwoelf", 12, DE),
    ("dreizehn", 13, DE),
    ("vierzehn", 14, DE),
    ("fünfzehn", 15, DE),
    ("fuenfzehn", 15, DE),
    ("sechzehn", 16, DE),
    ("siebzehn", 17, DE),
    ("achtzehn", 18, DE),
    ("neunzehn", 19, DE),
    ("zwanzig", 20, DE),
    ("einundzwanzig", 21, DE),
    ("zweiundzwanzig", 22, DE),
    ("dreiundzwanzig", 23, DE),
    ("vierundzwanzig", 24, DE),
    ("fünfundzwanzig", 25, DE),
    ("fuenfundzwanzig", 25, DE),
    ("sechsundzwanzig", 26, DE),
    ("siebenundzwanzig", 27, DE),
    ("achtundzwanzig", 28, DE),
    ("neunundzwanzig", 29, DE),
    ("dreißig", 30, DE),
    ("dreissig", 30, DE),
    ("fünfzig", 50, DE),
    ("fuenfzig", 50, DE),
    ("siebzig", 70, DE),
    ("achtzig", 80, DE),
    ("neunzig", 90, DE),
    ("hundert", 100, DE),
    ("einhundert", 100, DE),
];

pub(crate) const SWEDISH: &[WordEntry] = &[
    ("noll", 0, SE),
    ("ett", 1, SE.union(NO)),
    ("två", 2, SE),
    ("tva", 2, SE),
    ("tre", 3, SE.union(DK).union(NO)),
    ("fyra", 4, SE),
    ("fem", 5, SE.union(DK).union(NO)),
    ("sex", 6, SE),
    ("sju", 7, SE.union(NO)),
    ("åtta", 8, SE),
    ("atta", 8, SE),
    ("nio", 9, SE.union(NO)),
    ("tio", 10, SE),
    ("elva", 11, SE),
    ("tolv", 12, SE.union(DK).union(NO)),
    ("tretton", 13, SE.union(DK).union(NO)),
    ("fjorton", 14, SE.union(NO)),
    ("femton", 15, SE.union(NO)),
    ("sexton", 16, SE),
    ("sjutton", 17, SE),
    ("arton", 18, SE.union(NO)),
    ("nitton", 19, SE),
    ("tjugo", 20, SE),
    ("tjugoett", 21, SE),
    ("tjugotvå", 22, SE),
    ("tjugotva", 22, SE),
    ("tjugotre", 23, SE),
    ("tjugofyra", 24, SE),
    ("tjugofem", 25, SE),
    ("tjugosex", 26, SE),
    ("tjugosju", 27, SE),
    ("tjugoåtta", 28, SE),
    ("tjugoatta", 28, SE),
    ("tjugonio", 29, SE),
    ("trettio", 30, SE.union(NO)),
    ("fyrtio", 40, SE),
    ("femtio", 50, SE.union(NO)),
    ("sextio", 60, SE.union(NO)),
    ("sjuttio", 70, SE),
    ("åttio", 80, SE),
    ("attio", 80, SE),
    ("nittio", 90, SE.union(NO)),
    ("hundra", 100, SE),
    ("etthundra", 100, SE),
];

pub(crate) const TURKISH: &[WordEntry] = &[
    ("sıfır", 0, TR),
    ("sifir", 0, TR),
    ("on", 10, TR),
    ("yirmi", 20, TR),
    ("otuz", 30, TR),
    ("kırk", 40, TR),
    ("kirk", 40, TR),
    ("elli", 50, TR),
    ("altmış", 60, TR),
    ("altmis", 60, TR),
    ("yetmiş", 70, TR),
    ("yetmis", 70, TR),
    ("seksen", 80, TR),
    ("doksan", 90, TR),
    ("yüz", 100, TR),
    ("yuz", 100, TR),
];

/// Turkish units, with and without diacritics. Also used after `"on"` and
/// `"yirmi"` to build 11-29.
pub(crate) const TURKISH_ONES: &[(&str, u32)] = &[
    ("bir", 1),
    ("iki", 2),
    ("üç", 3),
    ("uc", 3),
    ("dört", 4),
    ("dort", 4),
    ("beş", 5),
    ("bes", 5),
    ("altı", 6),
    ("alti", 6),
    ("yedi", 7),
    ("sekiz", 8),
    ("dokuz", 9),
];

/// Tens that take a spaced unit suffix.
pub(crate) const TURKISH_TENS: &[(&str, u32)] = &[("on", 10), ("yirmi", 20)];

pub(crate) const DANISH: &[WordEntry] = &[
    ("nul", 0, DK.union(NL)),
    ("en", 1, DK.union(NO)),
    ("et", 1, DK),
    ("to", 2, DK.union(NO)),
    ("fire", 4, DK.union(NO)),
    ("seks", 6, DK.union(NO)),
    ("syv", 7, DK.union(NO)),
    ("otte", 8, DK),
    ("ni", 9, DK.union(NO)),
    ("ti", 10, DK.union(NO)),
    ("elleve", 11, DK.union(NO)),
    ("tretten", 13, DK.union(NO)),
    ("fjorten", 14, DK.union(NO)),
    ("femten", 15, DK),
    ("seksten", 16, DK.union(NO)),
    ("sytten", 17, DK.union(NO)),
    ("søtten", 17, NO),
    ("atten", 18, DK.union(NO)),
    ("nitten", 19, DK.union(NO)),
    ("tyve", 20, DK.union(NO)),
    ("enogtyve", 21, DK),
    ("toogtyve", 22, DK),
    ("treogtyve", 23, DK),
    ("fireogtyve", 24, DK),
    ("femogtyve", 25, DK),
    ("seksogtyve", 26, DK),
    ("syvogtyve", 27, DK),
    ("otteogtyve", 28, DK),
    ("niogtyve", 29, DK),
    ("tredive", 30, DK),
    ("fyrre", 40, DK),
    ("fyrretyve", 40, DK),
    ("halvtreds", 50, DK),
    ("tres", 60, DK.union(ES)),
    ("halvfjerds", 70, DK),
    ("firs", 80, DK),
    ("halvfems", 90, DK),
    ("hundrede", 100, DK),
];

pub(crate) const WELSH: &[WordEntry] = &[
    ("dim", 0, CY),
    ("sero", 0, CY),
    ("dau", 2, CY),
    ("dwy", 2, CY),
    ("tri", 3, CY),
    ("tair", 3, CY),
    ("pedwar", 4, CY),
    ("pedair", 4, CY),
    ("pump", 5, CY),
    ("pum", 5, CY),
    ("chwech", 6, CY),
    ("chwe", 6, CY),
    ("saith", 7, CY),
    ("wyth", 8, CY),
    ("naw", 9, CY),
    ("deg", 10, CY),
    ("deng", 10, CY),
    ("un ar ddeg", 11, CY),
    ("deuddeg", 12, CY),
    ("tri ar ddeg", 13, CY),
    ("pedwar ar ddeg", 14, CY),
    ("pymtheg", 15, CY),
    ("un ar bymtheg", 16, CY),
    ("dau ar bymtheg", 17, CY),
    ("deunaw", 18, CY),
    ("pedwar ar bymtheg", 19, CY),
    ("ugain", 20, CY),
    ("un ar hugain", 21, CY),
    ("dau ar hugain", 22, CY),
    ("tri ar hugain", 23, CY),
    ("pedwar ar hugain", 24, CY),
    ("pump ar hugain", 25, CY),
    ("deg ar hugain", 30, CY),
    ("deugain", 40, CY),
    ("hanner cant", 50, CY),
    ("trigain", 60, CY),
    ("deg a thrigain", 70, CY),
    ("pedwar ugain", 80, CY),
    ("deg a phedwar ugain", 90, CY),
    ("cant", 100, CY),
];

pub(crate) const NORWEGIAN: &[WordEntry] = &[
    ("tjue", 20, NO),
    ("tjueen", 21, NO),
    ("tjueto", 22, NO),
    ("tjuetre", 23, NO),
    ("tjuefire", 24, NO),
    ("tjuefem", 25, NO),
    ("tjueseks", 26, NO),
    ("tjuesyv", 27, NO),
    ("tjueåtte", 28, NO),
    ("tjueatte", 28, NO),
    ("tjueni", 29, NO),
    ("tredve", 30, NO),
    ("førti", 40, NO),
    ("forti", 40, NO),
    ("seksti", 60, NO),
    ("søtti", 70, NO),
    ("sytti", 70, NO),
    ("åtti", 80, NO),
    ("atti", 80, NO),
    ("nitti", 90, NO),
    ("hundre", 100, NO),
];

/// Order matters: later tables override earlier ones on value conflicts.
/// Generated Japanese spellings are merged after all of these.
pub(crate) const ALL_TABLES: &[&[WordEntry]] = &[
    DUTCH,
    FRENCH,
    SPANISH,
    GERMAN,
    SWEDISH,
    TURKISH,
    DANISH,
    WELSH,
    NORWEGIAN,
];

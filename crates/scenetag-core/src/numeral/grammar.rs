//! # Numeral Grammar
//!
//! Pattern fragments for the three numeral shapes found in release names:
//! digital (`12`), roman (`XIV`) and spelled-out words (`three`, `trois`).
//! The fragments are meant to be embedded inside larger rule regexes.

/// One to three ASCII digits.
pub const DIGITAL: &str = "[0-9]{1,3}";

const ROMAN_HUNDREDS: &str = "(?:CM|CD|DC{0,3}|C{1,3})";
const ROMAN_TENS: &str = "(?:XC|XL|LX{0,3}|X{1,3})";
const ROMAN_UNITS: &str = "(?:IX|IV|VI{0,3}|I{1,3})";

/// English numerals, indexed by value.
pub const ENGLISH_WORDS: [&str; 21] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty",
];

/// French numerals, indexed by value.
pub const FRENCH_WORDS: [&str; 21] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit", "dix-neuf",
    "vingt",
];

/// French numerals without accents or hyphens, indexed by value.
pub const FRENCH_ALT_WORDS: [&str; 21] = [
    "zero", "une", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    "onze", "douze", "treize", "quatorze", "quinze", "seize", "dixsept", "dixhuit", "dixneuf",
    "vingt",
];

/// Vocabularies in lookup order. A word resolves to its index in the
/// first vocabulary that contains it.
pub const WORD_VOCABULARIES: [&[&str; 21]; 3] = [&ENGLISH_WORDS, &FRENCH_WORDS, &FRENCH_ALT_WORDS];

/// Roman numeral fragment. Upper-case only, never matches the empty string.
pub fn roman() -> String {
    let (h, t, u) = (ROMAN_HUNDREDS, ROMAN_TENS, ROMAN_UNITS);
    format!("(?:M{{1,4}}{h}?{t}?{u}?|{h}{t}?{u}?|{t}{u}?|{u})")
}

/// Word numeral fragment covering every vocabulary.
///
/// Words are ordered longest first so `dix-sept` wins over `dix`, and the
/// alternation is closed by a word boundary so `un` does not match inside
/// `une`.
pub fn word() -> String {
    let mut words: Vec<&str> = WORD_VOCABULARIES
        .iter()
        .flat_map(|vocabulary| vocabulary.iter().copied())
        .collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();
    format!("(?:{})\\b", words.join("|"))
}

/// Any numeral: digital, roman or word.
///
/// The fragment disables case-insensitivity locally, so it keeps its
/// case-sensitive meaning when embedded in a `(?i)` rule.
pub fn numeral() -> String {
    format!("(?-i:{DIGITAL}|{}|{})", roman(), word())
}

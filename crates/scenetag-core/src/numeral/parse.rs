use crate::error::{Result, ScenetagError};
use crate::numeral::grammar::WORD_VOCABULARIES;

/// Roman symbols in greedy decomposition order.
const ROMAN_SYMBOLS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Largest value the roman grammar can spell (`MMMMCMXCIX`).
const ROMAN_MAX: u32 = 4999;

/// Parses a numeral token into its integer value.
///
/// Grammars are tried in order: digital, roman, then word. The first one
/// that accepts the whole token wins.
///
/// # Errors
///
/// Returns `ScenetagError::InvalidNumeral` if no grammar accepts the token.
///
/// # Examples
/// ```
/// use scenetag_core::numeral::parse_numeral;
///
/// assert_eq!(parse_numeral("3").unwrap(), 3);
/// assert_eq!(parse_numeral("XIV").unwrap(), 14);
/// assert_eq!(parse_numeral("trois").unwrap(), 3);
/// assert!(parse_numeral("bogus").is_err());
/// ```
pub fn parse_numeral(value: &str) -> Result<u32> {
    parse_digital(value)
        .or_else(|| parse_roman(value))
        .or_else(|| parse_word(value))
        .ok_or_else(|| ScenetagError::InvalidNumeral {
            value: value.to_string(),
        })
}

fn parse_digital(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Decodes a roman numeral, rejecting anything outside the grammar.
///
/// The token is decomposed greedily and then re-encoded; only tokens that
/// survive the round trip unchanged are well formed.
pub fn parse_roman(value: &str) -> Option<u32> {
    if value.is_empty() {
        return None;
    }

    let mut rest = value;
    let mut total = 0u32;
    for (symbol, amount) in ROMAN_SYMBOLS {
        while let Some(tail) = rest.strip_prefix(symbol) {
            total += amount;
            if total > ROMAN_MAX {
                return None;
            }
            rest = tail;
        }
    }

    if !rest.is_empty() || to_roman(total) != value {
        return None;
    }
    Some(total)
}

/// Encodes a value as an upper-case roman numeral.
pub fn to_roman(mut value: u32) -> String {
    let mut out = String::new();
    for (symbol, amount) in ROMAN_SYMBOLS {
        while value >= amount {
            out.push_str(symbol);
            value -= amount;
        }
    }
    out
}

/// Resolves a spelled-out numeral by its position in the first vocabulary
/// that contains it.
pub fn parse_word(value: &str) -> Option<u32> {
    WORD_VOCABULARIES.iter().find_map(|vocabulary| {
        vocabulary
            .iter()
            .position(|word| *word == value)
            .and_then(|index| u32::try_from(index).ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_grammar() {
        assert_eq!(parse_numeral("3").unwrap(), 3);
        assert_eq!(parse_numeral("three").unwrap(), 3);
        assert_eq!(parse_numeral("trois").unwrap(), 3);
        assert_eq!(parse_numeral("XX").unwrap(), 20);
    }

    #[test]
    fn bogus_is_invalid() {
        let err = parse_numeral("bogus").unwrap_err();
        assert!(matches!(err, ScenetagError::InvalidNumeral { ref value } if value == "bogus"));
    }

    #[test]
    fn digital_accepts_leading_zeros() {
        assert_eq!(parse_numeral("0106").unwrap(), 106);
        assert_eq!(parse_numeral("007").unwrap(), 7);
    }

    #[test]
    fn digital_rejects_signs_and_overflow() {
        assert!(parse_numeral("-3").is_err());
        assert!(parse_numeral("+3").is_err());
        assert!(parse_numeral(" 3").is_err());
        assert!(parse_numeral("99999999999").is_err());
        assert!(parse_numeral("").is_err());
    }

    #[test]
    fn roman_known_values() {
        assert_eq!(parse_roman("XIV"), Some(14));
        assert_eq!(parse_roman("MCMXCIX"), Some(1999));
        assert_eq!(parse_roman("MMMM"), Some(4000));
        assert_eq!(parse_roman("IV"), Some(4));
    }

    #[test]
    fn roman_round_trips_classical_range() {
        for n in 1..=3999 {
            let numeral = to_roman(n);
            assert_eq!(parse_numeral(&numeral).unwrap(), n, "failed for {numeral}");
        }
    }

    #[test]
    fn roman_rejects_malformed() {
        for bad in ["IIII", "VX", "IC", "XM", "VV", "IIV", "MMMMM", "xiv", "XIVz"] {
            assert_eq!(parse_roman(bad), None, "should reject {bad}");
            assert!(parse_numeral(bad).is_err(), "should reject {bad}");
        }
    }

    #[test]
    fn oversized_roman_is_invalid_not_a_panic() {
        let huge = "M".repeat(4_300_000);
        assert_eq!(parse_roman(&huge), None);
        assert!(matches!(
            parse_numeral(&huge),
            Err(ScenetagError::InvalidNumeral { .. })
        ));
        assert_eq!(parse_roman("MMMMCMXCIX"), Some(ROMAN_MAX));
        assert_eq!(parse_roman("MMMMM"), None);
    }

    #[test]
    fn word_vocabularies_resolve_blindly_by_index() {
        assert_eq!(parse_numeral("zero").unwrap(), 0);
        assert_eq!(parse_numeral("zéro").unwrap(), 0);
        assert_eq!(parse_numeral("twenty").unwrap(), 20);
        assert_eq!(parse_numeral("dix-sept").unwrap(), 17);
        assert_eq!(parse_numeral("dixneuf").unwrap(), 19);
        assert_eq!(parse_numeral("une").unwrap(), 1);
        // "six" is English first, and also index 6 in French
        assert_eq!(parse_numeral("six").unwrap(), 6);
    }

    #[test]
    fn words_are_case_sensitive() {
        assert!(parse_numeral("Three").is_err());
        assert!(parse_numeral("TROIS").is_err());
    }
}

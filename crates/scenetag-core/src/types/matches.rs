use std::collections::BTreeMap;

use serde::Serialize;

use super::span::Span;
use crate::error::{Result, ScenetagError};
use crate::numeral::parse_numeral;
use crate::registry::{CanonicalForm, Property};

/// A property pattern found in a subject string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMatch {
    pub property: Property,
    pub canonical_form: CanonicalForm,
    /// Character offsets of the matched text.
    pub span: Span,
    /// The matched text as it appears in the subject.
    pub value: String,
}

/// A heuristic rule hit with its named captures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatch {
    /// Named groups that took part in the match.
    pub captures: BTreeMap<String, String>,
    /// Reliability of the rule, in `[0.0, 1.0]`.
    pub confidence: f32,
    /// Character offsets after span adjustment.
    pub span: Span,
    /// The subject text covered by the adjusted span.
    pub value: String,
}

impl RuleMatch {
    /// The text captured by a named group.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures.get(name).map(String::as_str)
    }

    /// Parses a named capture as a single numeral.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidNumeral` if the capture is present but
    /// is not a numeral.
    pub fn numeral(&self, name: &str) -> Result<Option<u32>> {
        self.get(name).map(parse_numeral).transpose()
    }

    /// Parses a named capture holding one or more numbers, such as the
    /// `e13-e14` of `s02e13-e14` or the `x01x02` of `1x01x02`.
    ///
    /// Returns an empty list when the group did not participate.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidNumeral` if the capture holds no
    /// number at all.
    pub fn numerals(&self, name: &str) -> Result<Vec<u32>> {
        let Some(text) = self.get(name) else {
            return Ok(Vec::new());
        };
        if let Ok(value) = parse_numeral(text) {
            return Ok(vec![value]);
        }

        let values = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|piece| !piece.is_empty())
            .map(parse_numeral)
            .collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            return Err(ScenetagError::InvalidNumeral {
                value: text.to_string(),
            });
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_match(captures: &[(&str, &str)]) -> RuleMatch {
        RuleMatch {
            captures: captures
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            confidence: 1.0,
            span: Span::new(0, 6),
            value: "s02e13".into(),
        }
    }

    #[test]
    fn numeral_capture() {
        let m = rule_match(&[("season", "two")]);
        assert_eq!(m.numeral("season").unwrap(), Some(2));
        assert_eq!(m.numeral("episodeNumber").unwrap(), None);
    }

    #[test]
    fn numeral_list_capture() {
        let m = rule_match(&[("episodeNumber", "e13-e14"), ("bonus", "x01x02")]);
        assert_eq!(m.numerals("episodeNumber").unwrap(), vec![13, 14]);
        assert_eq!(m.numerals("bonus").unwrap(), vec![1, 2]);
        assert!(m.numerals("missing").unwrap().is_empty());
    }

    #[test]
    fn numeral_list_without_numbers_fails() {
        let m = rule_match(&[("episodeNumber", "e-e")]);
        assert!(matches!(
            m.numerals("episodeNumber"),
            Err(ScenetagError::InvalidNumeral { .. })
        ));
    }

    #[test]
    fn property_match_serializes_camel_case() {
        let m = PropertyMatch {
            property: Property::ScreenSize,
            canonical_form: CanonicalForm::Name("720p"),
            span: Span::new(6, 10),
            value: "720p".into(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["property"], "screenSize");
        assert_eq!(json["canonicalForm"], "720p");
        assert_eq!(json["span"]["start"], 6);
    }
}

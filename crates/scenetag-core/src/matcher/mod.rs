//! # Separator-Aware Matcher
//!
//! Scans a subject string with every enabled registry pattern and keeps the
//! hits that stand as whole tokens.

pub mod separator;

use tracing::trace;

use crate::registry::Registry;
use crate::types::{PropertyMatch, Span};

pub use separator::{
    GROUP_DELIMITERS, SEPARATOR_CLASS, SEPARATORS, closing_delimiter, is_bounded, is_grouped,
    is_separator,
};

impl Registry {
    /// Finds every enabled property pattern in `subject`.
    ///
    /// Each pattern is searched once (leftmost occurrence only). A hit is
    /// kept when the characters around it, where they exist, are
    /// separators. Overlapping hits for different patterns are all
    /// reported, in registry declaration order; choosing between them is
    /// left to the caller.
    ///
    /// # Examples
    /// ```
    /// use scenetag_core::{Property, Registry};
    ///
    /// let registry = Registry::standard().unwrap();
    /// let found = registry.find_properties("Movie.720p.BluRay.x264-GROUP");
    ///
    /// assert!(found.iter().any(|m| m.property == Property::ScreenSize && m.value == "720p"));
    /// assert!(found.iter().any(|m| m.property == Property::Format && m.canonical_form == "BluRay"));
    /// ```
    pub fn find_properties(&self, subject: &str) -> Vec<PropertyMatch> {
        let mut found = Vec::new();

        for pattern in self.patterns() {
            let Some(hit) = pattern.regex().find(subject) else {
                continue;
            };

            if !is_bounded(subject, hit.start(), hit.end()) {
                trace!(
                    property = %pattern.property(),
                    pattern = pattern.source(),
                    value = hit.as_str(),
                    "rejected unbounded match"
                );
                continue;
            }

            trace!(
                property = %pattern.property(),
                canonical = %pattern.canonical(),
                value = hit.as_str(),
                "matched property"
            );
            found.push(PropertyMatch {
                property: pattern.property(),
                canonical_form: pattern.canonical(),
                span: Span::from_byte_range(subject, hit.range()),
                value: hit.as_str().to_string(),
            });
        }

        found
    }
}

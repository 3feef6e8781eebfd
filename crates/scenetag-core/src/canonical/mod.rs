//! # Canonical Form Resolution
//!
//! Maps raw text back to the display value the registry knows it by,
//! either through the property patterns or through the synonym table.

pub mod synonyms;

use std::borrow::Cow;

use tracing::trace;

use crate::registry::{CanonicalForm, Property, Registry};

pub use synonyms::{EDITION_SYNONYMS, SynonymTable};

impl Registry {
    /// Resolves `value` to the canonical form of `property` it spells.
    ///
    /// A pattern matching the whole value is preferred; otherwise the first
    /// canonical form (in declaration order) with a pattern matching a
    /// prefix of the value is returned. Excluded properties are resolved
    /// too, since exclusion only concerns scanning.
    ///
    /// Returns `None` when nothing matches.
    ///
    /// # Examples
    /// ```
    /// use scenetag_core::{CanonicalForm, Property, Registry};
    ///
    /// let registry = Registry::standard().unwrap();
    /// assert_eq!(
    ///     registry.compute_canonical_form(Property::Format, "bdrip"),
    ///     Some(CanonicalForm::Name("BluRay"))
    /// );
    /// assert_eq!(registry.compute_canonical_form(Property::Format, "vinyl"), None);
    /// ```
    pub fn compute_canonical_form(&self, property: Property, value: &str) -> Option<CanonicalForm> {
        let resolved = self
            .patterns_of(property)
            .find(|p| p.matches_whole(value))
            .or_else(|| self.patterns_of(property).find(|p| p.matches_prefix(value)))
            .map(|p| p.canonical());
        trace!(%property, value, ?resolved, "computed canonical form");
        resolved
    }

    /// Maps a synonym to its display name; anything else is returned as is.
    pub fn canonical_form<'a>(&'a self, value: &'a str) -> Cow<'a, str> {
        self.synonyms().canonical_form(value)
    }
}

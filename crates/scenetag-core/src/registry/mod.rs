//! # Property Registry
//!
//! Compiles the declarative property tables into an immutable set of
//! case-insensitive regexes. Construction validates every pattern, so a
//! successfully built [`Registry`] never fails at match time.

pub mod config;
pub mod property;
pub mod tables;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::canonical::SynonymTable;
use crate::error::{Result, ScenetagError};

pub use config::RegistryConfig;
pub use property::{CanonicalForm, Property};
use tables::{MULTI_VALUED, SINGLE_VALUED};

/// Replacement for a dash in a declared pattern.
const LOOSE_SEPARATOR: &str = "[-. _]?";

/// A compiled pattern bound to its property and canonical form.
#[derive(Debug, Clone)]
pub struct PropertyPattern {
    property: Property,
    canonical: CanonicalForm,
    source: &'static str,
    regex: Regex,
    exact: Regex,
}

impl PropertyPattern {
    /// Compiles a declared pattern, loosening dashes into separators.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidPattern` if the pattern does not compile.
    pub fn compile(
        property: Property,
        canonical: CanonicalForm,
        source: &'static str,
    ) -> Result<Self> {
        let loosened = source.replace('-', LOOSE_SEPARATOR);
        let build = |pattern: &str| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|err| ScenetagError::InvalidPattern {
                    property,
                    pattern: source.to_string(),
                    source: err,
                })
        };

        Ok(Self {
            property,
            canonical,
            source,
            regex: build(&loosened)?,
            exact: build(&format!("^(?:{loosened})$"))?,
        })
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn canonical(&self) -> CanonicalForm {
        self.canonical
    }

    /// The pattern as declared, before dash loosening.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// The compiled, unanchored regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether the pattern matches the whole of `value`.
    pub fn matches_whole(&self, value: &str) -> bool {
        self.exact.is_match(value)
    }

    /// Whether the pattern matches a prefix of `value`.
    pub fn matches_prefix(&self, value: &str) -> bool {
        self.regex.find(value).is_some_and(|m| m.start() == 0)
    }
}

/// Immutable registry of every property pattern.
///
/// Patterns are kept in declaration order, which is also the order the
/// matcher reports results in.
#[derive(Debug, Clone)]
pub struct Registry {
    patterns: Vec<PropertyPattern>,
    synonyms: SynonymTable,
    config: RegistryConfig,
}

impl Registry {
    /// Builds a registry from the declarative tables.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidPattern` for the first declared
    /// pattern that fails to compile.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let mut patterns = Vec::new();

        for entry in MULTI_VALUED {
            for source in entry.patterns {
                patterns.push(PropertyPattern::compile(
                    entry.property,
                    entry.canonical,
                    *source,
                )?);
            }
        }

        for entry in SINGLE_VALUED {
            for form in entry.forms {
                patterns.push(PropertyPattern::compile(
                    entry.property,
                    CanonicalForm::Name(*form),
                    *form,
                )?);
            }
        }

        debug!(
            patterns = patterns.len(),
            excluded = ?config.excluded,
            "compiled property registry"
        );

        Ok(Self {
            patterns,
            synonyms: SynonymTable::standard(),
            config,
        })
    }

    /// Builds a registry with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Registry::new`].
    pub fn standard() -> Result<Self> {
        Self::new(RegistryConfig::default())
    }

    /// Replaces the synonym table used by [`Registry::canonical_form`].
    #[must_use]
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Patterns enabled for scanning, skipping excluded properties.
    pub fn patterns(&self) -> impl Iterator<Item = &PropertyPattern> {
        self.patterns
            .iter()
            .filter(move |p| !self.config.is_excluded(p.property))
    }

    /// Every compiled pattern, excluded properties included.
    pub fn all_patterns(&self) -> &[PropertyPattern] {
        &self.patterns
    }

    /// Every pattern registered for one property.
    pub fn patterns_of(&self, property: Property) -> impl Iterator<Item = &PropertyPattern> {
        self.patterns.iter().filter(move |p| p.property == property)
    }

    /// Every pattern registered for one canonical form of a property.
    pub fn patterns_for(
        &self,
        property: Property,
        canonical: CanonicalForm,
    ) -> impl Iterator<Item = &PropertyPattern> {
        self.patterns_of(property)
            .filter(move |p| p.canonical == canonical)
    }

    /// Distinct canonical forms of a property, in declaration order.
    pub fn canonical_forms(&self, property: Property) -> Vec<CanonicalForm> {
        let mut forms: Vec<CanonicalForm> = Vec::new();
        for pattern in self.patterns_of(property) {
            if !forms.contains(&pattern.canonical) {
                forms.push(pattern.canonical);
            }
        }
        forms
    }
}

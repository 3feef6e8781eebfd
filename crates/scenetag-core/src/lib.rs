//! # Scenetag Core
//!
//! Table-driven extraction of release metadata from file and torrent names:
//! a property registry with separator-aware matching, canonical-form and
//! synonym resolution, heuristic episode/video rules, and numeral parsing
//! for digital, roman and spelled-out numbers.
//!
//! ## Quick Start
//!
//! ```rust
//! use scenetag_core::{Property, Registry, parse_numeral};
//!
//! let registry = Registry::standard().unwrap();
//! let found = registry.find_properties("Movie.720p.BluRay.x264-GROUP");
//!
//! let size = found.iter().find(|m| m.property == Property::ScreenSize).unwrap();
//! assert_eq!(size.value, "720p");
//! assert_eq!((size.span.start, size.span.end), (6, 10));
//!
//! assert_eq!(parse_numeral("XIV").unwrap(), 14);
//! ```
pub mod canonical;
pub mod error;
pub mod matcher;
pub mod media;
pub mod numeral;
pub mod registry;
pub mod rules;
pub mod types;

// Re-export primary API
pub use canonical::SynonymTable;
pub use error::{Result, ScenetagError};
pub use matcher::is_separator;
pub use media::FileKind;
pub use numeral::parse_numeral;
pub use registry::{CanonicalForm, Property, PropertyPattern, Registry, RegistryConfig};
pub use rules::{
    Rule, RuleSet, RuleSets, is_non_episode_title, is_unlikely_series, known_website,
};
pub use types::{EpisodeGuess, PropertyMatch, RuleMatch, Span};

//! # Scenetag
//!
//! Metadata extraction from release and file names. This crate re-exports
//! the [`scenetag_core`] engine.
//!
//! ```rust
//! use scenetag::{Property, Registry};
//!
//! let registry = Registry::standard().unwrap();
//! let found = registry.find_properties("Show.S02E13.PROPER.720p.HDTV.x264-LOL");
//! assert!(found.iter().any(|m| m.property == Property::ReleaseGroup));
//! ```
pub use scenetag_core::*;

use thiserror::Error;

use crate::registry::Property;

/// Errors that can occur during scenetag core operations.
#[derive(Debug, Error)]
pub enum ScenetagError {
    /// The token is not a digital, roman, or word numeral.
    #[error("invalid numeral: {value:?}")]
    InvalidNumeral {
        /// The token that could not be parsed.
        value: String,
    },

    /// A declared property pattern failed to compile.
    #[error("invalid pattern {pattern:?} for property {property}: {source}")]
    InvalidPattern {
        /// Property the pattern was declared under.
        property: Property,
        /// The declared pattern source, before separator loosening.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A heuristic rule was declared with out-of-range parameters.
    #[error("invalid rule {pattern:?}: {reason}")]
    InvalidRule {
        /// The rule's regex source.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A property name did not match any known property.
    #[error("unknown property: {0:?}")]
    UnknownProperty(String),
}

/// Result type alias for scenetag operations.
pub type Result<T> = std::result::Result<T, ScenetagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ScenetagError::InvalidNumeral {
            value: "bogus".into(),
        };
        assert_eq!(err.to_string(), "invalid numeral: \"bogus\"");

        let err = ScenetagError::UnknownProperty("colour".into());
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn invalid_pattern_names_property() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ScenetagError::InvalidPattern {
            property: Property::VideoCodec,
            pattern: "(".into(),
            source,
        };
        assert!(err.to_string().contains("videoCodec"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScenetagError>();
    }
}

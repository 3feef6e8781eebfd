use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::property::Property;

/// Configuration for building a [`Registry`](super::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Properties skipped during unsupervised scanning. They stay available
    /// to canonical-form resolution.
    pub excluded: BTreeSet<Property>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            excluded: BTreeSet::from([Property::WeakReleaseGroup]),
        }
    }
}

impl RegistryConfig {
    /// Create a new registry configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a property from scanning.
    pub fn with_excluded(mut self, property: Property) -> Self {
        self.excluded.insert(property);
        self
    }

    /// Re-enable scanning for a property.
    pub fn include(mut self, property: Property) -> Self {
        self.excluded.remove(&property);
        self
    }

    /// Scan every property, including weak ones.
    pub fn include_all(mut self) -> Self {
        self.excluded.clear();
        self
    }

    /// Whether the property is skipped during scanning.
    pub fn is_excluded(&self, property: Property) -> bool {
        self.excluded.contains(&property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_weak_release_group() {
        let config = RegistryConfig::default();
        assert!(config.is_excluded(Property::WeakReleaseGroup));
        assert_eq!(config.excluded.len(), 1);
    }

    #[test]
    fn builder_methods() {
        let config = RegistryConfig::new()
            .with_excluded(Property::Other)
            .include(Property::WeakReleaseGroup);
        assert!(config.is_excluded(Property::Other));
        assert!(!config.is_excluded(Property::WeakReleaseGroup));

        let config = RegistryConfig::new().include_all();
        assert!(config.excluded.is_empty());
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"excluded":["weakReleaseGroup","other"]}"#).unwrap();
        assert!(config.is_excluded(Property::Other));
        assert!(config.is_excluded(Property::WeakReleaseGroup));
    }
}

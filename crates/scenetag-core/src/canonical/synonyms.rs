use std::borrow::Cow;
use std::collections::HashMap;

/// Informal spellings of edition names, keyed by display name.
pub const EDITION_SYNONYMS: &[(&str, &[&str])] = &[
    ("Special Edition", &["Special"]),
    ("Collector Edition", &["Collector"]),
    ("Criterion Edition", &["Criterion"]),
];

/// Case-insensitive lookup from a synonym to its display name.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    reverse: HashMap<String, String>,
}

impl SynonymTable {
    /// Inverts a `display name -> synonyms` table.
    ///
    /// If two display names claim the same synonym, the later one wins.
    pub fn new<'a, I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut reverse = HashMap::new();
        for (canonical, synonyms) in entries {
            for synonym in synonyms {
                reverse.insert(synonym.to_lowercase(), canonical.to_string());
            }
        }
        Self { reverse }
    }

    /// The edition synonym table.
    pub fn standard() -> Self {
        Self::new(
            EDITION_SYNONYMS
                .iter()
                .map(|(canonical, synonyms)| (*canonical, synonyms.iter().copied())),
        )
    }

    /// Returns the display name for `value`, or `value` itself when it is
    /// not a known synonym.
    pub fn canonical_form<'a>(&'a self, value: &'a str) -> Cow<'a, str> {
        match self.reverse.get(&value.to_lowercase()) {
            Some(canonical) => Cow::Borrowed(canonical.as_str()),
            None => Cow::Borrowed(value),
        }
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}

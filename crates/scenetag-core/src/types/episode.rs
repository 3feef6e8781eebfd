use std::fmt;

use serde::{Deserialize, Serialize};

/// Weak numbers whose leading digits exceed this are not season numbers.
const MAX_WEAK_SEASON: u32 = 25;

/// Season and episode numbers read off an episode rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EpisodeGuess {
    /// Season number, when the name carries one.
    pub season: Option<u32>,
    /// Episode numbers; several for multi-episode files ("s02e13-e14").
    pub episodes: Vec<u32>,
}

impl EpisodeGuess {
    /// Interprets a bare number such as `213` or `0106`.
    ///
    /// Numbers above 100 split into season (hundreds) and episode (rest);
    /// smaller ones are an episode alone. Returns `None` when the implied
    /// season is implausibly large.
    #[must_use]
    pub fn from_weak_number(number: u32) -> Option<Self> {
        if number <= 100 {
            return Some(Self {
                season: None,
                episodes: vec![number],
            });
        }

        let season = number / 100;
        if season > MAX_WEAK_SEASON {
            return None;
        }
        Some(Self {
            season: Some(season),
            episodes: vec![number % 100],
        })
    }

    /// Whether neither a season nor an episode was found.
    pub fn is_empty(&self) -> bool {
        self.season.is_none() && self.episodes.is_empty()
    }
}

impl fmt::Display for EpisodeGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(season) = self.season {
            write!(f, "S{season:02}")?;
        }
        for episode in &self.episodes {
            write!(f, "E{episode:02}")?;
        }
        Ok(())
    }
}

use super::RuleSet;
use crate::error::Result;
use crate::matcher::SEPARATOR_CLASS;
use crate::numeral::grammar::{DIGITAL, numeral};

/// Confidence of the bare-number fallback rule.
pub const WEAK_EPISODE_CONFIDENCE: f32 = 0.3;

/// Confidence of a bare number read as season and episode (`213`).
pub const WEAK_SEASON_SPLIT_CONFIDENCE: f32 = 0.6;

/// Words that look like an episode title but never are one.
pub const NON_EPISODE_TITLES: &[&str] = &["extras", "rip"];

/// Words that look like a series name but rarely are one.
pub const UNLIKELY_SERIES: &[&str] = &["series"];

/// Whether `title` is a word such as `Extras` that is not an episode title.
pub fn is_non_episode_title(title: &str) -> bool {
    let title = title.trim();
    NON_EPISODE_TITLES
        .iter()
        .any(|word| word.eq_ignore_ascii_case(title))
}

/// Whether `series` is a word such as `Series` that is unlikely to name a show.
pub fn is_unlikely_series(series: &str) -> bool {
    let series = series.trim();
    UNLIKELY_SERIES
        .iter()
        .any(|word| word.eq_ignore_ascii_case(series))
}

impl RuleSet {
    /// Season and episode rules, strongest forms first.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule fails to compile.
    pub fn episode() -> Result<Self> {
        let (sep, num) = (SEPARATOR_CLASS, numeral());
        RuleSet::new(
            "episode",
            [
                // Season 2, saison deux
                (format!(r"(?:season|saison)\s+(?P<season>{num})"), 1.0, (0, 0)),
                // s02e13, s02e13-e14
                (
                    format!(
                        r"s(?P<season>{DIGITAL})[^0-9]?(?P<episodeNumber>(?:-?[e-]{DIGITAL})+)[^0-9]"
                    ),
                    1.0,
                    (0, -1),
                ),
                // 2x13, 2x13x14
                (
                    format!(
                        r"[^0-9](?P<season>{DIGITAL})[^0-9 .-]?(?P<episodeNumber>(?:-?x{DIGITAL})+)[^0-9]"
                    ),
                    1.0,
                    (1, -1),
                ),
                // s02
                (format!(r"s(?P<season>{DIGITAL})[^0-9]"), 0.6, (0, -1)),
                // 12v2: manga reprints
                (format!(r"(?P<episodeNumber>{DIGITAL})v[23]{sep}"), 0.6, (0, 0)),
                // ep 23
                (
                    format!(r"(?:ep|episode){sep}(?P<episodeNumber>{num})[^0-9]"),
                    0.7,
                    (0, -1),
                ),
                // e13: mini-series without a season
                (format!(r"{sep}e(?P<episodeNumber>{DIGITAL}){sep}"), 0.6, (1, -1)),
            ],
        )
    }

    /// Bare 2-4 digit numbers such as `213` or `0106`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule fails to compile.
    pub fn weak_episode() -> Result<Self> {
        let sep = SEPARATOR_CLASS;
        RuleSet::new(
            "weak_episode",
            [(
                format!(r"{sep}(?P<episodeNumber>[0-9]{{2,4}}){sep}"),
                WEAK_EPISODE_CONFIDENCE,
                (1, -1),
            )],
        )
    }
}

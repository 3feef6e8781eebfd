//! # Heuristic Rule Sets
//!
//! Ordered regex rules for episode and video details that do not fit the
//! property registry. Each rule carries a confidence score for whoever
//! arbitrates between competing matches, and a span adjustment that trims
//! boundary characters some rules capture as anchors.

pub mod episode;
pub mod video;

use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::error::{Result, ScenetagError};
use crate::types::{EpisodeGuess, RuleMatch, Span};

pub use episode::{
    NON_EPISODE_TITLES, UNLIKELY_SERIES, WEAK_EPISODE_CONFIDENCE, WEAK_SEASON_SPLIT_CONFIDENCE,
    is_non_episode_title, is_unlikely_series,
};
pub use video::{KNOWN_WEBSITES, known_website};

/// A single heuristic rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    confidence: f32,
    span_adjust: (isize, isize),
}

impl Rule {
    /// Compiles a case-insensitive rule.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidRule` if the confidence lies outside
    /// `[0.0, 1.0]`, or `ScenetagError::RegexError` if the pattern does not
    /// compile.
    pub fn new(pattern: &str, confidence: f32, span_adjust: (isize, isize)) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ScenetagError::InvalidRule {
                pattern: pattern.to_string(),
                reason: format!("confidence {confidence} is outside [0, 1]"),
            });
        }

        Ok(Self {
            regex: RegexBuilder::new(pattern).case_insensitive(true).build()?,
            confidence,
            span_adjust,
        })
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn span_adjust(&self) -> (isize, isize) {
        self.span_adjust
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Leftmost match of the rule in `subject`.
    pub fn find(&self, subject: &str) -> Option<RuleMatch> {
        let caps = self.regex.captures(subject)?;
        let whole = caps.get(0)?;

        let captures = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();

        let len = subject.chars().count();
        let span = Span::from_byte_range(subject, whole.range()).adjust(self.span_adjust, len);

        Some(RuleMatch {
            captures,
            confidence: self.confidence,
            span,
            value: span.slice(subject).to_string(),
        })
    }
}

/// An ordered list of rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compiles `(pattern, confidence, span_adjust)` declarations in order.
    ///
    /// # Errors
    ///
    /// Fails on the first declaration [`Rule::new`] rejects.
    pub fn new<S: AsRef<str>>(
        name: &'static str,
        declarations: impl IntoIterator<Item = (S, f32, (isize, isize))>,
    ) -> Result<Self> {
        let rules = declarations
            .into_iter()
            .map(|(pattern, confidence, adjust)| Rule::new(pattern.as_ref(), confidence, adjust))
            .collect::<Result<Vec<_>>>()?;
        debug!(name, rules = rules.len(), "compiled rule set");
        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The leftmost match of every rule that fires, in rule order.
    pub fn matches(&self, subject: &str) -> Vec<RuleMatch> {
        self.rules.iter().filter_map(|rule| rule.find(subject)).collect()
    }

    /// The match of the first rule that fires.
    pub fn first_match(&self, subject: &str) -> Option<RuleMatch> {
        let found = self.rules.iter().find_map(|rule| rule.find(subject));
        trace!(set = self.name, subject, found = found.is_some(), "applied rule set");
        found
    }
}

/// The episode, weak-episode and video rule sets, compiled together.
#[derive(Debug, Clone)]
pub struct RuleSets {
    pub episode: RuleSet,
    pub weak_episode: RuleSet,
    pub video: RuleSet,
}

impl RuleSets {
    /// Compiles every built-in rule set.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in rule fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            episode: RuleSet::episode()?,
            weak_episode: RuleSet::weak_episode()?,
            video: RuleSet::video()?,
        })
    }

    /// Reads season and episode numbers from `subject`.
    ///
    /// The first strong episode rule that fires wins; the weak bare-number
    /// rule is consulted only when none does. A weak number above 100 is
    /// split into season and episode and reported at
    /// [`WEAK_SEASON_SPLIT_CONFIDENCE`]; smaller ones keep
    /// [`WEAK_EPISODE_CONFIDENCE`].
    ///
    /// Years are not filtered out: `Movie.2009.avi` reads as `S20E09`.
    /// Callers that detect a year should discard a weak guess covering it.
    ///
    /// # Errors
    ///
    /// Returns `ScenetagError::InvalidNumeral` if a captured number cannot
    /// be parsed.
    ///
    /// # Examples
    /// ```
    /// use scenetag_core::RuleSets;
    ///
    /// let rules = RuleSets::new().unwrap();
    /// let (guess, _) = rules.detect_episode("Show.S02E13.720p").unwrap().unwrap();
    /// assert_eq!(guess.season, Some(2));
    /// assert_eq!(guess.episodes, vec![13]);
    /// ```
    pub fn detect_episode(&self, subject: &str) -> Result<Option<(EpisodeGuess, RuleMatch)>> {
        if let Some(found) = self.episode.first_match(subject) {
            let guess = EpisodeGuess {
                season: found.numeral("season")?,
                episodes: found.numerals("episodeNumber")?,
            };
            return Ok(Some((guess, found)));
        }

        let Some(mut found) = self.weak_episode.first_match(subject) else {
            return Ok(None);
        };
        let Some(number) = found.numeral("episodeNumber")? else {
            return Ok(None);
        };
        let Some(guess) = EpisodeGuess::from_weak_number(number) else {
            return Ok(None);
        };
        if guess.season.is_some() {
            found.confidence = WEAK_SEASON_SPLIT_CONFIDENCE;
        }
        Ok(Some((guess, found)))
    }
}

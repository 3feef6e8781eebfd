pub mod episode;
pub mod matches;
pub mod span;

pub use episode::EpisodeGuess;
pub use matches::{PropertyMatch, RuleMatch};
pub use span::Span;

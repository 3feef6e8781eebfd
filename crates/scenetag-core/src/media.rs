use std::fmt;

use serde::{Deserialize, Serialize};

pub const VIDEO_EXTENSIONS: &[&str] = &[
    "3g2", "3gp", "3gp2", "asf", "avi", "divx", "flv", "m4v", "mk2", "mka", "mkv", "mov", "mp4",
    "mp4a", "mpeg", "mpg", "ogg", "ogm", "ogv", "qt", "ra", "ram", "rm", "ts", "wav", "webm",
    "wma", "wmv",
];

pub const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "idx", "sub", "ssa"];

pub const INFO_EXTENSIONS: &[&str] = &["nfo"];

/// What a file is, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Video,
    Subtitle,
    Info,
}

impl FileKind {
    /// Classifies an extension given without its leading dot.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        let ext = extension.as_str();
        if VIDEO_EXTENSIONS.contains(&ext) {
            Some(Self::Video)
        } else if SUBTITLE_EXTENSIONS.contains(&ext) {
            Some(Self::Subtitle)
        } else if INFO_EXTENSIONS.contains(&ext) {
            Some(Self::Info)
        } else {
            None
        }
    }

    /// Classifies a file name or path by the text after its last dot.
    #[must_use]
    pub fn of_path(name: &str) -> Option<Self> {
        let (stem, extension) = name.rsplit_once('.')?;
        if stem.is_empty() || extension.contains(['/', '\\']) {
            return None;
        }
        Self::from_extension(extension)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Subtitle => write!(f, "subtitle"),
            Self::Info => write!(f, "info"),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScenetagError;

/// Metadata categories the property registry can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Release medium: DVD, BluRay, HDTV...
    Format,
    /// Stereoscopic release.
    #[serde(rename = "is3D")]
    Is3D,
    /// Vertical resolution class: 720p, 1080i, 4K...
    ScreenSize,
    VideoCodec,
    /// Decoding API tags such as DXVA.
    VideoApi,
    AudioCodec,
    AudioChannels,
    /// Episode shape, e.g. minisodes.
    EpisodeFormat,
    ReleaseGroup,
    /// Release groups whose names are ordinary words.
    WeakReleaseGroup,
    /// Release flags: PROPER, REPACK, LIMITED...
    Other,
}

impl Property {
    /// Every property, in registry declaration order.
    pub const ALL: [Property; 11] = [
        Property::Format,
        Property::Is3D,
        Property::ScreenSize,
        Property::VideoCodec,
        Property::VideoApi,
        Property::AudioCodec,
        Property::AudioChannels,
        Property::EpisodeFormat,
        Property::ReleaseGroup,
        Property::WeakReleaseGroup,
        Property::Other,
    ];

    /// The property's camelCase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Is3D => "is3D",
            Self::ScreenSize => "screenSize",
            Self::VideoCodec => "videoCodec",
            Self::VideoApi => "videoApi",
            Self::AudioCodec => "audioCodec",
            Self::AudioChannels => "audioChannels",
            Self::EpisodeFormat => "episodeFormat",
            Self::ReleaseGroup => "releaseGroup",
            Self::WeakReleaseGroup => "weakReleaseGroup",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = ScenetagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ScenetagError::UnknownProperty(s.to_string()))
    }
}

/// Normalized value of a detected property.
///
/// Most properties carry a display name; flag properties such as
/// [`Property::Is3D`] carry a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum CanonicalForm {
    Name(&'static str),
    Flag(bool),
}

impl CanonicalForm {
    /// Returns the display name, if this is a named form.
    #[must_use]
    pub fn as_name(self) -> Option<&'static str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Flag(_) => None,
        }
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl PartialEq<&str> for CanonicalForm {
    fn eq(&self, other: &&str) -> bool {
        self.as_name() == Some(*other)
    }
}

//! Declarative property tables.
//!
//! Patterns are regex sources with one extension: every `-` stands for an
//! optional separator (hyphen, dot, space, underscore, or nothing). Within a
//! canonical form, patterns are listed from most to least specific.

use super::property::{CanonicalForm, Property};

/// A canonical form and the patterns that detect it.
pub struct MultiEntry {
    pub property: Property,
    pub canonical: CanonicalForm,
    pub patterns: &'static [&'static str],
}

/// A property whose canonical forms double as their own patterns.
pub struct SingleEntry {
    pub property: Property,
    pub forms: &'static [&'static str],
}

const fn multi(
    property: Property,
    canonical: &'static str,
    patterns: &'static [&'static str],
) -> MultiEntry {
    MultiEntry {
        property,
        canonical: CanonicalForm::Name(canonical),
        patterns,
    }
}

pub const MULTI_VALUED: &[MultiEntry] = &[
    multi(Property::Format, "DVD", &["DVD", "DVD-Rip", "VIDEO-TS", "DVDivX"]),
    multi(Property::Format, "HD-DVD", &["HD-(?:DVD)?-Rip", "HD-DVD"]),
    multi(Property::Format, "BluRay", &["Blu-ray", "B[DR]Rip"]),
    multi(Property::Format, "HDTV", &["HD-TV"]),
    multi(Property::Format, "DVB", &["DVB-Rip", "DVB", "PD-TV"]),
    multi(Property::Format, "WEBRip", &["WEB-Rip"]),
    multi(Property::Format, "Screener", &["DVD-SCR", "Screener"]),
    multi(Property::Format, "VHS", &["VHS"]),
    multi(Property::Format, "WEB-DL", &["WEB-DL"]),
    MultiEntry {
        property: Property::Is3D,
        canonical: CanonicalForm::Flag(true),
        patterns: &["3D"],
    },
    multi(Property::ScreenSize, "360p", &[r"(?:\d{3,}(?:\\|/|x|\*))?360(?:i|p?x?)"]),
    multi(Property::ScreenSize, "368p", &[r"(?:\d{3,}(?:\\|/|x|\*))?368(?:i|p?x?)"]),
    multi(Property::ScreenSize, "480p", &[r"(?:\d{3,}(?:\\|/|x|\*))?480(?:i|p?x?)"]),
    multi(Property::ScreenSize, "576p", &[r"(?:\d{3,}(?:\\|/|x|\*))?576(?:i|p?x?)"]),
    multi(Property::ScreenSize, "720p", &[r"(?:\d{3,}(?:\\|/|x|\*))?720(?:i|p?x?)"]),
    multi(Property::ScreenSize, "1080i", &[r"(?:\d{3,}(?:\\|/|x|\*))?1080i"]),
    multi(Property::ScreenSize, "1080p", &[r"(?:\d{3,}(?:\\|/|x|\*))?1080(?:\z|[^i])p?x?"]),
    multi(Property::ScreenSize, "4K", &[r"(?:\d{3,}(?:\\|/|x|\*))?2160(?:\z|[^i])p?x?"]),
    multi(Property::VideoCodec, "XviD", &["Xvid"]),
    multi(Property::VideoCodec, "DivX", &["DVDivX", "DivX"]),
    multi(Property::VideoCodec, "h264", &["[hx]-264"]),
    multi(Property::VideoCodec, "Rv10", &["Rv10"]),
    multi(Property::VideoCodec, "Mpeg2", &["Mpeg2"]),
    multi(Property::VideoApi, "DXVA", &["DXVA"]),
    multi(Property::AudioCodec, "AC3", &["AC3"]),
    multi(Property::AudioCodec, "DTS", &["DTS"]),
    multi(Property::AudioCodec, "AAC", &["He-AAC", "AAC-He", "AAC"]),
    multi(Property::AudioChannels, "5.1", &[r"5\.1", "DD5[._ ]1", "5ch"]),
    multi(Property::EpisodeFormat, "Minisode", &["Minisodes?"]),
];

pub const SINGLE_VALUED: &[SingleEntry] = &[
    SingleEntry {
        property: Property::ReleaseGroup,
        forms: &[
            "ESiR", "WAF", "SEPTiC", r"\[XCT\]", "iNT", "PUKKA", "CHD", "ViTE", "TLF", "FLAiTE",
            "MDX", "GM4F", "DVL", "SVD", "iLUMiNADOS", "aXXo", "KLAXXON", "NoTV", "ZeaL", "LOL",
            "CtrlHD", "POD", "WiKi", "IMMERSE", "FQM", "2HD", "CTU", "HALCYON", "EbP", "SiTV",
            "HDBRiSe", "AlFleNi-TeaM", "EVOLVE", "0TV", "TLA", "NTB", "ASAP", "MOMENTUM", "FoV",
            "D-Z0N3", "TrollHD", "ECI",
        ],
    },
    SingleEntry {
        property: Property::WeakReleaseGroup,
        forms: &[
            "DEiTY", "FiNaLe", "UnSeeN", "KiNGS", "CLUE", "DIMENSION", "SAiNTS", "ARROW",
            "EuReKA", "SiNNERS", "DiRTY", "REWARD", "REPTiLE",
        ],
    },
    SingleEntry {
        property: Property::Other,
        // "complete" and "classic" also show up in titles
        forms: &[
            "PROPER", "REPACK", "LIMITED", "DualAudio", "Audiofixed", "R5", "complete", "classic",
            "ws",
        ],
    },
];

use super::RuleSet;
use crate::error::Result;
use crate::matcher::SEPARATOR_CLASS;
use crate::types::Span;

/// Hosting sites that tag their releases by name.
pub const KNOWN_WEBSITES: &[&str] = &[
    "tvu.org.ru",
    "emule-island.com",
    "UsaBit.com",
    "www.divx-overnet.com",
    "sharethefiles.com",
];

impl RuleSet {
    /// Disc numbering, editions, explicit resolutions, websites, bonus and
    /// film numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule fails to compile.
    pub fn video() -> Result<Self> {
        let sep = SEPARATOR_CLASS;
        RuleSet::new(
            "video",
            [
                (
                    "cd ?(?P<cdNumber>[0-9])(?: ?of ?(?P<cdNumberTotal>[0-9]))?".to_string(),
                    1.0,
                    (0, 0),
                ),
                ("(?P<cdNumberTotal>[1-9]) cds?".to_string(), 0.9, (0, 0)),
                (format!("edition{sep}(?P<edition>collector)"), 1.0, (0, 0)),
                (format!("(?P<edition>collector){sep}edition"), 1.0, (0, 0)),
                (format!("(?P<edition>special){sep}edition"), 1.0, (0, 0)),
                (format!("(?P<edition>criterion){sep}edition"), 1.0, (0, 0)),
                (format!("(?P<edition>director'?s?{sep}cut)"), 1.0, (0, 0)),
                (
                    "(?P<width>[0-9]{3,4})x(?P<height>[0-9]{3,4})".to_string(),
                    0.9,
                    (0, 0),
                ),
                (
                    r"(?P<website>www(?:\.[a-zA-Z0-9]+){2,3})".to_string(),
                    0.8,
                    (0, 0),
                ),
                ("x(?P<bonusNumber>[0-9]{1,2})".to_string(), 1.0, (0, 0)),
                ("f(?P<filmNumber>[0-9]{1,2})".to_string(), 1.0, (0, 0)),
            ],
        )
    }
}

/// Finds the first known website named in `subject`, ignoring ASCII case.
pub fn known_website(subject: &str) -> Option<(&'static str, Span)> {
    KNOWN_WEBSITES.iter().find_map(|site| {
        subject
            .char_indices()
            .map(|(index, _)| index)
            .find(|&index| {
                subject
                    .get(index..index + site.len())
                    .is_some_and(|candidate| candidate.eq_ignore_ascii_case(site))
            })
            .map(|index| (*site, Span::from_byte_range(subject, index..index + site.len())))
    })
}

//! The five workdays of a menu week.
//!
//! The source material is Danish, so the lexicon covers the full Danish
//! names plus the 3-letter abbreviations that show up in PDF filenames
//! ("menu-uge-8-man.pdf" and the like). Matching is case-insensitive and
//! word-bounded: "man" must not fire inside "mange".

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A workday, Monday through Friday. The menus never cover weekends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// All workdays in week order.
pub const ALL: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(mandag|tirsdag|onsdag|torsdag|fredag|man|tir|ons|tor|fre)\b").unwrap()
});

impl Weekday {
    /// Offset from Monday: Monday = 0 … Friday = 4.
    pub fn index(self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        ALL.get(index as usize).copied()
    }

    /// Danish display name, as it appears in the source material.
    pub fn danish(self) -> &'static str {
        match self {
            Weekday::Monday => "Mandag",
            Weekday::Tuesday => "Tirsdag",
            Weekday::Wednesday => "Onsdag",
            Weekday::Thursday => "Torsdag",
            Weekday::Friday => "Fredag",
        }
    }

    /// Parse a single lexicon token (full name or 3-letter abbreviation).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "mandag" | "man" => Some(Weekday::Monday),
            "tirsdag" | "tir" => Some(Weekday::Tuesday),
            "onsdag" | "ons" => Some(Weekday::Wednesday),
            "torsdag" | "tor" => Some(Weekday::Thursday),
            "fredag" | "fre" => Some(Weekday::Friday),
            _ => None,
        }
    }
}

/// The shared weekday-token pattern used by the locator and the cleaner.
pub(crate) fn token_pattern() -> &'static Regex {
    &TOKEN
}

/// Every weekday token in `text` with its byte range, in order.
pub(crate) fn token_matches(text: &str) -> Vec<(usize, usize, Weekday)> {
    token_pattern()
        .find_iter(text)
        .filter_map(|m| Weekday::from_token(m.as_str()).map(|day| (m.start(), m.end(), day)))
        .collect()
}

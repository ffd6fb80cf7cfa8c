//! Final menu entries: assembly, deduplication and ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::extract::MenuText;

/// A finalized, date-resolved menu item ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub date: NaiveDate,
    /// Single-line, length-capped menu title.
    pub title: String,
    /// Full cleaned menu text, with the source link appended when known.
    pub description: String,
    pub source_url: Option<String>,
}

impl MenuEntry {
    pub fn new(date: NaiveDate, text: &MenuText, source_url: Option<&str>) -> Self {
        let description = match source_url {
            Some(url) => format!("{}\n\nKilde: {}", text.body, url),
            None => text.body.clone(),
        };
        MenuEntry {
            date,
            title: text.title.clone(),
            description,
            source_url: source_url.map(str::to_string),
        }
    }
}

/// Collapse to one entry per date and sort ascending.
///
/// When two entries land on the same date (duplicated DOM sections, or a
/// PDF and a page block describing the same day), the one with the longer
/// description survives, as a proxy for the most complete extraction. It
/// is a heuristic, not a correctness guarantee. Equal lengths keep the
/// earlier entry, so document order breaks ties deterministically.
pub fn dedup_and_sort(entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    let mut by_date: Vec<MenuEntry> = Vec::new();

    for entry in entries {
        match by_date.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => {
                if entry.description.chars().count() > existing.description.chars().count() {
                    *existing = entry;
                }
            }
            None => by_date.push(entry),
        }
    }

    by_date.sort_by_key(|e| e.date);
    by_date
}

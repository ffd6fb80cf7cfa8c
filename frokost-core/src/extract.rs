//! Menu text extraction and cleanup.
//!
//! PDF text keeps its headers, so a day's section is sliced out between
//! weekday tokens before cleaning. Cleanup strips every weekday and
//! "uge N" token (documents repeat the header halfway down) and collapses
//! the newline soup that PDF extraction produces.

use std::sync::LazyLock;

use regex::Regex;

use crate::candidate::Candidate;
use crate::locate::WeekAnchor;
use crate::weekday::{self, Weekday};

/// Extractions shorter than this are junk (a stray heading, an empty day
/// cell) and must not become an entry.
const MIN_CONTENT_CHARS: usize = 8;

/// Title cap, in characters.
const TITLE_MAX_CHARS: usize = 60;

/// "uge" plus any week number, for cleanup.
static WEEK_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\buge[\s._-]*\d{1,2}\b").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Labels that introduce the main dish of a day's menu.
static MAIN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:varm ret|dagens ret|hovedret)\b").unwrap());

/// Any recognized section label, for finding where a section ends.
static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:varm ret|dagens ret|hovedret|vegetar|salat|suppe)\b").unwrap()
});

/// Cleaned menu text for one (candidate, anchor) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuText {
    /// Capped single-line title.
    pub title: String,
    /// Full cleaned text.
    pub body: String,
}

/// Extract the cleaned menu text for an anchor, or `None` when what
/// remains after cleanup is too short to be a menu.
pub fn menu_text(candidate: &Candidate, anchor: &WeekAnchor) -> Option<MenuText> {
    let section = slice_day_section(&candidate.raw_text, anchor.weekday);
    let body = clean(section);
    if body.chars().count() < MIN_CONTENT_CHARS {
        return None;
    }
    let title = cap_title(sharpen(&body));
    Some(MenuText { title, body })
}

/// Whether a block still has text once weekday and week tokens are gone.
pub(crate) fn has_menu_content(text: &str) -> bool {
    clean(text).chars().count() >= MIN_CONTENT_CHARS
}

/// The slice of `raw` belonging to one weekday: from the end of its first
/// token to the first following token of a different weekday. Text that
/// never names the weekday (URL- or label-anchored candidates) is used
/// whole.
fn slice_day_section(raw: &str, day: Weekday) -> &str {
    let matches = weekday::token_matches(raw);
    let Some(pos) = matches.iter().position(|(_, _, d)| *d == day) else {
        return raw;
    };

    let start = matches[pos].1;
    let end = matches[pos + 1..]
        .iter()
        .find(|(_, _, d)| *d != day)
        .map(|(s, _, _)| *s)
        .unwrap_or(raw.len());

    &raw[start..end]
}

/// Strip weekday and week tokens, collapse all whitespace runs to single
/// spaces, trim the leftover separators a removed heading leaves behind.
pub fn clean(text: &str) -> String {
    let no_days = weekday::token_pattern().replace_all(text, " ");
    let no_weeks = WEEK_TOKEN.replace_all(&no_days, " ");
    let collapsed = WHITESPACE.replace_all(&no_weeks, " ");
    collapsed
        .trim()
        .trim_start_matches([':', '-', ','])
        .trim()
        .to_string()
}

/// Prefer the main-dish section when the text carries section labels; the
/// whole block otherwise. Gives titles like "Boller i karry" instead of
/// "Varm ret Boller i karry Salat Grøn salat ...".
fn sharpen(body: &str) -> &str {
    let Some(m) = MAIN_MARKER.find(body) else {
        return body;
    };
    let rest = &body[m.end()..];
    let end = SECTION_MARKER
        .find(rest)
        .map(|next| next.start())
        .unwrap_or(rest.len());
    let section = rest[..end].trim().trim_start_matches([':', '-']).trim();
    if section.chars().count() >= MIN_CONTENT_CHARS {
        section
    } else {
        body
    }
}

fn cap_title(text: &str) -> String {
    if text.chars().count() <= TITLE_MAX_CHARS {
        return text.to_string();
    }
    let mut title: String = text.chars().take(TITLE_MAX_CHARS).collect();
    title.truncate(title.trim_end().len());
    title.push('…');
    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::{AnchorSource, WeekAnchor};

    fn anchor(day: Weekday) -> WeekAnchor {
        WeekAnchor {
            week: 8,
            weekday: day,
            found_in: AnchorSource::BodyTextMatch,
        }
    }

    #[test]
    fn test_clean_removes_tokens_and_newlines() {
        assert_eq!(
            clean("Mandag\nUge 8\nFiskefilet\n\nmed citron"),
            "Fiskefilet med citron"
        );
    }

    #[test]
    fn test_clean_removes_repeated_headers() {
        let cleaned = clean("Uge 8 Mandag suppe med brød uge 8 mandag og smør");
        assert!(!cleaned.to_lowercase().contains("uge"));
        assert!(!cleaned.to_lowercase().contains("mandag"));
        assert_eq!(cleaned, "suppe med brød og smør");
    }

    #[test]
    fn test_clean_strips_heading_separator() {
        assert_eq!(clean("Mandag: Fiskefilet med citron"), "Fiskefilet med citron");
    }

    #[test]
    fn test_day_section_sliced_between_weekday_tokens() {
        let candidate = Candidate::pdf_document(
            "Uge 8\nMandag\nFiskefilet med citron\nTirsdag\nBoller i karry",
            "https://example.dk/menu.pdf",
            None,
        );
        let text = menu_text(&candidate, &anchor(Weekday::Monday)).unwrap();
        assert_eq!(text.body, "Fiskefilet med citron");

        let text = menu_text(&candidate, &anchor(Weekday::Tuesday)).unwrap();
        assert_eq!(text.body, "Boller i karry");
    }

    #[test]
    fn test_repeated_weekday_token_stays_in_own_section() {
        // The slice ends at the next *different* weekday, not at a repeat
        let candidate = Candidate::html_block("Uge 8 Mandag suppe, mandag er suppedag Tirsdag pasta");
        let text = menu_text(&candidate, &anchor(Weekday::Monday)).unwrap();
        assert_eq!(text.body, "suppe, er suppedag");
    }

    #[test]
    fn test_near_empty_extraction_fails() {
        let candidate = Candidate::html_block("Uge 8 Mandag lukket");
        assert_eq!(menu_text(&candidate, &anchor(Weekday::Monday)), None);
    }

    #[test]
    fn test_title_capped_with_ellipsis() {
        let long = "a".repeat(80);
        let candidate = Candidate::html_block(format!("Uge 8 Mandag {long}"));
        let text = menu_text(&candidate, &anchor(Weekday::Monday)).unwrap();
        assert_eq!(text.title.chars().count(), TITLE_MAX_CHARS + 1);
        assert!(text.title.ends_with('…'));
        assert_eq!(text.body.chars().count(), 80, "body is never capped");
    }

    #[test]
    fn test_short_title_not_touched() {
        let candidate = Candidate::html_block("Uge 8 Mandag Fiskefilet med citron");
        let text = menu_text(&candidate, &anchor(Weekday::Monday)).unwrap();
        assert_eq!(text.title, "Fiskefilet med citron");
    }

    #[test]
    fn test_main_marker_sharpens_title() {
        let candidate = Candidate::html_block(
            "Uge 8 Mandag Varm ret: Boller i karry med løse ris Salat: grøn salat med dressing",
        );
        let text = menu_text(&candidate, &anchor(Weekday::Monday)).unwrap();
        assert_eq!(text.title, "Boller i karry med løse ris");
        assert!(
            text.body.contains("grøn salat"),
            "description keeps the whole block"
        );
    }

    #[test]
    fn test_marker_with_tiny_section_falls_back_to_whole_block() {
        let candidate = Candidate::html_block("Uge 8 Mandag Varm ret: wok Salat: grøn salat i skål");
        let text = menu_text(&candidate, &anchor(Weekday::Monday)).unwrap();
        assert!(text.title.starts_with("Varm ret"));
    }
}

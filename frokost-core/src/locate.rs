//! Week/day location within candidates.
//!
//! The menu page and its PDFs label weeks and weekdays inconsistently:
//! sometimes in the PDF filename ("Menu-uge-8.pdf"), sometimes in the link
//! text, sometimes only in the document body. The locator checks those
//! places in a fixed precedence order and never merges evidence across
//! them. A candidate where either half is missing yields no anchor at
//! all; guessing a week silently mislabels someone's calendar.

use std::sync::LazyLock;

use regex::Regex;

use crate::candidate::Candidate;
use crate::weekday::{self, Weekday};

/// Which part of a candidate produced an anchor, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnchorSource {
    UrlMatch,
    LabelMatch,
    BodyTextMatch,
}

/// A located (ISO week, weekday) pair within a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAnchor {
    /// ISO week number. At least 1; the source data is not trusted enough
    /// to enforce an upper bound.
    pub week: u32,
    pub weekday: Weekday,
    pub found_in: AnchorSource,
}

/// "uge" followed by digits within the same token: "Uge 8", "uge-8", "uge8".
static WEEK_AFTER_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\buge[\s._-]*(\d{1,2})").unwrap());

/// Fallback with the digits first: "8. uge".
static WEEK_BEFORE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*\.?\s*uge\b").unwrap());

/// Locate every (week, weekday) anchor in a candidate.
///
/// Weekday evidence comes from the first source category (URL filename,
/// label, body text) that contains any weekday token; every distinct
/// weekday in that category becomes an anchor. The week number is searched
/// in the same order and the first match anywhere wins. Partial evidence
/// (weekday without week, or week without weekday) yields nothing.
pub fn locate_anchors(candidate: &Candidate) -> Vec<WeekAnchor> {
    let url_name = candidate.url.as_deref().map(decoded_filename);

    let Some(week) = find_week(
        url_name.as_deref(),
        candidate.label.as_deref(),
        &candidate.raw_text,
    ) else {
        return Vec::new();
    };

    let Some((weekdays, found_in)) = find_weekdays(
        url_name.as_deref(),
        candidate.label.as_deref(),
        &candidate.raw_text,
    ) else {
        return Vec::new();
    };

    weekdays
        .into_iter()
        .map(|weekday| WeekAnchor {
            week,
            weekday,
            found_in,
        })
        .collect()
}

/// First plausible week number across URL filename, label, body, in that
/// order; keyword-first pattern before the digits-first fallback.
fn find_week(url_name: Option<&str>, label: Option<&str>, body: &str) -> Option<u32> {
    [url_name, label, Some(body)]
        .into_iter()
        .flatten()
        .find_map(match_week)
}

/// Match a week number in one piece of text. Week 0 is rejected as
/// implausible.
pub(crate) fn match_week(text: &str) -> Option<u32> {
    for pattern in [&WEEK_AFTER_KEYWORD, &WEEK_BEFORE_KEYWORD] {
        if let Some(caps) = pattern.captures(text) {
            let week: u32 = caps[1].parse().ok()?;
            if week >= 1 {
                return Some(week);
            }
        }
    }
    None
}

/// Distinct weekdays from the first source category containing any,
/// in order of first appearance.
fn find_weekdays(
    url_name: Option<&str>,
    label: Option<&str>,
    body: &str,
) -> Option<(Vec<Weekday>, AnchorSource)> {
    let sources = [
        (url_name, AnchorSource::UrlMatch),
        (label, AnchorSource::LabelMatch),
        (Some(body), AnchorSource::BodyTextMatch),
    ];

    for (text, found_in) in sources {
        let Some(text) = text else { continue };
        let days = distinct_weekdays(text);
        if !days.is_empty() {
            return Some((days, found_in));
        }
    }
    None
}

fn distinct_weekdays(text: &str) -> Vec<Weekday> {
    let mut seen = Vec::new();
    for (_, _, day) in weekday::token_matches(text) {
        if !seen.contains(&day) {
            seen.push(day);
        }
    }
    seen
}

/// Filename portion of a link, percent-decoded. Falls back to the raw
/// trailing path segment when the URL does not parse.
fn decoded_filename(link: &str) -> String {
    let name = url::Url::parse(link)
        .ok()
        .and_then(|u| {
            u.path_segments()?
                .rev()
                .find(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| link.rsplit('/').next().unwrap_or(link).to_string());

    urlencoding::decode(&name)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(name)
}

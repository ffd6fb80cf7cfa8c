//! ICS file generation.

use chrono::{Datelike, Duration, NaiveTime};
use icalendar::{Calendar, Component, EventLike};

use crate::entries::MenuEntry;
use crate::error::{FrokostError, FrokostResult};

/// Presentation details for emitted events.
#[derive(Debug, Clone)]
pub struct IcsOptions {
    /// Local wall-clock start time of each lunch event.
    pub start_time: NaiveTime,
    /// Event length in minutes; lunch slots run 30-60 minutes.
    pub duration_minutes: i64,
    /// Prefixed to every SUMMARY so the calendar reads "Noon: Fiskefilet".
    pub summary_prefix: String,
}

impl Default for IcsOptions {
    fn default() -> Self {
        IcsOptions {
            start_time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            duration_minutes: 60,
            summary_prefix: "Noon: ".to_string(),
        }
    }
}

/// Generate .ics content for the scraped menu entries.
///
/// Zero entries still produce a structurally valid, empty calendar;
/// downstream consumers must never find a missing or truncated file.
pub fn generate_ics(entries: &[MenuEntry], opts: &IcsOptions) -> FrokostResult<String> {
    let mut cal = Calendar::new();
    cal.name("Frokost");

    for entry in entries {
        validate_entry(entry)?;

        let start = entry.date.and_time(opts.start_time);
        let end = start + Duration::minutes(opts.duration_minutes);

        let mut event = icalendar::Event::new();
        // Stable per-date UID, so re-scraping updates events in place
        event.uid(&format!("frokost-{}@nooncph.dk", entry.date));
        event.summary(&format!("{}{}", opts.summary_prefix, entry.title));

        // DTSTAMP - required by RFC 5545
        let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        event.add_property("DTSTAMP", &dtstamp);

        // Floating local times (no Z, no TZID): lunch is at 11:30 on the
        // restaurant's clock wherever the calendar is viewed
        event.add_property("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());
        event.add_property("DTEND", end.format("%Y%m%dT%H%M%S").to_string());

        event.description(&entry.description);

        if let Some(ref url) = entry.source_url {
            event.add_property("URL", url);
        }

        cal.push(event.done());
    }

    let cal = cal.done();

    // Post-process to remove unnecessary bloat from the icalendar crate's output
    Ok(strip_ics_bloat(&cal.to_string()))
}

/// Reject entries the encoder would serialize into nonsense, naming the
/// entry and field so a bad scrape is diagnosable.
fn validate_entry(entry: &MenuEntry) -> FrokostResult<()> {
    if entry.title.trim().is_empty() {
        return Err(FrokostError::InvalidEntry {
            date: entry.date,
            field: "title",
            reason: "is empty".to_string(),
        });
    }
    if entry.title.contains('\n') {
        return Err(FrokostError::InvalidEntry {
            date: entry.date,
            field: "title",
            reason: "contains a newline".to_string(),
        });
    }

    // A scrape that resolves outside this window got its week or year wrong
    let year = entry.date.year();
    if !(2000..=2100).contains(&year) {
        return Err(FrokostError::InvalidEntry {
            date: entry.date,
            field: "date",
            reason: format!("implausible year {year}"),
        });
    }

    Ok(())
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:-//frokost//DA\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

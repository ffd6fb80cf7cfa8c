//! Ordered scan of the rendered page's text blocks.
//!
//! On the HTML path the week heading ("Uge 8") and the weekday sections
//! arrive as separate blocks, so week context has to come from earlier in
//! the document. The scan is an explicit fold over the blocks in document
//! order, carrying the most recent week heading and, when a bare weekday
//! heading precedes its menu text, the pending weekday. Each hit becomes a
//! self-contained [`Candidate`] with the accumulated evidence stitched
//! back into its text, so the locator re-derives the same anchor without
//! any shared scan state.

use crate::candidate::Candidate;
use crate::extract;
use crate::locate;
use crate::weekday::{self, Weekday};

/// Fold state for one pass over the page blocks.
#[derive(Debug, Default)]
struct ScanState {
    /// Week number from the most recent week heading.
    current_week: Option<u32>,
    /// A bare weekday heading waiting for its menu text block.
    pending_day: Option<Weekday>,
}

/// Scan the page's text blocks in document order into candidates.
///
/// A block that matches a week pattern updates the week accumulator; a
/// block with weekday tokens and menu text becomes a candidate; a block
/// that is only a weekday heading defers to the next block for its text.
/// Blocks seen before any week heading contribute nothing.
pub fn scan_blocks(blocks: &[String]) -> Vec<Candidate> {
    let mut state = ScanState::default();
    let mut candidates = Vec::new();

    for block in blocks {
        if let Some(week) = locate::match_week(block) {
            state.current_week = Some(week);
            // A new week heading starts a new section; a weekday heading
            // from the previous section must not claim this section's text.
            state.pending_day = None;
        }

        let Some(week) = state.current_week else {
            continue;
        };

        let days: Vec<Weekday> = weekday::token_matches(block)
            .iter()
            .map(|(_, _, day)| *day)
            .collect();
        let has_content = extract::has_menu_content(block);

        match (days.as_slice(), has_content) {
            // Weekday heading with its menu text in the same block
            ([_, ..], true) => {
                state.pending_day = None;
                candidates.push(stitched(week, None, block));
            }
            // Bare weekday heading; remember it for the next block
            ([day], false) => {
                state.pending_day = Some(*day);
            }
            // Menu text following a bare weekday heading
            ([], true) => {
                if let Some(day) = state.pending_day.take() {
                    candidates.push(stitched(week, Some(day), block));
                }
            }
            _ => {}
        }
    }

    candidates
}

/// Build a self-contained candidate: prefix the accumulated week (and the
/// pending weekday, when the block itself has none) so the locator finds
/// both in the body text.
fn stitched(week: u32, day: Option<Weekday>, block: &str) -> Candidate {
    let text = match day {
        Some(day) => format!("Uge {week}\n{}\n{block}", day.danish()),
        None if locate::match_week(block).is_some() => block.to_string(),
        None => format!("Uge {week}\n{block}"),
    };
    Candidate::html_block(text)
}

//! The full candidate-to-entries pass.

use crate::candidate::Candidate;
use crate::entries::{self, MenuEntry};
use crate::extract;
use crate::locate;
use crate::resolve;

/// Run the extraction pass over a fully gathered candidate set.
///
/// One deterministic, single-threaded sweep: locate anchors, extract and
/// clean the text, resolve dates, then deduplicate and sort. Candidates
/// that yield no anchor, unusable text or an unresolvable date simply
/// contribute nothing; the result is empty rather than an error when
/// nothing survives. Must only be called once gathering is complete:
/// deduplication needs the whole set in view.
pub fn run_pipeline(candidates: &[Candidate], reference_year: i32) -> Vec<MenuEntry> {
    let mut collected = Vec::new();

    for candidate in candidates {
        for anchor in locate::locate_anchors(candidate) {
            let Some(text) = extract::menu_text(candidate, &anchor) else {
                continue;
            };
            let Some(date) = resolve::resolve_date(reference_year, anchor.week, anchor.weekday)
            else {
                continue;
            };
            collected.push(MenuEntry::new(date, &text, candidate.url.as_deref()));
        }
    }

    entries::dedup_and_sort(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const PDF_TEXT: &str = "Ugens menu - Uge 8\n\
        Mandag\nFiskefilet med citron og remoulade\n\
        Tirsdag\nBoller i karry med løse ris\n\
        Onsdag\nPasta med svampe og parmesan\n\
        Torsdag\nStegt flæsk med persillesovs\n\
        Fredag\nBurger med bøf og syltede agurker";

    #[test]
    fn test_pdf_candidate_yields_all_five_days() {
        let candidates = vec![Candidate::pdf_document(
            PDF_TEXT,
            "https://example.dk/menu-uge-8.pdf",
            Some("Menu uge 8".to_string()),
        )];
        let entries = run_pipeline(&candidates, 2026);

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
        assert_eq!(entries[4].date, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
        assert_eq!(entries[0].title, "Fiskefilet med citron og remoulade");
        assert!(
            entries[0]
                .description
                .ends_with("Kilde: https://example.dk/menu-uge-8.pdf")
        );
    }

    #[test]
    fn test_html_and_pdf_collide_on_date_longer_wins() {
        let candidates = vec![
            Candidate::html_block("Uge 8 Mandag: Fiskefilet"),
            Candidate::pdf_document(
                "Uge 8 Mandag Fiskefilet med citron, remoulade og rugbrød",
                "https://example.dk/menu-uge-8.pdf",
                None,
            ),
        ];
        let entries = run_pipeline(&candidates, 2026);

        assert_eq!(entries.len(), 1);
        assert!(entries[0].description.contains("rugbrød"));
        assert_eq!(
            entries[0].source_url.as_deref(),
            Some("https://example.dk/menu-uge-8.pdf")
        );
    }

    #[test]
    fn test_anchorless_candidates_contribute_nothing() {
        let candidates = vec![
            Candidate::html_block("Velkommen til kantinen"),
            Candidate::html_block("Mandag: fisk uden ugenummer her"),
            Candidate::pdf_document("helt tom", "https://example.dk/andet.pdf", None),
        ];
        assert!(run_pipeline(&candidates, 2026).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(run_pipeline(&[], 2026).is_empty());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let candidates = vec![
            Candidate::pdf_document(PDF_TEXT, "https://example.dk/menu-uge-8.pdf", None),
            Candidate::html_block("Uge 8 Onsdag: Pasta med ekstra meget parmesan og persille"),
        ];
        let first = run_pipeline(&candidates, 2026);
        let second = run_pipeline(&candidates, 2026);
        assert_eq!(first, second);
    }
}

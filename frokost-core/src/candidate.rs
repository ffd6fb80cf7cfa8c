//! Raw scrape material handed to the pipeline.

use serde::{Deserialize, Serialize};

/// Where a candidate's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// A text block from the rendered menu page.
    HtmlBlock,
    /// Text extracted from a linked weekly menu PDF.
    PdfDocument,
}

/// One unit of raw material to examine for menu content.
///
/// Candidates are created fresh per scrape run by the gatherer and are
/// read-only from there on. A candidate may yield zero, one, or several
/// anchors; a PDF whose body lists all five weekdays yields five.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub source: SourceKind,
    pub raw_text: String,
    /// Origin link (present for PDF documents).
    pub url: Option<String>,
    /// Anchor text of the origin link (present for PDF documents).
    pub label: Option<String>,
}

impl Candidate {
    pub fn html_block(text: impl Into<String>) -> Self {
        Candidate {
            source: SourceKind::HtmlBlock,
            raw_text: text.into(),
            url: None,
            label: None,
        }
    }

    pub fn pdf_document(
        text: impl Into<String>,
        url: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        Candidate {
            source: SourceKind::PdfDocument,
            raw_text: text.into(),
            url: Some(url.into()),
            label,
        }
    }
}

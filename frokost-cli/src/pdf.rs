//! PDF text extraction.

use anyhow::{Context, Result};

/// Extract plain text from PDF bytes.
///
/// Image-only menus extract to nothing usable; that is reported as an
/// error so the caller drops the candidate and the run continues.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).context("Failed to extract text from PDF")?;

    if text.trim().is_empty() {
        anyhow::bail!("PDF contains no extractable text");
    }

    Ok(text)
}

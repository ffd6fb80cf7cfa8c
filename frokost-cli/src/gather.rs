//! Candidate gathering from the rendered menu page.
//!
//! The page structure has changed under this scraper more than once:
//! sometimes the menus are text blocks on the page, sometimes the page
//! only links weekly PDFs. Both paths are gathered and the core pipeline's
//! deduplication sorts out the overlap.

use anyhow::Result;
use owo_colors::OwoColorize;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use frokost_core::{Candidate, scan};

use crate::{fetch, pdf};

/// A link to a weekly menu PDF found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLink {
    pub url: String,
    pub label: String,
}

/// Gather the complete candidate set for one scrape run.
///
/// A PDF that fails to download or extract is skipped with a warning; a
/// bad week should still produce whatever the other sources yield.
pub async fn candidates(
    client: &Client,
    page_url: &Url,
    use_html: bool,
    use_pdf: bool,
) -> Result<Vec<Candidate>> {
    let html = fetch::fetch_page(client, page_url.as_str()).await?;

    // scraper's DOM is not Send; pull out what we need before any await
    let (blocks, links) = {
        let document = Html::parse_document(&html);
        (text_blocks(&document), pdf_links(&document, page_url))
    };

    let mut candidates = Vec::new();

    if use_html {
        candidates.extend(scan::scan_blocks(&blocks));
    }

    if use_pdf {
        for link in links {
            match pdf_candidate(client, &link).await {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => eprintln!(
                    "   {} {}",
                    "skipped".yellow(),
                    format!("{}: {e:#}", link.url).dimmed()
                ),
            }
        }
    }

    Ok(candidates)
}

async fn pdf_candidate(client: &Client, link: &PdfLink) -> Result<Candidate> {
    let bytes = fetch::fetch_bytes(client, &link.url).await?;
    let text = pdf::extract_text(&bytes)?;
    let label = (!link.label.is_empty()).then(|| link.label.clone());
    Ok(Candidate::pdf_document(text, link.url.clone(), label))
}

/// Links to weekly menu PDFs: href ends in .pdf and the label or filename
/// mentions the week or the menu.
pub fn pdf_links(document: &Html, base: &Url) -> Vec<PdfLink> {
    let selector = Selector::parse("a[href]").unwrap();
    let mut links: Vec<PdfLink> = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        if !resolved.path().to_lowercase().ends_with(".pdf") {
            continue;
        }

        let label = element.text().collect::<String>().trim().to_string();
        let haystack = format!("{} {}", label, resolved.path()).to_lowercase();
        if !haystack.contains("uge") && !haystack.contains("menu") {
            continue;
        }

        let url = resolved.to_string();
        if !links.iter().any(|l| l.url == url) {
            links.push(PdfLink { url, label });
        }
    }

    links
}

/// The page's text blocks in document order, for the core scan fold.
///
/// Obvious text containers first; pages that render everything inside
/// anonymous divs fall back to the raw body text split into lines.
pub fn text_blocks(document: &Html) -> Vec<String> {
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6, p, li, td").unwrap();

    let mut blocks: Vec<String> = document
        .select(&selector)
        .filter_map(|element| {
            let text = element.text().collect::<String>();
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            (!text.is_empty()).then_some(text)
        })
        .collect();

    if blocks.is_empty() {
        blocks = document
            .root_element()
            .text()
            .collect::<String>()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    fn base() -> Url {
        Url::parse("https://www.nooncph.dk/ugens-menuer").unwrap()
    }

    #[test]
    fn test_pdf_links_filter_on_label_or_filename() {
        let document = page(
            r#"
            <a href="/files/menu-uge-8.pdf">Se menuen</a>
            <a href="/files/vilkaar.pdf">Handelsbetingelser</a>
            <a href="/files/andet.pdf">Uge 9</a>
            <a href="/om-os">Om os</a>
            "#,
        );
        let links = pdf_links(&document, &base());
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://www.nooncph.dk/files/menu-uge-8.pdf");
        assert_eq!(links[1].label, "Uge 9");
    }

    #[test]
    fn test_pdf_links_deduplicated_and_resolved() {
        let document = page(
            r#"
            <a href="/files/menu-uge-8.pdf">Menu</a>
            <a href="https://www.nooncph.dk/files/menu-uge-8.pdf">Menu igen</a>
            "#,
        );
        let links = pdf_links(&document, &base());
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_text_blocks_in_document_order() {
        let document = page("<h2>Uge 8</h2><p>Mandag: Fiskefilet med citron</p><p>Tirsdag: Suppe</p>");
        let blocks = text_blocks(&document);
        assert_eq!(
            blocks,
            vec![
                "Uge 8".to_string(),
                "Mandag: Fiskefilet med citron".to_string(),
                "Tirsdag: Suppe".to_string(),
            ]
        );
    }

    #[test]
    fn test_text_blocks_fall_back_to_body_lines() {
        let document = page("<div>Uge 8\nMandag: Fiskefilet</div>");
        let blocks = text_blocks(&document);
        assert_eq!(
            blocks,
            vec!["Uge 8".to_string(), "Mandag: Fiskefilet".to_string()]
        );
    }

    #[test]
    fn test_text_blocks_flatten_inline_markup() {
        let document = page("<p>Mandag: <strong>Fiskefilet</strong> med citron</p>");
        let blocks = text_blocks(&document);
        assert_eq!(blocks, vec!["Mandag: Fiskefilet med citron".to_string()]);
    }
}

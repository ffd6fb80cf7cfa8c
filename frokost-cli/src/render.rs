//! Terminal rendering for menu entries.

use frokost_core::MenuEntry;
use owo_colors::OwoColorize;

/// One block per day: a bold date line with the title, then the menu text.
pub fn render_entry(entry: &MenuEntry) -> String {
    let date = entry.date.format("%a %d/%m").to_string();
    let menu = entry
        .description
        .lines()
        .next()
        .unwrap_or_default()
        .dimmed()
        .to_string();

    format!(
        "{}  {}\n   {}",
        date.bold(),
        entry.title.green(),
        menu
    )
}

pub fn render_empty_warning() -> String {
    "No menu entries found; the page layout may have changed again"
        .yellow()
        .to_string()
}

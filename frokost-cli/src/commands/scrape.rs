use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use frokost_core::{ics, pipeline};

use super::{create_spinner, resolve_page_url, resolve_reference_year};
use crate::config::Config;
use crate::{fetch, gather, render};

pub async fn run(
    config: &Config,
    out: Option<PathBuf>,
    year: Option<i32>,
    url: Option<String>,
    html_only: bool,
    pdf_only: bool,
) -> Result<()> {
    let page_url = resolve_page_url(config, url)?;
    let reference_year = resolve_reference_year(year);
    let out = out.unwrap_or_else(|| config.output.clone());
    let opts = config.ics_options()?;

    let client = fetch::client()?;
    let spinner = create_spinner(format!("Fetching {page_url}"));
    let candidates = gather::candidates(&client, &page_url, !pdf_only, !html_only).await;
    spinner.finish_and_clear();
    let candidates = candidates?;

    let entries = pipeline::run_pipeline(&candidates, reference_year);

    if entries.is_empty() {
        eprintln!("{}", render::render_empty_warning());
    } else {
        for entry in &entries {
            println!("{}", render::render_entry(entry));
        }
    }

    let ics = ics::generate_ics(&entries, &opts)?;
    std::fs::write(&out, &ics).with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "\n{}",
        format!("Wrote {} events to {}", entries.len(), out.display()).green()
    );

    Ok(())
}

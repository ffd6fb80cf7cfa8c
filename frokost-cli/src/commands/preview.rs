use anyhow::Result;

use frokost_core::pipeline;

use super::{create_spinner, resolve_page_url, resolve_reference_year};
use crate::config::Config;
use crate::{fetch, gather, render};

pub async fn run(
    config: &Config,
    year: Option<i32>,
    url: Option<String>,
    json: bool,
) -> Result<()> {
    let page_url = resolve_page_url(config, url)?;
    let reference_year = resolve_reference_year(year);

    let client = fetch::client()?;
    let spinner = create_spinner(format!("Fetching {page_url}"));
    let candidates = gather::candidates(&client, &page_url, true, true).await;
    spinner.finish_and_clear();
    let candidates = candidates?;

    let entries = pipeline::run_pipeline(&candidates, reference_year);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        eprintln!("{}", render::render_empty_warning());
        return Ok(());
    }

    for entry in &entries {
        println!("{}\n", render::render_entry(entry));
    }

    Ok(())
}

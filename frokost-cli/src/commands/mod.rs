pub mod preview;
pub mod scrape;

use anyhow::{Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use frokost_core::resolve;

use crate::config::Config;

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// The page URL from flag or config.
pub fn resolve_page_url(config: &Config, flag: Option<String>) -> Result<Url> {
    let raw = flag.unwrap_or_else(|| config.menu_url.clone());
    Url::parse(&raw).with_context(|| format!("Invalid menu URL '{raw}'"))
}

/// The reference year from flag, or the ISO year of today.
pub fn resolve_reference_year(flag: Option<i32>) -> i32 {
    flag.unwrap_or_else(|| resolve::default_reference_year(Local::now().date_naive()))
}

//! Global frokost configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use frokost_core::ics::IcsOptions;
use serde::Deserialize;

/// The menu page scraped when nothing else is configured.
pub const DEFAULT_MENU_URL: &str = "https://www.nooncph.dk/ugens-menuer";

fn default_menu_url() -> String {
    DEFAULT_MENU_URL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("frokost.ics")
}

fn default_summary_prefix() -> String {
    "Noon: ".to_string()
}

fn default_start_time() -> String {
    "11:30".to_string()
}

fn default_duration_minutes() -> i64 {
    60
}

/// Configuration at ~/.config/frokost/config.toml.
///
/// Every field is optional; a missing file means all defaults, so the tool
/// works out of the box.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_menu_url")]
    pub menu_url: String,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_summary_prefix")]
    pub summary_prefix: String,

    /// Local start time of the lunch events, "HH:MM".
    #[serde(default = "default_start_time")]
    pub start_time: String,

    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            menu_url: default_menu_url(),
            output: default_output(),
            summary_prefix: default_summary_prefix(),
            start_time: default_start_time(),
            duration_minutes: default_duration_minutes(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("frokost").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Config::default());
        };
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// The configured presentation fields as ICS options.
    pub fn ics_options(&self) -> Result<IcsOptions> {
        let start_time = NaiveTime::parse_from_str(&self.start_time, "%H:%M").with_context(|| {
            format!("Invalid start_time '{}' (expected HH:MM)", self.start_time)
        })?;

        if !(30..=60).contains(&self.duration_minutes) {
            anyhow::bail!(
                "duration_minutes must be between 30 and 60, got {}",
                self.duration_minutes
            );
        }

        Ok(IcsOptions {
            start_time,
            duration_minutes: self.duration_minutes,
            summary_prefix: self.summary_prefix.clone(),
        })
    }
}

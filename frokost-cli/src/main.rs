mod commands;
mod config;
mod fetch;
mod gather;
mod pdf;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "frokost")]
#[command(about = "Scrape the week's lunch menus into an .ics calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the menu page and write the calendar file
    Scrape {
        /// Output .ics path (defaults to the configured path, then ./frokost.ics)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Reference year for ISO week math (defaults to the current ISO year)
        #[arg(long)]
        year: Option<i32>,

        /// Menu page URL
        #[arg(long)]
        url: Option<String>,

        /// Use the page text only, skip linked PDFs
        #[arg(long, conflicts_with = "pdf_only")]
        html_only: bool,

        /// Use linked PDFs only, skip the page text
        #[arg(long)]
        pdf_only: bool,
    },
    /// Fetch and print the entries without writing a file
    Preview {
        /// Reference year for ISO week math (defaults to the current ISO year)
        #[arg(long)]
        year: Option<i32>,

        /// Menu page URL
        #[arg(long)]
        url: Option<String>,

        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scrape {
            out,
            year,
            url,
            html_only,
            pdf_only,
        } => commands::scrape::run(&config, out, year, url, html_only, pdf_only).await,
        Commands::Preview { year, url, json } => {
            commands::preview::run(&config, year, url, json).await
        }
    }
}

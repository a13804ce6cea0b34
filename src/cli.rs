// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::PORTAL_URL;
use crate::config::options::{OutputFormat, RunOptions, SourceSelector, Variant};
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(name = "routine_scrape", version, about = "Extract exam routines from published sheet tables")]
pub struct Args {
    /// Sheet layout to parse.
    #[arg(long, value_enum, default_value = "eee")]
    pub variant: Variant,

    /// Read a saved HTML file instead of fetching.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Fetch this sheet URL instead of the layout's default.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Search a portal page for the sheet (eee only).
    #[arg(long, value_name = "PORTAL_URL", num_args = 0..=1, default_missing_value = PORTAL_URL)]
    pub discover: Option<String>,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file. Defaults to a timestamped name under ./out.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print a midterm/final summary after writing.
    #[arg(long)]
    pub report: bool,

    /// Also append log lines to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Input precedence: file, URL, discovery, default.
    pub fn to_options(&self) -> RunOptions {
        let source = if let Some(p) = &self.input {
            SourceSelector::File(p.clone())
        } else if let Some(u) = &self.url {
            SourceSelector::Url(u.clone())
        } else if let Some(portal) = &self.discover {
            SourceSelector::Discover(portal.clone())
        } else {
            SourceSelector::Default
        };
        RunOptions {
            variant: self.variant,
            source,
            format: self.format,
            out: self.out.clone(),
            report: self.report,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.log_file.as_deref())?;

    let outcome = crate::runner::run(&args.to_options())?;
    println!("Parsed {} records from {}", outcome.records.len(), outcome.source);
    println!("Saved to {}", outcome.path.display());
    if let Some(report) = outcome.report {
        println!("\n{report}");
    }
    Ok(())
}

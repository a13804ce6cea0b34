// src/config/options.rs
use std::path::PathBuf;

use crate::engine::types::LayoutSpec;
use crate::specs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Variant {
    BaEnglish,
    BbaBseco,
    Cse,
    Eee,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::BaEnglish, Variant::BbaBseco, Variant::Cse, Variant::Eee];

    pub fn spec(&self) -> &'static LayoutSpec {
        match self {
            Variant::BaEnglish => &specs::ba_english::SPEC,
            Variant::BbaBseco => &specs::bba_bseco::SPEC,
            Variant::Cse => &specs::cse::SPEC,
            Variant::Eee => &specs::eee::SPEC,
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            Variant::BaEnglish => specs::ba_english::SOURCE_URL,
            Variant::BbaBseco => specs::bba_bseco::SOURCE_URL,
            Variant::Cse => specs::cse::SOURCE_URL,
            Variant::Eee => specs::eee::SOURCE_URL,
        }
    }

    /// Short name used in file names ("ba_english", "eee", …).
    pub fn stem(&self) -> &'static str {
        match self {
            Variant::BaEnglish => "ba_english",
            Variant::BbaBseco => "bba_bseco",
            Variant::Cse => "cse",
            Variant::Eee => "eee",
        }
    }

    /// Saved page picked up from the working directory when no source is given.
    pub fn snapshot_file(&self) -> PathBuf {
        PathBuf::from(format!("{}_routine.html", self.stem()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSelector {
    /// Local snapshot if present, else the layout's published sheet.
    Default,
    File(PathBuf),
    Url(String),
    /// Portal page to search for the sheet URL.
    Discover(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub variant: Variant,
    pub source: SourceSelector,
    pub format: OutputFormat,
    /// File to write; `None` picks a timestamped name under the default directory.
    pub out: Option<PathBuf>,
    pub report: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Eee,
            source: SourceSelector::Default,
            format: OutputFormat::Json,
            out: None,
            report: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_its_own_spec() {
        let names: Vec<&str> = Variant::ALL.iter().map(|v| v.spec().name).collect();
        assert_eq!(names, vec!["ba-english", "bba-bseco", "cse", "eee"]);
        assert!(Variant::ALL.iter().all(|v| v.default_url().starts_with("https://docs.google.com/")));
        assert_eq!(Variant::Cse.snapshot_file(), PathBuf::from("cse_routine.html"));
    }
}

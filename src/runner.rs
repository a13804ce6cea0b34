// src/runner.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use tracing::{info, warn};

use crate::{
    config::consts::DISCOVERY_TIMEOUT_SECS,
    config::options::{RunOptions, SourceSelector, Variant},
    core::{DocumentSource, FileSource, HttpSource, LocalFirst},
    discover::{self, Indicators},
    engine::{parse_html, types::Record},
    error::{Error, Result},
    file::{default_out_path, write_records},
    report::ExamSplit,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Where the document came from (path or URL).
    pub source: String,
    pub records: Vec<Record>,
    pub path: PathBuf,
    pub report: Option<String>,
}

/// Top-level runner: pick the source, then fetch, parse and write.
pub fn run(opts: &RunOptions) -> Result<RunOutcome> {
    match &opts.source {
        SourceSelector::File(p) => run_with(opts, &FileSource, &p.to_string_lossy()),
        SourceSelector::Url(url) => run_with(opts, &HttpSource::new()?, url),
        SourceSelector::Discover(portal) => {
            let http = HttpSource::new()?;
            let url = discover_sheet(opts.variant, portal, &http)?;
            run_with(opts, &http, &url)
        }
        SourceSelector::Default => {
            let src = LocalFirst { snapshot: opts.variant.snapshot_file(), remote: HttpSource::new()? };
            run_with(opts, &src, opts.variant.default_url())
        }
    }
}

/// Same as [`run`] with an explicit source and identifier.
pub fn run_with(opts: &RunOptions, source: &dyn DocumentSource, id: &str) -> Result<RunOutcome> {
    let spec = opts.variant.spec();
    info!("{}: reading {id}", spec.name);
    let doc = source.fetch(id)?;

    let records = parse_html(spec, &doc)?;
    info!("{}: parsed {} records", spec.name, records.len());

    let path = opts
        .out
        .clone()
        .unwrap_or_else(|| default_out_path(opts.variant, opts.format, Local::now()));
    let path = write_records(&records, opts.format, &path)?;
    info!("wrote {}", path.display());

    let report = opts
        .report
        .then(|| ExamSplit::from_records(&records).render(spec.name));

    Ok(RunOutcome { source: s!(id), records, path, report })
}

/// Search the portal for this variant's sheet, else fall back to its default URL.
fn discover_sheet(variant: Variant, portal_url: &str, portal: &HttpSource) -> Result<String> {
    let indicators = match variant {
        Variant::Eee => Indicators::EEE,
        other => {
            return Err(Error::InvalidInput(format!(
                "sheet discovery has no indicators for {}",
                other.spec().name
            )));
        }
    };
    let sheets = HttpSource::with_timeout(Duration::from_secs(DISCOVERY_TIMEOUT_SECS))?;
    match discover::find_sheet(portal_url, portal, &sheets, &indicators)? {
        Some(url) => Ok(url),
        None => {
            warn!("no sheet on {portal_url} matched; using the default URL");
            Ok(s!(variant.default_url()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::OutputFormat;
    use crate::error::StructuralError;

    struct Fixed(&'static str);

    impl DocumentSource for Fixed {
        fn fetch(&self, _id: &str) -> Result<String> {
            Ok(s!(self.0))
        }
    }

    const BBA: &str = r#"<table class="waffle">
        <tr><td>Day</td><td>Morning</td></tr>
        <tr><th>1</th><td>1</td><td>BBA 101</td><td>Intro</td><td></td><td>FIN 201</td><td>Money</td><td></td><td></td><td></td></tr>
        <tr><th>2</th><td>1</td><td>ACT 111</td><td>Ledger <b>I</b></td><td></td><td></td><td></td><td></td><td></td><td></td></tr>
    </table>"#;

    #[test]
    fn fetch_parse_write_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let opts = RunOptions {
            variant: Variant::BbaBseco,
            format: OutputFormat::Csv,
            out: Some(dir.path().join("bba.csv")),
            report: true,
            ..RunOptions::default()
        };
        let outcome = run_with(&opts, &Fixed(BBA), "bba.html").unwrap();
        assert_eq!(outcome.source, "bba.html");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].courses().len(), 2);
        assert!(outcome.path.is_file());
        assert!(outcome.report.unwrap().contains("Total final slots: 2"));
    }

    #[test]
    fn structural_errors_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x.json");
        let opts = RunOptions { variant: Variant::Cse, out: Some(out.clone()), ..RunOptions::default() };
        let err = run_with(&opts, &Fixed("<p>no table</p>"), "x").unwrap_err();
        assert!(matches!(err, Error::Structural(StructuralError::TableNotFound)));
        assert!(!out.exists());
    }

    #[test]
    fn discovery_is_eee_only() {
        let http = HttpSource::new().unwrap();
        let err = discover_sheet(Variant::Cse, "https://example.invalid", &http).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}

// src/discover.rs
//! Finds the published sheet embedded in a portal page.
//!
//! The portal embeds several sheets; the right one is the first whose text
//! mentions enough of the layout's known course codes.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::core::source::DocumentSource;
use crate::error::Result;
use crate::specs::eee;

static SHEET_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:src|href)="([^"]*docs\.google\.com/spreadsheets[^"]*)""#).unwrap()
});

/// Course codes to look for and how many must appear.
#[derive(Clone, Copy, Debug)]
pub struct Indicators {
    pub codes: &'static [&'static str],
    pub threshold: usize,
}

impl Indicators {
    pub const EEE: Indicators = Indicators { codes: eee::INDICATORS, threshold: eee::INDICATOR_THRESHOLD };

    /// Number of distinct codes present in `doc`.
    pub fn score(&self, doc: &str) -> usize {
        self.codes.iter().filter(|c| doc.contains(**c)).count()
    }
}

/// Sheet URLs from `src="…"`/`href="…"` attributes, first-seen order, no repeats.
pub fn sheet_urls(page: &str) -> Vec<String> {
    let urls: IndexSet<&str> = SHEET_URL
        .captures_iter(page)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();
    urls.into_iter().map(|u| u.replace("&amp;", "&")).collect()
}

/// Fetch the portal, then each candidate sheet, and return the first sheet
/// URL that scores at least the threshold. `Ok(None)` when none does.
/// A candidate that fails to load is skipped.
pub fn find_sheet(
    portal_url: &str,
    portal: &dyn DocumentSource,
    sheets: &dyn DocumentSource,
    indicators: &Indicators,
) -> Result<Option<String>> {
    let page = portal.fetch(portal_url)?;
    let candidates = sheet_urls(&page);
    info!("{} candidate sheets on {portal_url}", candidates.len());

    for url in candidates {
        match sheets.fetch(&url) {
            Ok(doc) => {
                let score = indicators.score(&doc);
                debug!("{url}: {score} indicators");
                if score >= indicators.threshold {
                    info!("discovered sheet {url}");
                    return Ok(Some(url));
                }
            }
            Err(e) => warn!("skipping {url}: {e}"),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    struct Pages(HashMap<&'static str, String>);

    impl DocumentSource for Pages {
        fn fetch(&self, id: &str) -> Result<String> {
            self.0
                .get(id)
                .cloned()
                .ok_or_else(|| Error::InvalidInput(format!("no page {id}")))
        }
    }

    const A: &str = "https://docs.google.com/spreadsheets/d/e/A/pubhtml";
    const B: &str = "https://docs.google.com/spreadsheets/d/e/B/pubhtml";
    const C: &str = "https://docs.google.com/spreadsheets/d/e/C/pubhtml";

    fn portal() -> String {
        format!(
            r#"<iframe src="{A}"></iframe><a HREF="{B}">b</a><a href="{A}">again</a>
               <a href="https://example.com/x">x</a><iframe src="{C}"></iframe>"#
        )
    }

    #[test]
    fn urls_are_deduped_in_order() {
        assert_eq!(sheet_urls(&portal()), vec![A, B, C]);
    }

    #[test]
    fn entities_in_urls_are_decoded() {
        let page = r#"<iframe src="https://docs.google.com/spreadsheets/d/e/X/pubhtml?widget=true&amp;headers=false">"#;
        assert_eq!(
            sheet_urls(page),
            vec!["https://docs.google.com/spreadsheets/d/e/X/pubhtml?widget=true&headers=false"]
        );
    }

    #[test]
    fn first_candidate_over_threshold_wins() {
        let mut pages = HashMap::new();
        pages.insert("portal", portal());
        pages.insert(A, s!("EEE 101 MAT 101 PHY 103"));
        // B fails to load
        pages.insert(C, eee::INDICATORS[..6].join(" "));
        let src = Pages(pages);

        let found = find_sheet("portal", &src, &src, &Indicators::EEE).unwrap();
        assert_eq!(found.as_deref(), Some(C));
    }

    #[test]
    fn none_when_nothing_scores() {
        let mut pages = HashMap::new();
        pages.insert("portal", portal());
        pages.insert(A, s!("CSE 1111"));
        let src = Pages(pages);
        assert_eq!(find_sheet("portal", &src, &src, &Indicators::EEE).unwrap(), None);
    }

    #[test]
    fn portal_failure_propagates() {
        let src = Pages(HashMap::new());
        assert!(find_sheet("portal", &src, &src, &Indicators::EEE).is_err());
    }
}

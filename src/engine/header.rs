// src/engine/header.rs
use tracing::{debug, warn};

use crate::engine::types::{HeaderRule, Row, Table};
use crate::error::StructuralError;

/// Index of the header row: the first row with a cell containing the label
/// (trimmed, case-insensitive), else the rule's fixed fallback row.
///
/// The fallback only checks that the row exists. A layout that moved its header
/// will still "succeed" here and produce nothing useful further down.
pub fn locate_header(table: &Table, rule: &HeaderRule) -> Result<usize, StructuralError> {
    if let Some(label) = rule.label {
        let needle = label.to_lowercase();
        if let Some(idx) = table.rows.iter().position(|row| has_label(row, &needle)) {
            debug!("header row {idx} (label {label:?})");
            return Ok(idx);
        }
        warn!("no row labelled {label:?}; falling back to row {}", rule.fallback);
    }

    if rule.fallback < table.len() {
        Ok(rule.fallback)
    } else {
        Err(StructuralError::HeaderNotFound {
            label: rule.label,
            fallback: rule.fallback,
            rows: table.len(),
        })
    }
}

fn has_label(row: &Row, needle: &str) -> bool {
    row.iter().any(|c| c.text.trim().to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: HeaderRule = HeaderRule { label: Some("day"), fallback: 4 };

    fn table(rows: Vec<Row>) -> Table { Table::new(rows) }

    #[test]
    fn finds_label_anywhere() {
        for pos in 0..5 {
            let mut rows: Vec<Row> = (0..6).map(|i| row!["", i.to_string(), "x"]).collect();
            rows[pos] = row!["", " DAY ", "Morning"];
            assert_eq!(locate_header(&table(rows), &DAY), Ok(pos));
        }
    }

    #[test]
    fn first_labelled_row_wins() {
        let t = table(vec![row!["title"], row!["Day"], row!["Sunday"]]);
        assert_eq!(locate_header(&t, &DAY), Ok(1));
    }

    #[test]
    fn falls_back_to_fixed_row() {
        let rows: Vec<Row> = (0..6).map(|_| row!["", "1", "ENG101"]).collect();
        assert_eq!(locate_header(&table(rows), &DAY), Ok(4));
    }

    #[test]
    fn fallback_out_of_range_is_structural() {
        let t = table(vec![row!["a"], row!["b"]]);
        let err = locate_header(&t, &DAY).unwrap_err();
        assert!(matches!(err, StructuralError::HeaderNotFound { fallback: 4, rows: 2, .. }));
        assert!(err.to_string().contains("header row not found"));
    }

    #[test]
    fn unlabelled_rule_uses_fixed_row() {
        let t = table(vec![row!["Day"], row!["x"], row!["y"]]);
        let rule = HeaderRule { label: None, fallback: 2 };
        assert_eq!(locate_header(&t, &rule), Ok(2));
    }
}

// src/specs/eee.rs
//! EEE routine: one wide grid. Row 5 has seven day cells spanning three columns
//! each, row 6 has the 21 slot labels below them, and rows 7..19 hold one
//! trimester each. The first trimester row starts with an extra merged label
//! cell, so its courses sit one column to the right.
//! Output: flat `{trimester, day, slot, time_interval, course}`.

use super::{LayoutSpec, PLACEHOLDERS};
use crate::engine::types::*;

pub const SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSDu1ArL1vNPC52BXEjRPQzqlWPWWi3HLkXTmLv7UKFhrdRoKt_xYysksn6mxiyONmYTUwMXuIUghf8/pubhtml";

/// Course codes that only the EEE sheet carries; used to pick it out of the portal.
pub const INDICATORS: &[&str] = &[
    "EEE 101", "EEE 1001", "EEE 2103", "EEE 2101", "EEE 2105", "MAT 101", "PHY 103",
    "EEE 2301", "EEE 3303", "CHE 2101", "EEE 3105", "ECO 2101", "EEE 3901",
];
pub const INDICATOR_THRESHOLD: usize = 6;

pub static SPEC: LayoutSpec = LayoutSpec {
    name: "eee",
    header: HeaderRule { label: None, fallback: 5 },
    columns: ColumnStrategy::SpanExpansion(SpanHeader {
        days: CellRange::new(2, 23),
        slot_row: 1,
        slots: CellRange::new(1, 22),
        data: CellRange::new(2, 23),
        first_row_offset: 1,
    }),
    shape: RowShape::Inline,
    row_key: RowKey::Trimester,
    min_cells: 24,
    max_rows: Some(12),
    slot_times: SlotTimeTable(&[
        ("Time 1", "9:00 AM - 11:00 AM"),
        ("Time 2", "11:30 AM - 01:30 PM"),
        ("Time 3", "02:00 PM - 04:00 PM"),
    ]),
    filter: CellFilter {
        placeholders: PLACEHOLDERS,
        time_ranges: true,
        numeric: true,
        day_label: false,
    },
    output: OutputShape::Flat,
};

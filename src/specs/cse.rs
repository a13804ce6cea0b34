// src/specs/cse.rs
//! CSE routine: each day is a block of three rows, one per slot.
//!
//! ```text
//! | # | Day 1 | T1 | 09:00 - 11:00 | course | course | ... |   <- lead row
//! | # |         T2 | 11:30 - 01:30 | course | ...              <- day cell merged away
//! | # |         T3 | 02:00 - 04:00 | course | ...
//! ```
//! Every block carries a "Day N" label, so searching for "day" would stop on a
//! data row; the header is a fixed row instead. A block whose day cell is blank
//! is still read, with an empty day.
//! Output: `{day, slot, time_interval, courses: ["<course text>", ...]}`.

use super::{LayoutSpec, PLACEHOLDERS};
use crate::engine::types::*;

pub const SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vS8De-s8ewCelWhuSlfJBwp5Bgjg7oPYqXGIYAd8t72imOtU3X7XnJjibrhyQSR9oRLxDtnw6bkTWIv/pubhtml";

pub static SPEC: LayoutSpec = LayoutSpec {
    name: "cse",
    header: HeaderRule { label: None, fallback: 2 },
    columns: ColumnStrategy::RowLabels(RowLabels { slot: 2, time: 3, courses_from: 4 }),
    shape: RowShape::Block { rows: 3, trailing_offset: -1 },
    row_key: RowKey::Day { col: 1, rule: DayRule::Any },
    min_cells: 4,
    max_rows: None,
    slot_times: SlotTimeTable(&[
        ("T1", "9:00 AM - 11:00 AM"),
        ("T2", "11:30 AM - 01:30 PM"),
        ("T3", "02:00 PM - 04:00 PM"),
    ]),
    filter: CellFilter {
        placeholders: PLACEHOLDERS,
        time_ranges: true,
        numeric: false,
        day_label: true,
    },
    output: OutputShape::Grouped,
};

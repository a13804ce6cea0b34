// src/specs/bba_bseco.rs
//! BBA / BBA in AIS / BSECO routine. Same grid as BA English, but several
//! programs share a day, so courses are grouped per (day, slot).
//! Output: `{day, slot, time_interval, courses: [{course_code, course_name}]}`.

use super::{DEFAULT_FILTER, LayoutSpec};
use crate::engine::types::*;

pub const SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRdMs34aiZHn81jF6pAcEZ979ZryLqF36H6ZD9BVNhWufNbO4CstNym8Qa0yiVVtjbP8kMyn5HbfISN/pubhtml";

pub static SPEC: LayoutSpec = LayoutSpec {
    name: "bba-bseco",
    output: OutputShape::Grouped,
    slot_times: SlotTimeTable(&[
        ("Morning (Time 1)", "9:00 AM - 11:00 AM"),
        ("Noon (Time 2)", "11:30 AM - 1:30 PM"),
        ("Afternoon (Time 3)", "2:00 PM - 4:00 PM"),
    ]),
    header: HeaderRule { label: Some("day"), fallback: 4 },
    columns: ColumnStrategy::FixedSlots(super::ba_english::SLOTS),
    shape: RowShape::Inline,
    row_key: RowKey::Day { col: 1, rule: DayRule::Numeric },
    min_cells: 10,
    max_rows: None,
    filter: DEFAULT_FILTER,
};

// src/specs/ba_english.rs
//! BA English routine: one row per numbered day, three slots side by side.
//!
//! ```text
//! | # | Day | Morning code | name | gap | Noon code | name | gap | Afternoon code | name |
//! ```
//! Output: flat `{day, slot, time_interval, course_code, course_name}`.

use super::{DEFAULT_FILTER, LayoutSpec};
use crate::engine::types::*;

pub const SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR7Mauw19PwY7LNhFoDPwtvNO63tpYS89tyLMW06iSARp5xPA5u6VuaRqtDbt9SAD_obYdsIorcqq0C/pubhtml";

pub const SLOTS: &[SlotColumns] = &[
    SlotColumns { slot: "Morning (Time 1)", code: 2, name: 3 },
    SlotColumns { slot: "Noon (Time 2)", code: 5, name: 6 },
    SlotColumns { slot: "Afternoon (Time 3)", code: 8, name: 9 },
];

pub static SPEC: LayoutSpec = LayoutSpec {
    name: "ba-english",
    header: HeaderRule { label: Some("day"), fallback: 4 },
    columns: ColumnStrategy::FixedSlots(SLOTS),
    shape: RowShape::Inline,
    row_key: RowKey::Day { col: 1, rule: DayRule::Numeric },
    min_cells: 10,
    max_rows: None,
    slot_times: SlotTimeTable(&[
        ("Morning (Time 1)", "09:00 am - 11:00 am"),
        ("Noon (Time 2)", "11:30 am - 01:30 pm"),
        ("Afternoon (Time 3)", "02:00 pm - 04:00 pm"),
    ]),
    filter: DEFAULT_FILTER,
    output: OutputShape::Flat,
};

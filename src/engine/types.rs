// src/engine/types.rs
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::core::sanitize::{is_day_label, is_numeric, is_time_range};

/* ---------------- Table model ---------------- */

/// One `<td>`/`<th>` worth of text, plus its horizontal span if the source declared one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub span: Option<usize>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), span: None }
    }

    pub fn spanning(text: impl Into<String>, span: usize) -> Self {
        Self { text: text.into(), span: Some(span) }
    }

    /// Logical columns covered by this cell. Missing or zero spans count as one.
    pub fn span(&self) -> usize {
        self.span.filter(|&n| n > 0).unwrap_or(1)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self { Cell::new(text) }
}

impl From<String> for Cell {
    fn from(text: String) -> Self { Cell::new(text) }
}

impl From<(&str, usize)> for Cell {
    fn from((text, span): (&str, usize)) -> Self { Cell::spanning(text, span) }
}

pub type Row = Vec<Cell>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self { Self { rows } }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn row(&self, idx: usize) -> Option<&Row> { self.rows.get(idx) }
}

/// Text of cell `col`, or "" when the row is too short.
pub fn cell_text(row: &[Cell], col: usize) -> &str {
    row.get(col).map(|c| c.text.as_str()).unwrap_or("")
}

/* ---------------- Layout spec ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderRule {
    /// Case-insensitive substring that marks the header row. `None` skips the search.
    pub label: Option<&'static str>,
    /// Row used when no row carries the label.
    pub fallback: usize,
}

/// Half-open cell index range, clamped to the row when sliced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub start: usize,
    pub end: usize,
}

impl CellRange {
    pub const fn new(start: usize, end: usize) -> Self { Self { start, end } }

    pub fn shifted(&self, offset: isize) -> Option<CellRange> {
        Some(CellRange {
            start: self.start.checked_add_signed(offset)?,
            end: self.end.checked_add_signed(offset)?,
        })
    }

    pub fn slice<'a>(&self, row: &'a [Cell]) -> &'a [Cell] {
        let end = self.end.min(row.len());
        let start = self.start.min(end);
        &row[start..end]
    }
}

/// Code/name cell pair for one slot of a "day per row" layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotColumns {
    pub slot: &'static str,
    pub code: usize,
    pub name: usize,
}

/// Day labels spread over several columns, slot labels on the row below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanHeader {
    pub days: CellRange,
    /// Slot-label row, counted from the day-label row.
    pub slot_row: usize,
    pub slots: CellRange,
    /// Course cells of a data row, aligned with the expanded columns.
    pub data: CellRange,
    /// Extra shift for the first data row (it carries a vertically merged label cell).
    pub first_row_offset: isize,
}

/// Rows that name their own slot and time; courses run to the end of the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLabels {
    pub slot: usize,
    pub time: usize,
    pub courses_from: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnStrategy {
    FixedSlots(&'static [SlotColumns]),
    SpanExpansion(SpanHeader),
    RowLabels(RowLabels),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowShape {
    /// One row per day (or per trimester), every slot inline.
    Inline,
    /// One day per block of `rows` rows, one slot per row. Rows after the first
    /// lack the merged day cell, so their columns sit `trailing_offset` away.
    Block { rows: usize, trailing_offset: isize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayRule {
    /// "1", "12".
    Numeric,
    /// Numeric or "Day N".
    DayLabel,
    /// Whatever the cell holds, blank included.
    Any,
}

impl DayRule {
    pub fn accepts(&self, day: &str) -> bool {
        match self {
            DayRule::Numeric => is_numeric(day),
            DayRule::DayLabel => is_numeric(day) || is_day_label(day),
            DayRule::Any => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKey {
    /// Day read from a cell of the (lead) row.
    Day { col: usize, rule: DayRule },
    /// Rows are trimesters numbered from 1; days come from the column mapping.
    Trimester,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotTimeTable(pub &'static [(&'static str, &'static str)]);

impl SlotTimeTable {
    pub fn lookup(&self, slot: &str) -> Option<&'static str> {
        self.0.iter().find(|(s, _)| *s == slot).map(|(_, t)| *t)
    }

    /// Canonical interval for `slot`, else `fallback` (never fails).
    pub fn resolve(&self, slot: &str, fallback: &str) -> String {
        self.lookup(slot).unwrap_or(fallback).to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellFilter {
    pub placeholders: &'static [&'static str],
    pub time_ranges: bool,
    pub numeric: bool,
    /// Drop a course equal to its row's day label.
    pub day_label: bool,
}

impl CellFilter {
    pub fn keeps(&self, value: &str, day: Option<&str>) -> bool {
        if value.is_empty() || self.placeholders.contains(&value) {
            return false;
        }
        if self.time_ranges && is_time_range(value) {
            return false;
        }
        if self.numeric && is_numeric(value) {
            return false;
        }
        !(self.day_label && day == Some(value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputShape {
    Flat,
    Grouped,
}

/// Everything the engine needs to read one routine layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutSpec {
    pub name: &'static str,
    pub header: HeaderRule,
    pub columns: ColumnStrategy,
    pub shape: RowShape,
    pub row_key: RowKey,
    /// Minimum cells of a (lead) data row.
    pub min_cells: usize,
    /// Number of rows after the header to read; `None` reads to the end.
    pub max_rows: Option<usize>,
    pub slot_times: SlotTimeTable,
    pub filter: CellFilter,
    pub output: OutputShape,
}

/* ---------------- Records ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SlotKey {
    pub day: String,
    pub slot: String,
    pub time_interval: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Course {
    Coded { course_code: String, course_name: String },
    Text(String),
}

impl Course {
    /// Single-line rendering for reports and CSV cells.
    pub fn label(&self) -> String {
        match self {
            Course::Coded { course_code, course_name } if course_name.is_empty() => course_code.clone(),
            Course::Coded { course_code, course_name } => format!("{course_code} {course_name}"),
            Course::Text(t) => t.clone(),
        }
    }
}

/// One course in one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub trimester: Option<String>,
    pub key: SlotKey,
    pub course: Course,
}

// Field order is part of the output contract, so this is written out by hand:
// [trimester,] day, slot, time_interval, then course_code/course_name or course.
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(t) = &self.trimester {
            map.serialize_entry("trimester", t)?;
        }
        map.serialize_entry("day", &self.key.day)?;
        map.serialize_entry("slot", &self.key.slot)?;
        map.serialize_entry("time_interval", &self.key.time_interval)?;
        match &self.course {
            Course::Coded { course_code, course_name } => {
                map.serialize_entry("course_code", course_code)?;
                map.serialize_entry("course_name", course_name)?;
            }
            Course::Text(t) => map.serialize_entry("course", t)?,
        }
        map.end()
    }
}

/// All courses sharing one (day, slot, time) key, in first-seen order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotGroup {
    #[serde(flatten)]
    pub key: SlotKey,
    pub courses: Vec<Course>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Entry(Entry),
    Group(SlotGroup),
}

impl Record {
    pub fn key(&self) -> &SlotKey {
        match self {
            Record::Entry(e) => &e.key,
            Record::Group(g) => &g.key,
        }
    }

    pub fn courses(&self) -> &[Course] {
        match self {
            Record::Entry(e) => std::slice::from_ref(&e.course),
            Record::Group(g) => &g.courses,
        }
    }
}

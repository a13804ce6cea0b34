// src/engine/walker.rs
//! Data rows → one `Entry` per course cell that survives the filters.
//!
//! The walker is a plain iterator over "units": a single row for inline layouts,
//! a block of rows for stacked layouts. Rejected rows and cells simply produce
//! nothing; there is no error path once the mapping exists.

use std::vec;

use tracing::trace;

use crate::core::sanitize::normalize_ws;
use crate::engine::columns::{ColumnMapping, Columns};
use crate::engine::types::*;

pub struct RowWalker<'a> {
    table: &'a Table,
    spec: &'a LayoutSpec,
    mapping: &'a ColumnMapping,
    start: usize,
    next_row: usize,
    end: usize,
    pending: vec::IntoIter<Entry>,
}

impl<'a> RowWalker<'a> {
    pub fn new(table: &'a Table, spec: &'a LayoutSpec, mapping: &'a ColumnMapping) -> Self {
        let start = mapping.data_start;
        let end = match spec.max_rows {
            Some(n) => start.saturating_add(n).min(table.len()),
            None => table.len(),
        };
        Self {
            table,
            spec,
            mapping,
            start,
            next_row: start,
            end,
            pending: Vec::new().into_iter(),
        }
    }

    fn read_unit(&mut self) -> Vec<Entry> {
        let idx = self.next_row;
        match self.spec.shape {
            RowShape::Inline => {
                self.next_row += 1;
                self.read_inline(idx)
            }
            RowShape::Block { rows, trailing_offset } => {
                let rows = rows.max(1);
                if idx + rows > self.end {
                    self.next_row = self.end;
                    return Vec::new();
                }
                self.next_row += rows;
                self.read_block(idx, rows, trailing_offset)
            }
        }
    }

    fn read_inline(&self, idx: usize) -> Vec<Entry> {
        let row = &self.table.rows[idx];
        if row.len() < self.spec.min_cells {
            trace!("row {idx}: {} cells, skipped", row.len());
            return Vec::new();
        }

        let ordinal = idx - self.start;
        let (day, trimester) = match self.spec.row_key {
            RowKey::Day { col, rule } => {
                let day = normalize_ws(cell_text(row, col));
                if !rule.accepts(&day) {
                    trace!("row {idx}: day {day:?} rejected");
                    return Vec::new();
                }
                (day, None)
            }
            RowKey::Trimester => (s!(), Some((ordinal + 1).to_string())),
        };

        let offset = match &self.mapping.columns {
            Columns::Spanned { first_row_offset, .. } if ordinal == 0 => *first_row_offset,
            _ => 0,
        };
        self.read_row(row, &day, trimester, offset)
    }

    fn read_block(&self, idx: usize, rows: usize, trailing_offset: isize) -> Vec<Entry> {
        let lead = &self.table.rows[idx];
        if lead.len() < self.spec.min_cells {
            trace!("block at row {idx}: lead row has {} cells, skipped", lead.len());
            return Vec::new();
        }

        let day = match self.spec.row_key {
            RowKey::Day { col, rule } => {
                let day = normalize_ws(cell_text(lead, col));
                if !rule.accepts(&day) {
                    trace!("block at row {idx}: day {day:?} rejected");
                    return Vec::new();
                }
                day
            }
            RowKey::Trimester => s!(),
        };

        let mut out = self.read_row(lead, &day, None, 0);
        let trailing_min = self.spec.min_cells.saturating_add_signed(trailing_offset);
        for row in &self.table.rows[idx + 1..idx + rows] {
            if row.len() < trailing_min {
                continue;
            }
            out.extend(self.read_row(row, &day, None, trailing_offset));
        }
        out
    }

    /// Read every mapped course cell of `row`, with column indices moved by `offset`.
    fn read_row(&self, row: &[Cell], day: &str, trimester: Option<String>, offset: isize) -> Vec<Entry> {
        let filter = &self.spec.filter;
        let day_ref = (!day.is_empty()).then_some(day);
        let at = |col: usize| col.checked_add_signed(offset).map(|c| normalize_ws(cell_text(row, c))).unwrap_or_default();
        let mut out = Vec::new();

        match &self.mapping.columns {
            Columns::Fixed(slots) => {
                for fs in slots {
                    let code = at(fs.code);
                    if !filter.keeps(&code, day_ref) {
                        continue;
                    }
                    out.push(Entry {
                        trimester: trimester.clone(),
                        key: SlotKey { day: day.to_string(), slot: fs.slot.to_string(), time_interval: fs.time_interval.clone() },
                        course: Course::Coded { course_code: code, course_name: at(fs.name) },
                    });
                }
            }
            Columns::Spanned { columns, data, .. } => {
                let Some(range) = data.shifted(offset) else { return out };
                for (i, cell) in range.slice(row).iter().enumerate() {
                    // Past the header's width: mapping gap, not an error.
                    let Some(key) = columns.get(i) else { break };
                    let text = normalize_ws(&cell.text);
                    if !filter.keeps(&text, day_ref) {
                        continue;
                    }
                    out.push(Entry { trimester: trimester.clone(), key: key.clone(), course: Course::Text(text) });
                }
            }
            Columns::Labelled(labels) => {
                let slot = at(labels.slot);
                let time = at(labels.time);
                let key = SlotKey {
                    day: day.to_string(),
                    time_interval: self.spec.slot_times.resolve(&slot, &time),
                    slot,
                };
                let Some(first) = labels.courses_from.checked_add_signed(offset) else { return out };
                for cell in row.iter().skip(first) {
                    let text = normalize_ws(&cell.text);
                    if !filter.keeps(&text, day_ref) {
                        continue;
                    }
                    out.push(Entry { trimester: trimester.clone(), key: key.clone(), course: Course::Text(text) });
                }
            }
        }
        out
    }
}

impl Iterator for RowWalker<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some(e) = self.pending.next() {
                return Some(e);
            }
            if self.next_row >= self.end {
                return None;
            }
            self.pending = self.read_unit().into_iter();
        }
    }
}

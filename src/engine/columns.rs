// src/engine/columns.rs
//! Header cells → which (day, slot, time) every data column belongs to.

use tracing::debug;

use crate::core::sanitize::normalize_ws;
use crate::engine::types::*;
use crate::error::StructuralError;

/// Fixed slot triple with its time interval resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedSlot {
    pub slot: &'static str,
    pub time_interval: String,
    pub code: usize,
    pub name: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Columns {
    /// Day comes from the row; each slot reads a code/name pair.
    Fixed(Vec<FixedSlot>),
    /// `columns[i]` describes data cell `i`. Cells past the end are unmapped.
    Spanned {
        columns: Vec<SlotKey>,
        data: CellRange,
        first_row_offset: isize,
    },
    /// Slot and time are read from each row.
    Labelled(RowLabels),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    /// First row after the header row(s).
    pub data_start: usize,
    pub columns: Columns,
}

impl ColumnMapping {
    pub fn mapped_len(&self) -> usize {
        match &self.columns {
            Columns::Fixed(slots) => slots.len(),
            Columns::Spanned { columns, .. } => columns.len(),
            Columns::Labelled(_) => 0,
        }
    }
}

pub fn build_mapping(
    table: &Table,
    header: usize,
    spec: &LayoutSpec,
) -> Result<ColumnMapping, StructuralError> {
    let mapping = match spec.columns {
        ColumnStrategy::FixedSlots(triples) => ColumnMapping {
            data_start: header + 1,
            columns: Columns::Fixed(
                triples
                    .iter()
                    .map(|t| FixedSlot {
                        slot: t.slot,
                        time_interval: spec.slot_times.resolve(t.slot, ""),
                        code: t.code,
                        name: t.name,
                    })
                    .collect(),
            ),
        },
        ColumnStrategy::SpanExpansion(h) => {
            let day_row = header_row(table, header, "day-label")?;
            let slot_row = header_row(table, header + h.slot_row, "slot-label")?;

            let slots: Vec<String> = h.slots.slice(slot_row).iter().map(|c| normalize_ws(&c.text)).collect();
            let days = expand_spans(h.days.slice(day_row), slots.len());
            if days.len() != slots.len() {
                debug!("header width mismatch: {} day columns, {} slot columns", days.len(), slots.len());
            }

            let columns = days
                .into_iter()
                .zip(slots)
                .map(|(day, slot)| {
                    let time_interval = spec.slot_times.resolve(&slot, "");
                    SlotKey { day, slot, time_interval }
                })
                .collect();

            ColumnMapping {
                data_start: header + h.slot_row + 1,
                columns: Columns::Spanned { columns, data: h.data, first_row_offset: h.first_row_offset },
            }
        }
        ColumnStrategy::RowLabels(labels) => ColumnMapping {
            data_start: header + 1,
            columns: Columns::Labelled(labels),
        },
    };

    debug!("{}: {} mapped columns, data from row {}", spec.name, mapping.mapped_len(), mapping.data_start);
    Ok(mapping)
}

/// Repeat each cell's label `span` times, stopping after `limit` labels.
pub fn expand_spans(cells: &[Cell], limit: usize) -> Vec<String> {
    let total = cells.iter().fold(0usize, |n, c| n.saturating_add(c.span()));
    let mut out = Vec::with_capacity(total.min(limit));
    for cell in cells {
        let room = limit - out.len();
        if room == 0 {
            break;
        }
        let label = normalize_ws(&cell.text);
        out.extend(std::iter::repeat_n(label, cell.span().min(room)));
    }
    out
}

fn header_row<'a>(table: &'a Table, idx: usize, what: &'static str) -> Result<&'a Row, StructuralError> {
    table.row(idx).ok_or(StructuralError::HeaderRowMissing { what, row: idx, rows: table.len() })
}

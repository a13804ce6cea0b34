// src/specs/mod.rs
//! # Routine layout specs
//!
//! One module per published routine. Each spec encodes *where the ground truth
//! lives in the grid* as a [`LayoutSpec`] value; the engine does the reading.
//!
//! ## What lives here
//! - **Geometry**: header row rule, slot columns or span-expanded header ranges,
//!   row shape (one row per day vs. three stacked rows per day), minimum widths.
//! - **Vocabulary**: slot → time-interval tables, placeholder tokens, day rules.
//! - **Output shape**: flat entries vs. grouped slots.
//! - The default published-sheet URL of each routine.
//!
//! ## What does **not** live here
//! - Fetching, snapshots, writers. Those sit in `core::source`, `core::net`, `file`.
//! - Any parsing code. A new layout should be a new constant, not a new walker.
//!
//! ## Conventions
//! - Cell indices count every `<td>` and `<th>` of a row in document order,
//!   including the leading row-number `<th>` that published sheets emit.
//! - Fixed row indices are brittle by nature; prefer a header label when the
//!   layout has a label row that no data row can be mistaken for.
//!
//! ## Testing notes
//! Each spec is tested offline against a trimmed snapshot of its sheet
//! (`tests/fixtures/`) plus inline snippets for the odd rows.

pub mod ba_english;
pub mod bba_bseco;
pub mod cse;
pub mod eee;

use crate::engine::types::CellFilter;
pub use crate::engine::types::LayoutSpec;

/// Header words and slot codes that leak into course cells through merges.
pub const PLACEHOLDERS: &[&str] = &["Courses", "Day", "Time", "T1", "T2", "T3"];

pub const DEFAULT_FILTER: CellFilter = CellFilter {
    placeholders: PLACEHOLDERS,
    time_ranges: true,
    numeric: false,
    day_label: false,
};

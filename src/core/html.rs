// src/core/html.rs
// Published sheet HTML → `Table`.
// Google's "publish to web" output wraps the grid in `<table class="waffle">`;
// every row starts with a `<th>` row-number cell, which is kept so that cell
// indices line up with what the layout specs count.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::core::sanitize::normalize_ws;
use crate::engine::types::{Cell, Table};
use crate::error::StructuralError;

static WAFFLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.waffle").unwrap());
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td, th").unwrap());

/// Browsers clamp `colspan` to this.
pub const MAX_COLSPAN: usize = 1000;

/// First `table.waffle`, else the first `<table>` of the document.
pub fn extract_table(doc: &str) -> Result<Table, StructuralError> {
    let html = Html::parse_document(doc);
    let table = match html.select(&WAFFLE).next() {
        Some(t) => t,
        None => {
            let t = html.select(&TABLE).next().ok_or(StructuralError::TableNotFound)?;
            warn!("no waffle table in document; using the first <table>");
            t
        }
    };
    Ok(read_table(table))
}

fn read_table(table: ElementRef<'_>) -> Table {
    let rows = table
        .select(&ROW)
        .map(|tr| tr.select(&CELL).map(read_cell).collect())
        .collect();
    Table::new(rows)
}

/// Descendant text joined with spaces (so `<br>` splits words), whitespace collapsed.
fn read_cell(el: ElementRef<'_>) -> Cell {
    let text = normalize_ws(&el.text().collect::<Vec<_>>().join(" "));
    let span = el
        .value()
        .attr("colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .map(|n| n.min(MAX_COLSPAN));
    Cell { text, span }
}

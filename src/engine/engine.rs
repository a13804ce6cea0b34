// src/engine/engine.rs
use tracing::debug;

use crate::core::html;
use crate::engine::columns::build_mapping;
use crate::engine::group::group_entries;
use crate::engine::header::locate_header;
use crate::engine::types::*;
use crate::engine::walker::RowWalker;
use crate::error::StructuralError;

/// Header → columns → rows → (grouping). Pure function of its inputs.
pub fn parse(spec: &LayoutSpec, table: &Table) -> Result<Vec<Record>, StructuralError> {
    let header = locate_header(table, &spec.header)?;
    let mapping = build_mapping(table, header, spec)?;
    let entries = RowWalker::new(table, spec, &mapping);

    let records: Vec<Record> = match spec.output {
        OutputShape::Flat => entries.map(Record::Entry).collect(),
        OutputShape::Grouped => group_entries(entries).into_iter().map(Record::Group).collect(),
    };
    debug!("{}: {} records from {} rows", spec.name, records.len(), table.len());
    Ok(records)
}

/// Same as [`parse`], starting from the raw document.
pub fn parse_html(spec: &LayoutSpec, doc: &str) -> Result<Vec<Record>, StructuralError> {
    let table = html::extract_table(doc)?;
    parse(spec, &table)
}

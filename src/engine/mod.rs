// src/engine/mod.rs
pub mod columns;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod group;
pub mod header;
pub mod types;
pub mod walker;

pub use engine::{parse, parse_html};

// src/config/mod.rs
pub mod consts;
pub mod options;

pub use options::{OutputFormat, RunOptions, SourceSelector, Variant};

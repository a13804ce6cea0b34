// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod discover;
pub mod engine;
pub mod error;
pub mod file;
pub mod log;
pub mod report;
pub mod runner;
pub mod specs;

pub use engine::{parse, parse_html};
pub use error::{Error, Result, StructuralError};

// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;
pub mod source;

pub use net::HttpSource;
pub use source::{DocumentSource, FileSource, LocalFirst};

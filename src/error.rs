// src/error.rs

/// Layout mismatch between the document and the layout used to read it.
/// The only error the parse core returns; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("no table found in document")]
    TableNotFound,

    #[error("header row not found: no row labelled {label:?} and fallback row {fallback} is outside the table ({rows} rows)")]
    HeaderNotFound {
        label: Option<&'static str>,
        fallback: usize,
        rows: usize,
    },

    #[error("{what} row {row} missing (table has {rows} rows)")]
    HeaderRowMissing {
        what: &'static str,
        row: usize,
        rows: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

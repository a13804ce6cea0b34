// src/core/source.rs
//! Where the routine document comes from. The parse core never sees this:
//! the runner fetches once, then hands the text over.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::Result;

pub trait DocumentSource {
    /// Raw document text for `id` (a URL or a path, depending on the source).
    fn fetch(&self, id: &str) -> Result<String>;
}

/// Reads `id` as a local path.
pub struct FileSource;

impl DocumentSource for FileSource {
    fn fetch(&self, id: &str) -> Result<String> {
        Ok(fs::read_to_string(id)?)
    }
}

/// A saved snapshot when one exists, else the remote source.
/// Never writes the snapshot itself.
pub struct LocalFirst<S> {
    pub snapshot: PathBuf,
    pub remote: S,
}

impl<S: DocumentSource> DocumentSource for LocalFirst<S> {
    fn fetch(&self, id: &str) -> Result<String> {
        if self.snapshot.is_file() {
            info!("using local snapshot {}", self.snapshot.display());
            return Ok(fs::read_to_string(&self.snapshot)?);
        }
        self.remote.fetch(id)
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch(&self, id: &str) -> Result<String> {
        (**self).fetch(id)
    }
}

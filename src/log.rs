// src/log.rs
//! Tracing setup for the binary. Library code only emits events.
//!
//! Filter comes from `RUST_LOG` (default `info`). Lines carry the elapsed
//! time since start, and can be mirrored into a plain-text log file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::Result;
use crate::file::ensure_directory;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(Uptime::default())
        .with_target(false);

    let file = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_directory(parent)?;
            }
            let f = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(f))
                    .with_timer(Uptime::default())
                    .with_ansi(false),
            )
        }
        None => None,
    };

    // try_init fails only when a subscriber is already set (tests, embedding)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_log_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("run.log");
        init(Some(&path)).unwrap();
        init(None).unwrap();
        assert!(path.is_file());
    }
}

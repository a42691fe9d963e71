//! Ingest error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by ingest and export operations.
///
/// Malformed records are never errors; they degrade to empty fields. Only
/// missing inputs and I/O failures are fatal, and they surface before any
/// partial output is produced.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("input not found: {path}")]
    MissingInput { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

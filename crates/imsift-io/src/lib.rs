//! imsift-io: ingest and export for the imsift systematic-review toolkit
//!
//! Source adapters parse RIS exports and spreadsheet CSVs into the raw
//! field maps `imsift-core` normalizes, and the export module writes the
//! engine's three output sets back out as CSV tables. Individual malformed
//! entries degrade to missing fields and flow through; only an absent input
//! path is a fatal error.

pub mod error;
pub mod export;
pub mod merge;
pub mod ris;
pub mod tabular;

pub use error::IngestError;
pub use merge::{load_csv_dir, load_ris_dir, merge_sources};

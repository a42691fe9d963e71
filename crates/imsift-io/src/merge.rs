//! Source merging
//!
//! Loads every export file from the source directories and concatenates the
//! results into one raw pool, tagging each record with its source file and
//! kind. Files are visited in name order so `record_id` assignment
//! downstream is reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use imsift_core::domain::{fields, RawRecord};

use crate::error::IngestError;
use crate::{ris, tabular};

/// Load all `*.ris` files from a directory.
pub fn load_ris_dir(dir: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let mut records = Vec::new();
    for path in files_with_extension(dir, "ris")? {
        // Exports arrive in assorted encodings; parse what survives a
        // lossy UTF-8 read rather than failing the file.
        let content = String::from_utf8_lossy(&fs::read(&path)?).into_owned();
        records.extend(tag_source(ris::parse(&content), &path, "ris"));
    }
    Ok(records)
}

/// Load all `*.csv` files from a directory.
pub fn load_csv_dir(dir: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let mut records = Vec::new();
    for path in files_with_extension(dir, "csv")? {
        let content = String::from_utf8_lossy(&fs::read(&path)?).into_owned();
        records.extend(tag_source(
            tabular::read_csv(content.as_bytes())?,
            &path,
            "csv",
        ));
    }
    Ok(records)
}

/// Merge RIS and CSV source directories into one raw record pool, RIS
/// sources first. Either directory may be omitted; a present but missing
/// path is fatal.
pub fn merge_sources(
    ris_dir: Option<&Path>,
    csv_dir: Option<&Path>,
) -> Result<Vec<RawRecord>, IngestError> {
    let mut records = Vec::new();
    if let Some(dir) = ris_dir {
        records.extend(load_ris_dir(dir)?);
    }
    if let Some(dir) = csv_dir {
        records.extend(load_csv_dir(dir)?);
    }
    Ok(records)
}

fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, IngestError> {
    if !dir.is_dir() {
        return Err(IngestError::MissingInput {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        })
        .collect();
    paths.sort();
    Ok(paths)
}

fn tag_source(
    mut records: Vec<RawRecord>,
    path: &Path,
    source_type: &str,
) -> Vec<RawRecord> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    for record in &mut records {
        record.set(fields::SOURCE_FILE, file_name.clone());
        record.set(fields::SOURCE_TYPE, source_type);
    }
    records
}

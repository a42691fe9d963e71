//! CSV report writers for the engine's three output sets
//!
//! Column layout is fixed and explicit so the reports are diffable between
//! runs: the kept sheet carries the record columns plus the two screening
//! placeholders, the excluded sheet carries the full original fields for
//! audit, and the decision log is one row per discard.

use std::io::Write;

use imsift_core::{Partition, Record, ScreenedRecord};

use crate::error::IngestError;

const RECORD_HEADERS: [&str; 9] = [
    "record_id",
    "title",
    "normalized_title",
    "authors",
    "year",
    "journal",
    "identifier",
    "url",
    "abstract",
];

fn record_row(record: &Record) -> Vec<String> {
    vec![
        record.record_id.to_string(),
        record.title.clone(),
        record.normalized_title.clone(),
        record.authors.clone(),
        record.year.map(|y| y.to_string()).unwrap_or_default(),
        record.journal.clone(),
        record.identifier.clone(),
        record.url.clone(),
        record.abstract_text.clone(),
    ]
}

/// Write the kept set, including the screening placeholder columns.
pub fn write_kept_csv<W: Write>(kept: &[ScreenedRecord], writer: W) -> Result<(), IngestError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut headers: Vec<&str> = RECORD_HEADERS.to_vec();
    headers.push("inclusion_decision");
    headers.push("exclusion_reason");
    csv_writer.write_record(&headers)?;

    for screened in kept {
        let mut row = record_row(&screened.record);
        row.push(screened.inclusion_decision.clone());
        row.push(screened.exclusion_reason.clone());
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the excluded set with full original fields, for audit.
pub fn write_excluded_csv<W: Write>(excluded: &[Record], writer: W) -> Result<(), IngestError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(RECORD_HEADERS)?;
    for record in excluded {
        csv_writer.write_record(record_row(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the duplicate-decision log.
pub fn write_decisions_csv<W: Write>(
    partition: &Partition,
    writer: W,
) -> Result<(), IngestError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["discarded_id", "kept_id", "rule", "score", "identifier"])?;
    for decision in &partition.decisions {
        csv_writer.write_record([
            decision.discarded_id.to_string(),
            decision.kept_id.to_string(),
            decision.rule.to_string(),
            format!("{:.0}", decision.score),
            decision.identifier.clone(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

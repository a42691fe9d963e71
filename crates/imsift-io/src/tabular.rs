//! CSV ingestion with header mapping
//!
//! Spreadsheet exports (Google Scholar and friends) disagree on header
//! names. Headers are case-folded and mapped through a synonym table onto
//! the canonical field names; unrecognized columns are dropped.

use std::io::Read;

use imsift_core::domain::{fields, RawRecord};

use crate::error::IngestError;

/// Map a source header onto a canonical field name, or `None` to drop the
/// column.
fn canonical_header(header: &str) -> Option<&'static str> {
    match header.trim().to_lowercase().as_str() {
        "title" => Some(fields::TITLE),
        "authors" | "author" => Some(fields::AUTHORS),
        "year" | "publication year" => Some(fields::YEAR),
        "journal" | "source title" => Some(fields::JOURNAL),
        "doi" => Some(fields::DOI),
        "url" | "link" => Some(fields::URL),
        "abstract" | "description" => Some(fields::ABSTRACT),
        _ => None,
    }
}

/// Read CSV content into raw records.
///
/// Rows shorter than the header are padded with empty fields rather than
/// rejected; blank cells are simply absent from the record.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let header_fields: Vec<Option<&'static str>> = csv_reader
        .headers()?
        .iter()
        .map(canonical_header)
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = RawRecord::new();
        for (i, field) in header_fields.iter().enumerate() {
            let (Some(field), Some(value)) = (field, row.get(i)) else {
                continue;
            };
            let value = value.trim();
            if !value.is_empty() {
                record.set(field, value);
            }
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_maps_headers() {
        let csv = "Title,Author,Publication Year,Source Title,DOI,Link,Description\n\
                   A Paper,\"Smith, J.\",2020,Nature,10.1/a,https://x,An abstract\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.get(fields::TITLE), Some("A Paper"));
        assert_eq!(record.get(fields::AUTHORS), Some("Smith, J."));
        assert_eq!(record.get(fields::YEAR), Some("2020"));
        assert_eq!(record.get(fields::JOURNAL), Some("Nature"));
        assert_eq!(record.get(fields::DOI), Some("10.1/a"));
        assert_eq!(record.get(fields::URL), Some("https://x"));
        assert_eq!(record.get(fields::ABSTRACT), Some("An abstract"));
    }

    #[test]
    fn test_unknown_columns_dropped() {
        let csv = "title,citations,year\nT,42,2019\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].get(fields::TITLE), Some("T"));
        assert_eq!(records[0].get(fields::YEAR), Some("2019"));
        assert_eq!(records[0].get("citations"), None);
    }

    #[test]
    fn test_short_rows_tolerated() {
        let csv = "title,year,doi\nOnly A Title\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(fields::TITLE), Some("Only A Title"));
        assert_eq!(records[0].get(fields::YEAR), None);
    }

    #[test]
    fn test_blank_cells_absent() {
        let csv = "title,year\nT,\n";
        let records = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].get(fields::YEAR), None);
    }

    #[test]
    fn test_empty_csv() {
        let records = read_csv("title,year\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }
}

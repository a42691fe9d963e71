//! Record normalization
//!
//! Converts raw heterogeneous field maps into canonical [`Record`]s. Pure
//! functions, no error conditions: malformed input degrades to empty fields
//! or an absent year, never fails.

use unicode_normalization::UnicodeNormalization;

use crate::domain::{fields, RawRecord, Record};
use crate::identifiers::{clean_doi, extract_year};

/// Normalize a title for comparison
///
/// - Unicode NFKD fold, keeping only ASCII alphanumerics and whitespace
/// - Converts to lowercase
/// - Collapses whitespace runs to single spaces
pub fn normalize_title(title: &str) -> String {
    let filtered: String = title
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();

    collapse_whitespace(&filtered.to_lowercase())
        .trim()
        .to_string()
}

/// Collapse multiple whitespace characters into a single space
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_ascii_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}

/// Normalize one raw record into a canonical [`Record`].
///
/// All text fields are trimmed, missing fields become empty strings, the
/// year is extracted from any 4-digit pattern, and the identifier is taken
/// from the `doi` field and cleaned.
pub fn normalize_record(raw: &RawRecord, record_id: u32) -> Record {
    let title = raw.get_or_empty(fields::TITLE).trim().to_string();

    Record {
        record_id,
        normalized_title: normalize_title(&title),
        title,
        authors: raw.get_or_empty(fields::AUTHORS).trim().to_string(),
        year: extract_year(raw.get_or_empty(fields::YEAR)),
        journal: raw.get_or_empty(fields::JOURNAL).trim().to_string(),
        identifier: clean_doi(raw.get_or_empty(fields::DOI)),
        url: raw.get_or_empty(fields::URL).trim().to_string(),
        abstract_text: raw.get_or_empty(fields::ABSTRACT).trim().to_string(),
    }
}

/// Normalize a batch of raw records, assigning `record_id`s 1..=n in input
/// order. Input order is the tiebreak order everywhere downstream, so the
/// assignment here fixes the run's determinism.
pub fn normalize_records(raws: &[RawRecord]) -> Vec<Record> {
    raws.iter()
        .enumerate()
        .map(|(i, raw)| normalize_record(raw, i as u32 + 1))
        .collect()
}

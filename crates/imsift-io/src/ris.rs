//! RIS parser
//!
//! Parses RIS (Research Information Systems) export files into raw field
//! maps. RIS uses tagged lines of the form `XX  - value`; an entry opens
//! with `TY` and closes with `ER`. Only the bibliographic tags the review
//! pipeline needs are mapped; everything else is ignored. Unparseable lines
//! are skipped, never fatal.

use imsift_core::domain::{fields, RawRecord};

/// Parse a RIS document into raw records.
pub fn parse(input: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut current: Option<EntryBuilder> = None;

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((tag, value)) = parse_ris_line(line) else {
            continue;
        };

        match tag {
            "TY" => {
                // Start of a new entry; flush any unterminated predecessor.
                if let Some(entry) = current.take() {
                    records.push(entry.finish());
                }
                current = Some(EntryBuilder::default());
            }
            "ER" => {
                if let Some(entry) = current.take() {
                    records.push(entry.finish());
                }
            }
            _ => {
                if let Some(entry) = current.as_mut() {
                    entry.add_tag(tag, value);
                }
            }
        }
    }

    // Entry without a closing ER tag
    if let Some(entry) = current.take() {
        records.push(entry.finish());
    }

    records
}

#[derive(Default)]
struct EntryBuilder {
    record: RawRecord,
    authors: Vec<String>,
}

impl EntryBuilder {
    fn add_tag(&mut self, tag: &str, value: &str) {
        let value = value.trim();
        match tag {
            "TI" | "T1" => self.record.set(fields::TITLE, value),
            "AU" | "A1" => self.authors.push(value.to_string()),
            "JO" | "JF" | "T2" => self.record.set(fields::JOURNAL, value),
            "PY" | "Y1" => self.record.set(fields::YEAR, value),
            "DO" => self.record.set(fields::DOI, value),
            "UR" => self.record.set(fields::URL, value),
            "AB" => self.record.set(fields::ABSTRACT, value),
            _ => {}
        }
    }

    fn finish(mut self) -> RawRecord {
        if !self.authors.is_empty() {
            self.record.set(fields::AUTHORS, self.authors.join("; "));
        }
        self.record
    }
}

/// Parse a single RIS line into tag and value.
///
/// Standard form is `XX  - value`; some exporters emit `XX - value` or
/// `XX- value`, all accepted.
fn parse_ris_line(line: &str) -> Option<(&str, &str)> {
    if line.len() < 4 || !line.is_char_boundary(2) {
        return None;
    }

    let tag = &line[0..2];
    if !tag
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return None;
    }

    let rest = &line[2..];
    let value = rest
        .strip_prefix("  - ")
        .or_else(|| rest.strip_prefix(" - "))
        .or_else(|| rest.strip_prefix("- "))?;

    Some((tag, value))
}

//! Bibliographic record data structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical field names recognized on raw records.
///
/// Ingest adapters map source-specific headers and tags onto these names;
/// the normalizer reads them back out. Unknown fields are carried along
/// untouched.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const AUTHORS: &str = "authors";
    pub const YEAR: &str = "year";
    pub const JOURNAL: &str = "journal";
    pub const DOI: &str = "doi";
    pub const URL: &str = "url";
    pub const ABSTRACT: &str = "abstract";
    pub const SOURCE_FILE: &str = "source_file";
    pub const SOURCE_TYPE: &str = "source_type";
}

/// A raw record as delivered by an ingest source: an ordered mapping from
/// field name to text value. Missing fields are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Get a field value, or `None` if the field is absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Get a field value, treating absence as the empty string.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Iterate over all fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// One normalized bibliographic entry.
///
/// `record_id` is assigned once per run, is unique and stable for the run,
/// and is the only field used to cross-reference duplicate decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub record_id: u32,
    pub title: String,
    /// Lowercased title with everything outside `[a-z0-9 ]` removed and
    /// whitespace runs collapsed; the comparison key for fuzzy matching.
    pub normalized_title: String,
    pub authors: String,
    pub year: Option<i32>,
    pub journal: String,
    /// Cleaned unique-ish external key (e.g. a DOI). Empty string means
    /// "absent", not "invalid".
    pub identifier: String,
    pub url: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

/// A kept record augmented with the two placeholder fields filled in during
/// downstream human screening. Both start empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub inclusion_decision: String,
    pub exclusion_reason: String,
}

impl ScreenedRecord {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            inclusion_decision: String::new(),
            exclusion_reason: String::new(),
        }
    }
}

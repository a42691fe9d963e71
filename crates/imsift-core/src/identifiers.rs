//! Identifier and year cleaning
//!
//! Bibliographic exports carry DOIs in many shapes: resolver URLs, `doi:`
//! labels, mixed case. Everything here folds them to one canonical form so
//! that exact-key grouping can use plain string equality.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR_REGEX: Regex = Regex::new(r"\d{4}").unwrap();
}

/// Clean a DOI-like identifier for use as a grouping key.
///
/// Strips resolver URL prefixes and a leading `doi:` label, trims, and
/// lowercases. Returns the empty string for blank input; empty means
/// "absent".
pub fn clean_doi(raw: &str) -> String {
    let mut doi = raw.trim().to_lowercase();

    // Label first so "doi:https://doi.org/..." unwraps fully in one pass.
    let prefixes = [
        "doi:",
        "https://doi.org/",
        "http://doi.org/",
        "https://dx.doi.org/",
        "http://dx.doi.org/",
    ];
    for prefix in prefixes {
        if let Some(rest) = doi.strip_prefix(prefix) {
            doi = rest.trim_start().to_string();
        }
    }

    doi.trim().to_string()
}

/// Extract a publication year from an arbitrary source representation.
///
/// Takes the first 4-digit run found anywhere in the text (`"2019"`,
/// `"2019/05/01"`, `"c2019"` all yield 2019). Returns `None` when no
/// 4-digit pattern is present; malformed input never fails.
pub fn extract_year(raw: &str) -> Option<i32> {
    YEAR_REGEX
        .find(raw)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

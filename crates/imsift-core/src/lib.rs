//! imsift-core: Core library for the imsift systematic-review toolkit
//!
//! This library provides pure Rust implementations of:
//! - Bibliographic record normalization (titles, years, DOIs)
//! - Deduplication (exact identifier grouping + fuzzy title matching)
//! - An auditable duplicate-decision log and kept/excluded partition
//! - Heuristic keyword screening suggestions for title/abstract review
//!
//! All operations are synchronous, in-memory, and deterministic: given the
//! same input records and configuration, repeated runs produce identical
//! output. File ingestion and report writing live in `imsift-io`.

pub mod deduplication;
pub mod domain;
pub mod identifiers;
pub mod normalize;
pub mod screening;

// Re-export main types for convenience
pub use deduplication::{
    deduplicate, deduplicate_with_scorer, DeduplicationConfig, DuplicateDecision, DuplicateRule,
    LevenshteinRatio, Partition, SimilarityScorer,
};
pub use domain::{RawRecord, Record, ScreenedRecord};
pub use normalize::{normalize_record, normalize_records, normalize_title};
pub use screening::{autoscreen, ExclusionRule, InclusionRule, ScreeningRules, Suggestion};

/// Returns the version of imsift-core
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

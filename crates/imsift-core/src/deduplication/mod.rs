//! Deduplication engine
//!
//! Partitions a pool of normalized records into survivors and discards in
//! two passes: exact grouping on the cleaned identifier, then fuzzy title
//! matching (gated by year proximity) over whatever has no identifier.
//! Every discard is recorded as a [`DuplicateDecision`] so the outcome is
//! auditable record by record.

mod grouping;
mod matching;
mod partition;
mod similarity;

pub use partition::{DuplicateDecision, DuplicateRule, Partition};
pub use similarity::{LevenshteinRatio, SimilarityScorer};

use serde::{Deserialize, Serialize};

use crate::domain::Record;
use partition::PartitionBuilder;

/// Configuration for a deduplication run.
///
/// Passed explicitly at call time; there is no ambient or environment-driven
/// state, so the same process can run the engine at several thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeduplicationConfig {
    /// Minimum title-similarity score (0-100) to treat two records as
    /// duplicates. Records scoring exactly at the threshold match.
    pub similarity_threshold: f64,
    /// Maximum absolute year difference allowed for a title-similarity
    /// match. Absent years never block a match.
    pub year_window: i32,
}

impl Default for DeduplicationConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 92.0,
            year_window: 1,
        }
    }
}

/// Deduplicate a record pool with the built-in edit-distance scorer.
pub fn deduplicate(records: Vec<Record>, config: &DeduplicationConfig) -> Partition {
    deduplicate_with_scorer(records, config, &LevenshteinRatio)
}

/// Deduplicate a record pool with a caller-supplied similarity scorer.
///
/// The scorer only influences which title pairs match; the control flow and
/// tie-breaking policies are fixed. Stateless and deterministic: iteration
/// is in ascending `record_id` order wherever ties or comparisons occur.
pub fn deduplicate_with_scorer(
    mut records: Vec<Record>,
    config: &DeduplicationConfig,
    scorer: &dyn SimilarityScorer,
) -> Partition {
    records.sort_by_key(|r| r.record_id);

    let mut builder = PartitionBuilder::new();
    let unresolved = grouping::resolve_identifier_groups(records, &mut builder);
    matching::resolve_title_clusters(unresolved, config, scorer, &mut builder);
    builder.finish()
}

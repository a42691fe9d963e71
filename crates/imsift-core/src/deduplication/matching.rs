//! Approximate title matching for identifier-less records
//!
//! Single-pass seed-scan clustering: each unvisited record seeds a cluster
//! and scans every later record; candidates join when the year gate and the
//! similarity threshold both pass. The seed always survives its cluster
//! (first-wins), unlike the identifier stage's abstract-length tie-break.
//! O(n²) over the unresolved remainder, acceptable at hundreds of records.

use crate::domain::Record;

use super::partition::{DuplicateDecision, DuplicateRule, PartitionBuilder};
use super::{DeduplicationConfig, SimilarityScorer};

/// Cluster unresolved records by title similarity, feeding survivors and
/// discards into the builder. `records` must arrive in ascending
/// `record_id` order.
pub(crate) fn resolve_title_clusters(
    records: Vec<Record>,
    config: &DeduplicationConfig,
    scorer: &dyn SimilarityScorer,
    builder: &mut PartitionBuilder,
) {
    let mut visited = vec![false; records.len()];

    for i in 0..records.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        let seed = &records[i];

        for j in (i + 1)..records.len() {
            if visited[j] {
                continue;
            }
            let candidate = &records[j];

            // Year-proximity gate; absent years never block a match.
            if let (Some(seed_year), Some(candidate_year)) = (seed.year, candidate.year) {
                if (seed_year - candidate_year).abs() > config.year_window {
                    continue;
                }
            }

            let score = scorer.score(&seed.normalized_title, &candidate.normalized_title);
            if score >= config.similarity_threshold {
                visited[j] = true;
                let decision = DuplicateDecision {
                    discarded_id: candidate.record_id,
                    kept_id: seed.record_id,
                    rule: DuplicateRule::DuplicateTitle,
                    score,
                    identifier: String::new(),
                };
                builder.discard(candidate.clone(), decision);
            }
        }

        builder.keep(seed.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str, year: Option<i32>) -> Record {
        Record {
            record_id: id,
            title: title.to_string(),
            normalized_title: crate::normalize::normalize_title(title),
            authors: String::new(),
            year,
            journal: String::new(),
            identifier: String::new(),
            url: String::new(),
            abstract_text: String::new(),
        }
    }

    fn run(records: Vec<Record>, config: &DeduplicationConfig) -> super::super::Partition {
        let mut builder = PartitionBuilder::new();
        resolve_title_clusters(records, config, &super::super::LevenshteinRatio, &mut builder);
        builder.finish()
    }

    #[test]
    fn test_identical_normalized_titles_cluster() {
        let partition = run(
            vec![
                record(1, "Deep Learning: A Survey", Some(2020)),
                record(2, "Deep learning - a survey!", Some(2020)),
            ],
            &DeduplicationConfig::default(),
        );
        assert_eq!(partition.kept.len(), 1);
        assert_eq!(partition.kept[0].record.record_id, 1);
        let decision = &partition.decisions[0];
        assert_eq!(decision.rule, DuplicateRule::DuplicateTitle);
        assert_eq!(decision.score, 100.0);
        assert_eq!(decision.identifier, "");
    }

    #[test]
    fn test_seed_is_always_the_survivor() {
        // First-wins policy: no re-ranking within a title cluster.
        let partition = run(
            vec![
                record(3, "Machine Learning Basics", None),
                record(7, "Machine Learning Basics", None),
                record(9, "Machine Learning Basics", None),
            ],
            &DeduplicationConfig::default(),
        );
        assert_eq!(partition.kept.len(), 1);
        assert_eq!(partition.kept[0].record.record_id, 3);
        assert!(partition.decisions.iter().all(|d| d.kept_id == 3));
    }

    #[test]
    fn test_year_gate_blocks_distant_years() {
        let partition = run(
            vec![
                record(1, "Same Title", Some(2015)),
                record(2, "Same Title", Some(2020)),
            ],
            &DeduplicationConfig::default(),
        );
        assert_eq!(partition.kept.len(), 2);
        assert!(partition.decisions.is_empty());
    }

    #[test]
    fn test_absent_year_never_blocks() {
        let partition = run(
            vec![
                record(1, "Same Title", None),
                record(2, "Same Title", Some(1990)),
            ],
            &DeduplicationConfig::default(),
        );
        assert_eq!(partition.kept.len(), 1);
        assert_eq!(partition.decisions.len(), 1);
    }

    #[test]
    fn test_dissimilar_titles_stay_apart() {
        let partition = run(
            vec![
                record(1, "Quantum Computing Fundamentals", Some(2020)),
                record(2, "School Leadership in Rural Areas", Some(2020)),
            ],
            &DeduplicationConfig::default(),
        );
        assert_eq!(partition.kept.len(), 2);
    }

    #[test]
    fn test_visited_candidate_not_rescanned() {
        // Record 2 joins record 1's cluster, so it can never seed its own
        // cluster or be claimed again by record 3.
        let partition = run(
            vec![
                record(1, "Growth Mindset in Middle School", Some(2019)),
                record(2, "Growth Mindset in Middle School", Some(2019)),
                record(3, "Growth Mindset in Middle School", Some(2019)),
            ],
            &DeduplicationConfig::default(),
        );
        assert_eq!(partition.kept.len(), 1);
        assert_eq!(partition.decisions.len(), 2);
        let discarded: Vec<u32> = partition.decisions.iter().map(|d| d.discarded_id).collect();
        assert_eq!(discarded, vec![2, 3]);
    }
}

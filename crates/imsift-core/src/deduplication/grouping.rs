//! Exact-key grouping on the cleaned identifier
//!
//! Records sharing a non-empty identifier collapse to a single survivor;
//! records with no identifier pass through untouched for the fuzzy title
//! stage.

use std::collections::BTreeMap;

use crate::domain::Record;

use super::partition::{DuplicateDecision, DuplicateRule, PartitionBuilder};

/// Resolve identifier groups, feeding survivors and discards into the
/// builder. Returns the records with an empty identifier, still in
/// ascending `record_id` order, for the approximate matcher.
///
/// Groups are visited in identifier order (BTreeMap) and members in
/// `record_id` order, so the decision log is reproducible run to run.
pub(crate) fn resolve_identifier_groups(
    records: Vec<Record>,
    builder: &mut PartitionBuilder,
) -> Vec<Record> {
    let mut groups: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    let mut unresolved = Vec::new();

    for record in records {
        if record.identifier.is_empty() {
            unresolved.push(record);
        } else {
            groups
                .entry(record.identifier.clone())
                .or_default()
                .push(record);
        }
    }

    for (identifier, members) in groups {
        let survivor_id = select_primary(&members);
        for record in members {
            if record.record_id == survivor_id {
                builder.keep(record);
            } else {
                let decision = DuplicateDecision {
                    discarded_id: record.record_id,
                    kept_id: survivor_id,
                    rule: DuplicateRule::DuplicateIdentifier,
                    score: 100.0,
                    identifier: identifier.clone(),
                };
                builder.discard(record, decision);
            }
        }
    }

    unresolved
}

/// Primary-selection policy for an identifier group: the longest abstract
/// (by character count) wins; ties go to the lowest `record_id`. Members
/// arrive in ascending `record_id` order, so strict-greater comparison
/// gives the earliest record on ties.
fn select_primary(members: &[Record]) -> u32 {
    let mut best = &members[0];
    for candidate in &members[1..] {
        if candidate.abstract_text.chars().count() > best.abstract_text.chars().count() {
            best = candidate;
        }
    }
    best.record_id
}

//! Decision recording and output partition
//!
//! Accumulates survivors and discards as the two matching stages run, then
//! exposes the final three-way partition: kept set, excluded set, and the
//! full duplicate-decision log.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Record, ScreenedRecord};

/// Which rule subsumed a discarded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateRule {
    DuplicateIdentifier,
    DuplicateTitle,
}

impl std::fmt::Display for DuplicateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateRule::DuplicateIdentifier => write!(f, "duplicate_identifier"),
            DuplicateRule::DuplicateTitle => write!(f, "duplicate_title"),
        }
    }
}

/// One discard event: which record was subsumed, by whom, under which rule,
/// and with what confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateDecision {
    pub discarded_id: u32,
    pub kept_id: u32,
    pub rule: DuplicateRule,
    /// Confidence 0-100; always 100 for exact-identifier matches.
    pub score: f64,
    /// The shared identifier for identifier-rule decisions, else empty.
    pub identifier: String,
}

/// Final output of a deduplication run.
///
/// Every input record appears in exactly one of `kept` and `excluded`;
/// `kept` holds one survivor per cluster (plus untouched singletons) in
/// ascending `record_id` order, and `decisions` holds one entry per
/// excluded record, in the order the discards were made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub kept: Vec<ScreenedRecord>,
    pub excluded: Vec<Record>,
    pub decisions: Vec<DuplicateDecision>,
}

/// Accumulator the matching stages feed survivors and discards into.
pub(crate) struct PartitionBuilder {
    kept: Vec<Record>,
    excluded: Vec<Record>,
    decisions: Vec<DuplicateDecision>,
    discarded_ids: HashSet<u32>,
}

impl PartitionBuilder {
    pub(crate) fn new() -> Self {
        Self {
            kept: Vec::new(),
            excluded: Vec::new(),
            decisions: Vec::new(),
            discarded_ids: HashSet::new(),
        }
    }

    /// Record a cluster survivor (or an untouched singleton).
    pub(crate) fn keep(&mut self, record: Record) {
        self.kept.push(record);
    }

    /// Record a discard. A record can be discarded at most once, by exactly
    /// one surviving record; the matching stages uphold this by marking
    /// members visited, and we assert it here.
    pub(crate) fn discard(&mut self, record: Record, decision: DuplicateDecision) {
        debug_assert_eq!(record.record_id, decision.discarded_id);
        debug_assert_ne!(decision.discarded_id, decision.kept_id);
        let first_discard = self.discarded_ids.insert(decision.discarded_id);
        debug_assert!(
            first_discard,
            "record {} discarded twice",
            decision.discarded_id
        );

        self.excluded.push(record);
        self.decisions.push(decision);
    }

    /// Finalize: survivors sorted by `record_id` and wrapped with the empty
    /// screening placeholders; excluded and decisions stay in discard order.
    pub(crate) fn finish(mut self) -> Partition {
        self.kept.sort_by_key(|r| r.record_id);
        debug_assert!(self
            .kept
            .iter()
            .all(|r| !self.discarded_ids.contains(&r.record_id)));

        Partition {
            kept: self.kept.into_iter().map(ScreenedRecord::new).collect(),
            excluded: self.excluded,
            decisions: self.decisions,
        }
    }
}

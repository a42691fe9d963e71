//! Keyword rule definitions
//!
//! Rules match by substring over [`screen_text`](super::screen_text)-normalized
//! title+abstract text. Rule terms are normalized the same way before
//! comparison, so `"Meta-Analysis"` in a rule matches `"meta analysis"` in
//! text.

use serde::{Deserialize, Serialize};

use super::screen_text;

/// A rule suggesting exclusion: fires when any trigger term is present and
/// no rescue term is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionRule {
    /// Reason code written into `exclusion_reason` (e.g. `"THEORY_ONLY"`).
    pub reason: String,
    /// Trigger terms; at least one must appear.
    pub any_of: Vec<String>,
    /// Rescue terms; any hit suppresses the rule.
    #[serde(default)]
    pub none_of: Vec<String>,
}

/// A high-confidence inclusion rule: every term group must have at least
/// one hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InclusionRule {
    pub all_of: Vec<Vec<String>>,
}

/// An ordered rule set: exclusions are tried first, in order, first match
/// wins; the inclusion rule is consulted only when no exclusion fires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRules {
    pub exclusions: Vec<ExclusionRule>,
    #[serde(default)]
    pub inclusion: Option<InclusionRule>,
}

/// Outcome of evaluating a rule set against one record's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Exclude(String),
    Include,
    Undecided,
}

impl ScreeningRules {
    /// Evaluate against already-normalized text (see
    /// [`screen_text`](super::screen_text)).
    pub fn suggest(&self, text: &str) -> Suggestion {
        for rule in &self.exclusions {
            if any_term_in(text, &rule.any_of) && !any_term_in(text, &rule.none_of) {
                return Suggestion::Exclude(rule.reason.clone());
            }
        }

        if let Some(inclusion) = &self.inclusion {
            if !inclusion.all_of.is_empty()
                && inclusion.all_of.iter().all(|group| any_term_in(text, group))
            {
                return Suggestion::Include;
            }
        }

        Suggestion::Undecided
    }
}

fn any_term_in(text: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| {
        let term = screen_text(term);
        !term.is_empty() && text.contains(&term)
    })
}

//! Heuristic title/abstract screening suggestions
//!
//! Keyword rules pre-fill the two screening placeholders on kept records so
//! a human reviewer only has to touch the ambiguous middle. Suggestions are
//! written into blank fields only; an existing decision is never
//! overwritten.

mod rules;

pub use rules::{ExclusionRule, InclusionRule, ScreeningRules, Suggestion};

use crate::domain::ScreenedRecord;

/// Normalize free text for keyword matching: lowercase, every
/// non-alphanumeric character becomes a space, whitespace collapsed.
pub fn screen_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = true;

    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() {
            result.push(c);
            prev_was_space = false;
        } else if !prev_was_space {
            result.push(' ');
            prev_was_space = true;
        }
    }

    result.trim_end().to_string()
}

/// Apply a rule set to kept records, filling only blank screening fields.
///
/// Exclusions set `inclusion_decision = "no"` plus the rule's reason;
/// an inclusion hit sets `inclusion_decision = "yes"`; everything else is
/// left blank for human review.
pub fn autoscreen(records: &mut [ScreenedRecord], rules: &ScreeningRules) {
    for screened in records.iter_mut() {
        if !screened.inclusion_decision.is_empty() || !screened.exclusion_reason.is_empty() {
            continue;
        }

        let text = screen_text(&format!(
            "{} {}",
            screened.record.title, screened.record.abstract_text
        ));

        match rules.suggest(&text) {
            Suggestion::Exclude(reason) => {
                screened.inclusion_decision = "no".to_string();
                screened.exclusion_reason = reason;
            }
            Suggestion::Include => {
                screened.inclusion_decision = "yes".to_string();
            }
            Suggestion::Undecided => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    fn screened(title: &str, abstract_text: &str) -> ScreenedRecord {
        ScreenedRecord::new(Record {
            record_id: 1,
            title: title.to_string(),
            normalized_title: String::new(),
            authors: String::new(),
            year: None,
            journal: String::new(),
            identifier: String::new(),
            url: String::new(),
            abstract_text: abstract_text.to_string(),
        })
    }

    fn review_rules() -> ScreeningRules {
        ScreeningRules {
            exclusions: vec![ExclusionRule {
                reason: "NOT_PRIMARY_STUDY".to_string(),
                any_of: vec!["literature review".to_string(), "editorial".to_string()],
                none_of: vec!["empirical".to_string()],
            }],
            inclusion: Some(InclusionRule {
                all_of: vec![
                    vec!["leadership".to_string()],
                    vec!["achievement".to_string(), "test score".to_string()],
                ],
            }),
        }
    }

    #[test]
    fn test_screen_text_normalizes() {
        assert_eq!(screen_text("Meta-Analysis: A Review!"), "meta analysis a review");
        assert_eq!(screen_text("  Spaced   out  "), "spaced out");
        assert_eq!(screen_text(""), "");
    }

    #[test]
    fn test_autoscreen_excludes() {
        let mut kept = vec![screened("A Literature Review of X", "")];
        autoscreen(&mut kept, &review_rules());
        assert_eq!(kept[0].inclusion_decision, "no");
        assert_eq!(kept[0].exclusion_reason, "NOT_PRIMARY_STUDY");
    }

    #[test]
    fn test_autoscreen_rescue_term_blocks_exclusion() {
        let mut kept = vec![screened(
            "A Literature Review of X",
            "We also report an empirical study.",
        )];
        autoscreen(&mut kept, &review_rules());
        assert_eq!(kept[0].exclusion_reason, "");
    }

    #[test]
    fn test_autoscreen_includes() {
        let mut kept = vec![screened(
            "Leadership Effects",
            "Effects on student achievement were measured.",
        )];
        autoscreen(&mut kept, &review_rules());
        assert_eq!(kept[0].inclusion_decision, "yes");
        assert_eq!(kept[0].exclusion_reason, "");
    }

    #[test]
    fn test_autoscreen_leaves_ambiguous_blank() {
        let mut kept = vec![screened("Leadership Effects", "No outcome terms here.")];
        autoscreen(&mut kept, &review_rules());
        assert_eq!(kept[0].inclusion_decision, "");
    }

    #[test]
    fn test_autoscreen_never_overwrites_human_decision() {
        let mut kept = vec![screened("A Literature Review of X", "")];
        kept[0].inclusion_decision = "yes".to_string();
        autoscreen(&mut kept, &review_rules());
        assert_eq!(kept[0].inclusion_decision, "yes");
        assert_eq!(kept[0].exclusion_reason, "");
    }
}

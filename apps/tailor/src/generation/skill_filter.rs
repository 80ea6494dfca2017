//! Skill Filter — decides which profile phrases surface for a given JD.
//!
//! Relevance test: a candidate is kept when its folded form is a substring of
//! at least one ranked keyword (candidate-in-keyword). "CRM" survives against
//! the keyword "crm hygiene"; "CRM discipline" does not.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::fold_key;

/// Display cap for the domains / methods / platforms lines.
pub const SKILL_LINE_MAX_CHARS: usize = 400;
/// Display cap for the security line.
pub const SECURITY_LINE_MAX_CHARS: usize = 500;

/// Keep/drop partition of a candidate list. Every input lands in exactly one side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSelection {
    pub keep: Vec<String>,
    pub drop: Vec<String>,
}

/// Partitions `candidates` against `keywords`.
///
/// Case-insensitive duplicates of an earlier candidate always go to `drop`.
/// When nothing is relevant, the first `fallback_cap` distinct candidates are
/// kept instead, so `keep` is only empty for an empty input (or a zero cap).
pub fn filter_skills<S: AsRef<str>>(
    candidates: &[S],
    keywords: &[String],
    fallback_cap: usize,
) -> SkillSelection {
    let folded_keywords: Vec<String> = keywords.iter().map(|k| fold_key(k)).collect();

    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    let mut duplicates = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref().trim();
        let key = fold_key(candidate);
        if key.is_empty() || !seen.insert(key.clone()) {
            duplicates.push(candidate.to_string());
            continue;
        }
        let relevant = folded_keywords.iter().any(|kw| kw.contains(&key));
        distinct.push((candidate.to_string(), relevant));
    }

    let any_relevant = distinct.iter().any(|(_, relevant)| *relevant);

    let mut selection = SkillSelection::default();
    for (idx, (candidate, relevant)) in distinct.into_iter().enumerate() {
        let keep = if any_relevant {
            relevant
        } else {
            idx < fallback_cap
        };
        if keep {
            selection.keep.push(candidate);
        } else {
            selection.drop.push(candidate);
        }
    }
    selection.drop.extend(duplicates);
    selection
}

/// Joins with ", ", stopping before the first item that would push the line
/// past `max_chars`. Items are never cut, so "identity-first" either appears
/// whole or not at all.
pub fn join_capped<S: AsRef<str>>(items: &[S], max_chars: usize) -> String {
    let mut joined = String::new();
    let mut len = 0;
    for item in items {
        let item = item.as_ref().trim();
        if item.is_empty() {
            continue;
        }
        let sep = if joined.is_empty() { 0 } else { 2 };
        let next = len + sep + item.chars().count();
        if next > max_chars {
            break;
        }
        if sep > 0 {
            joined.push_str(", ");
        }
        joined.push_str(item);
        len = next;
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_candidate_in_keyword_is_kept() {
        let candidates = ["Prospecting", "Negotiation", "CRM"];
        let selection = filter_skills(&candidates, &kws(&["prospecting", "crm hygiene"]), 8);
        assert_eq!(selection.keep, vec!["Prospecting", "CRM"]);
        assert_eq!(selection.drop, vec!["Negotiation"]);
    }

    #[test]
    fn test_longer_candidate_than_keyword_is_dropped() {
        let candidates = ["CRM discipline"];
        let selection = filter_skills(&candidates, &kws(&["crm", "salesforce"]), 0);
        assert!(selection.keep.is_empty());
        assert_eq!(selection.drop, vec!["CRM discipline"]);
    }

    #[test]
    fn test_fallback_keeps_first_n_in_order() {
        let candidates = ["SaaS", "Cybersecurity", "Fintech", "Healthcare"];
        let selection = filter_skills(&candidates, &kws(&["kubernetes"]), 2);
        assert_eq!(selection.keep, vec!["SaaS", "Cybersecurity"]);
        assert_eq!(selection.drop, vec!["Fintech", "Healthcare"]);
    }

    #[test]
    fn test_fallback_with_no_keywords_at_all() {
        let candidates = ["SaaS", "Cybersecurity"];
        let selection = filter_skills(&candidates, &[], 6);
        assert_eq!(selection.keep, vec!["SaaS", "Cybersecurity"]);
        assert!(selection.drop.is_empty());
    }

    #[test]
    fn test_empty_candidates_yield_empty_selection() {
        let candidates: [&str; 0] = [];
        let selection = filter_skills(&candidates, &kws(&["saas"]), 6);
        assert_eq!(selection, SkillSelection::default());
    }

    #[test]
    fn test_duplicates_are_dropped_and_partition_is_complete() {
        let candidates = ["Salesforce", "salesforce", "HubSpot", "Café", "cafe"];
        let selection = filter_skills(&candidates, &kws(&["salesforce", "hubspot"]), 8);
        assert_eq!(selection.keep, vec!["Salesforce", "HubSpot"]);
        assert_eq!(selection.drop, vec!["Café", "salesforce", "cafe"]);
        assert_eq!(
            selection.keep.len() + selection.drop.len(),
            candidates.len()
        );
    }

    #[test]
    fn test_matching_is_accent_insensitive() {
        let candidates = ["Négociation"];
        let selection = filter_skills(&candidates, &kws(&["negociation"]), 0);
        assert_eq!(selection.keep, vec!["Négociation"]);
    }

    #[test]
    fn test_join_capped_joins_in_order() {
        assert_eq!(join_capped(&["SaaS", "Cybersecurity"], 400), "SaaS, Cybersecurity");
    }

    #[test]
    fn test_join_capped_never_splits_words() {
        let items = ["Salesforce", "HubSpot", "Outreach"];
        let joined = join_capped(&items, 15);
        assert_eq!(joined, "Salesforce");
        assert!(joined.chars().count() <= 15);
    }

    #[test]
    fn test_join_capped_keeps_hyphenated_items_whole() {
        assert_eq!(join_capped(&["endpoint", "identity-first"], 19), "endpoint");
        assert_eq!(join_capped(&["endpoint", "identity-first"], 18), "endpoint");
        assert_eq!(
            join_capped(&["endpoint", "identity-first"], 24),
            "endpoint, identity-first"
        );
    }

    #[test]
    fn test_join_capped_drops_item_longer_than_cap() {
        assert_eq!(join_capped(&["Salesforce/HubSpot"], 11), "");
        assert_eq!(join_capped(&["Salesforce/HubSpot", "CRM"], 11), "");
    }
}

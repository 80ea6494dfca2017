//! Which ranked JD keywords made it into the rendered text.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Coverage report written next to every rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Ranked keywords, in ranking order.
    pub jd_tokens: Vec<String>,
    /// Distinct ranked keywords found in the text, sorted.
    pub present: Vec<String>,
    /// Distinct ranked keywords not found, sorted.
    pub missing: Vec<String>,
    /// `100 * |present| / max(1, |jd_tokens|)`, one decimal, ties to even.
    pub coverage_percent: f64,
}

/// Case-insensitive substring coverage of `ranked` over `rendered_text`.
pub fn coverage(ranked: &[String], rendered_text: &str) -> CoverageReport {
    let haystack = rendered_text.to_lowercase();

    let mut present = BTreeSet::new();
    let mut missing = BTreeSet::new();
    for keyword in ranked {
        if haystack.contains(&keyword.to_lowercase()) {
            present.insert(keyword.clone());
        } else {
            missing.insert(keyword.clone());
        }
    }

    let ratio = 100.0 * present.len() as f64 / ranked.len().max(1) as f64;

    CoverageReport {
        jd_tokens: ranked.to_vec(),
        present: present.into_iter().collect(),
        missing: missing.into_iter().collect(),
        coverage_percent: round_one_decimal(ratio),
    }
}

/// Rounds to one decimal place, resolving exact halves to the even neighbour.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

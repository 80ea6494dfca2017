//! Clarifying questions triggered by what the job posting emphasizes.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::bullets::rewrite_bullet;
use crate::generation::keywords::{extract_keywords, DEFAULT_TOP_K};
use crate::models::answers::Answers;
use crate::text::prompt_hash;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// First 16 hex chars of the prompt's SHA-1.
    pub id: String,
    pub prompt: String,
}

/// (keyword fragments, prompt). A rule fires when any extracted keyword
/// contains any of its fragments.
const RULES: &[(&[&str], &str)] = &[
    (
        &["quota"],
        "What was your average quota attainment by role (%, quarters/years)?",
    ),
    (
        &["pipeline"],
        "What was your average qualified pipeline ($) and win rate?",
    ),
    (
        &["government", "public sector"],
        "List notable public-sector/enterprise logos relevant to this posting.",
    ),
    (
        &["rfp"],
        "Provide specific RFP wins or contributions (value, year).",
    ),
];

/// Questions for `jd_text`, in rule order, skipping ids in `already_asked`.
pub fn generate_questions(jd_text: &str, already_asked: &HashSet<String>) -> Vec<Question> {
    let keywords = extract_keywords(jd_text, DEFAULT_TOP_K);

    RULES
        .iter()
        .filter(|(fragments, _)| {
            keywords
                .iter()
                .any(|k| fragments.iter().any(|f| k.contains(f)))
        })
        .map(|(_, prompt)| Question {
            id: prompt_hash(prompt),
            prompt: prompt.to_string(),
        })
        .filter(|q| !already_asked.contains(&q.id))
        .collect()
}

/// Folds one response into `answers`.
///
/// Blank responses and questions already on record leave `answers` unchanged.
/// Otherwise the response is rewritten as a past-role bullet (injecting the
/// global extra keywords) and recorded against `company_slug`.
pub fn record_answer(
    answers: Answers,
    question: &Question,
    response: &str,
    company_slug: &str,
    now: DateTime<Utc>,
) -> Answers {
    if response.trim().is_empty() || answers.has_asked(&question.id) {
        debug!("Skipping question {}", question.id);
        return answers;
    }
    let rewritten = rewrite_bullet(response, false, &answers.global.extra_keywords);
    answers.record(&question.id, &question.prompt, &rewritten, company_slug, now)
}

//! Bullet Rewriter — turns a free-form answer into a résumé bullet.
//!
//! This is a fixed string transform, not grammar: past tense is produced by
//! appending "d" to a handful of action verbs ("close" → "closed", but also
//! "lead" → "leadd"). Callers and tests depend on exactly this output.

use once_cell::sync::Lazy;
use regex::Regex;

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(lead|manage|drive|own|close|build|coach)\b")
        .expect("action verb pattern is valid")
});

/// How many of the supplied keywords are considered for injection.
const INJECT_SCAN_LIMIT: usize = 2;

/// Rewrites `text` into bullet form.
///
/// - surrounding whitespace and trailing periods are removed
/// - for past roles, the action verbs get a "d" suffix (whole word, any case)
/// - at most one keyword is appended as `"; keyword"`: the first of the first
///   two keywords not already present in the sentence
/// - the result always ends in exactly one period
///
/// Not idempotent: a second pass sees the keyword injected by the first one
/// and may append the next keyword as well.
pub fn rewrite_bullet(text: &str, is_current: bool, inject_keywords: &[String]) -> String {
    let mut sentence = strip_trailing_periods(text).to_string();

    if !is_current {
        sentence = ACTION_VERB_RE.replace_all(&sentence, "${1}d").into_owned();
    }

    let lowered = sentence.to_lowercase();
    if let Some(keyword) = inject_keywords
        .iter()
        .take(INJECT_SCAN_LIMIT)
        .map(|k| strip_trailing_periods(k))
        .find(|k| !k.is_empty() && !lowered.contains(&k.to_lowercase()))
    {
        sentence.push_str("; ");
        sentence.push_str(keyword);
    }

    sentence.push('.');
    sentence
}

fn strip_trailing_periods(text: &str) -> &str {
    text.trim()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
}

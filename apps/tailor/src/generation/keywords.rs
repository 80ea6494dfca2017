//! Keyword Extractor — deterministic, frequency-ranked candidate terms from a raw JD.
//!
//! Two token streams share one frequency table:
//! - phrases: 2–4 whitespace-separated words, matched greedily left to right
//!   without overlap (a long run of words is consumed four at a time)
//! - singles: every word of three or more characters
//!
//! A word is a run of ASCII letters, optionally hyphen-joined ("identity-first").
//! Any candidate containing a stopword is discarded. No LLM calls here.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Default number of candidates returned by `extract_keywords`.
pub const DEFAULT_TOP_K: usize = 60;

/// Minimum length of a single-word candidate.
const MIN_SINGLE_LEN: usize = 3;

static PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-z]+(?:-[a-z]+)*(?:\s+[a-z]+(?:-[a-z]+)*){1,3}\b")
        .expect("phrase pattern is valid")
});

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+(?:-[a-z]+)*").expect("word pattern is valid"));

/// Articles, prepositions, pronouns, modal verbs and generic job-posting filler.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "to", "for", "with", "of", "in", "into", "on", "at", "from",
    "that", "this", "those", "these", "you", "your", "our", "we", "they", "i", "he", "she", "it",
    "their", "be", "is", "are", "was", "were", "as", "by", "about", "not", "will", "can",
    "should", "would", "could", "have", "has", "had", "if", "but", "so", "than", "then", "when",
    "where", "which", "who", "whose", "whom", "such", "etc", "per", "via", "within", "without",
    "among", "across", "under", "over", "more", "most", "less", "least", "few", "many", "new",
    "use", "used", "using", "also", "only", "other", "same", "own", "each", "every", "either",
    "neither", "both", "any", "all", "some", "no", "nor", "include", "including", "includes",
    "included", "open", "close", "free", "strong", "great", "fast", "nice", "role", "job",
    "position", "company", "team", "work", "remote", "salary", "pay", "compensation", "benefits",
    "manager", "director", "lead", "junior", "senior", "iii", "ii",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Returns true if the word is on the extractor's stopword list.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Extracts up to `top_k` distinct lowercase candidates from `text`,
/// ordered by descending frequency, then ascending lexical order.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    let text = text.to_lowercase();
    if text.trim().is_empty() || top_k == 0 {
        return Vec::new();
    }

    let phrases = PHRASE_RE
        .find_iter(&text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "));
    let singles = WORD_RE.find_iter(&text).map(|m| m.as_str().to_string());

    let mut freq: HashMap<String, u32> = HashMap::new();
    for candidate in phrases.chain(singles) {
        if candidate.len() < MIN_SINGLE_LEN {
            continue;
        }
        if candidate.split_whitespace().any(is_stopword) {
            continue;
        }
        *freq.entry(candidate).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, u32)> = freq.into_iter().collect();
    ranked.sort_by(|(a_term, a_count), (b_term, b_count)| {
        b_count.cmp(a_count).then_with(|| a_term.cmp(b_term))
    });

    ranked
        .into_iter()
        .take(top_k)
        .map(|(term, _)| term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMOKE_JD: &str = "Company: ExampleCorp
Role: Enterprise Account Executive (SaaS / Cybersecurity)
Requirements: prospecting, discovery, closing, CRM hygiene, endpoint, identity-first
";

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(extract_keywords("", DEFAULT_TOP_K).is_empty());
        assert!(extract_keywords("   \n\t ", DEFAULT_TOP_K).is_empty());
    }

    #[test]
    fn test_only_stopwords_returns_empty() {
        assert!(extract_keywords("the team and the role", DEFAULT_TOP_K).is_empty());
    }

    #[test]
    fn test_smoke_jd_full_ordering() {
        let keywords = extract_keywords(SMOKE_JD, DEFAULT_TOP_K);
        // Every candidate occurs once, so the order is purely lexical.
        assert_eq!(
            keywords,
            vec![
                "account",
                "closing",
                "crm",
                "crm hygiene",
                "cybersecurity",
                "discovery",
                "endpoint",
                "enterprise",
                "enterprise account executive",
                "examplecorp",
                "executive",
                "hygiene",
                "identity-first",
                "prospecting",
                "requirements",
                "saas",
            ]
        );
    }

    #[test]
    fn test_smoke_jd_contains_expected_terms() {
        let keywords = extract_keywords(SMOKE_JD, DEFAULT_TOP_K);
        for expected in ["prospecting", "discovery", "closing", "endpoint", "identity-first"] {
            assert!(
                keywords.iter().any(|k| k == expected),
                "missing {expected} in {keywords:?}"
            );
        }
    }

    #[test]
    fn test_phrase_with_stopword_is_discarded() {
        // "examplecorp\nrole" spans a line break but contains the stopword "role".
        let keywords = extract_keywords(SMOKE_JD, DEFAULT_TOP_K);
        assert!(!keywords.iter().any(|k| k.contains("role")));
        assert!(!keywords.iter().any(|k| k == "company"));
    }

    #[test]
    fn test_frequency_beats_lexical_order() {
        let jd = "Salesforce. Salesforce. Salesforce. Apex. Apex. Zendesk.";
        let keywords = extract_keywords(jd, DEFAULT_TOP_K);
        assert_eq!(keywords, vec!["salesforce", "apex", "zendesk"]);
    }

    #[test]
    fn test_phrases_and_singles_share_counts() {
        // "pipeline generation" appears twice as a phrase; each word twice as a single.
        let jd = "pipeline generation. pipeline generation. quota.";
        let keywords = extract_keywords(jd, DEFAULT_TOP_K);
        assert_eq!(
            keywords,
            vec!["generation", "pipeline", "pipeline generation", "quota"]
        );
    }

    #[test]
    fn test_long_word_runs_are_chunked_greedily() {
        let jd = "alpha bravo charlie delta echo foxtrot";
        let keywords = extract_keywords(jd, DEFAULT_TOP_K);
        assert!(keywords.contains(&"alpha bravo charlie delta".to_string()));
        assert!(keywords.contains(&"echo foxtrot".to_string()));
        assert!(!keywords.contains(&"bravo charlie".to_string()));
    }

    #[test]
    fn test_short_singles_are_dropped() {
        let keywords = extract_keywords("go ml ai rust", DEFAULT_TOP_K);
        assert!(keywords.contains(&"rust".to_string()));
        assert!(!keywords.contains(&"go".to_string()));
        assert!(!keywords.contains(&"ml".to_string()));
    }

    #[test]
    fn test_top_k_bounds_output() {
        let keywords = extract_keywords(SMOKE_JD, 3);
        assert_eq!(keywords, vec!["account", "closing", "crm"]);
    }

    #[test]
    fn test_output_is_lowercase_and_distinct() {
        let jd = "Kubernetes KUBERNETES kubernetes Terraform terraform";
        let keywords = extract_keywords(jd, DEFAULT_TOP_K);
        let unique: HashSet<_> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
        assert_eq!(keywords[0], "kubernetes");
    }

    #[test]
    fn test_is_stopword() {
        assert!(is_stopword("benefits"));
        assert!(is_stopword("team"));
        assert!(!is_stopword("prospecting"));
    }
}

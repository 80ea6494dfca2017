//! Keyword Ranking — pluggable, trait-based reordering of extracted keywords.
//!
//! Default: `PassthroughRanker` (no network, keeps extractor order).
//! With an API key: `LlmKeywordRanker` asks the model for the 35-45 keywords
//! that matter most to an ATS.
//!
//! Callers go through `rank_keywords`, which bounds the call with a timeout
//! and falls back to the first 40 raw candidates on any failure.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::generation::prompts::{KEYWORD_RANK_PROMPT_TEMPLATE, KEYWORD_RANK_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::text::dedupe_list;

/// Raw candidates used when ranking is unavailable.
pub const FALLBACK_LIMIT: usize = 40;
/// JD characters sent to the ranker.
pub const JD_PROMPT_CHARS: usize = 4000;
/// Candidates sent to the ranker.
pub const CANDIDATE_PROMPT_LIMIT: usize = 80;
/// Maximum keywords accepted back from the ranker.
pub const RANKED_LIMIT: usize = 45;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("ranking service failed: {0}")]
    Llm(#[from] LlmError),

    #[error("ranking timed out after {0:?}")]
    Timeout(Duration),

    #[error("ranker returned no keywords")]
    Empty,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Carried in `AppState` as `Arc<dyn KeywordRanker>`.
#[async_trait]
pub trait KeywordRanker: Send + Sync {
    /// Short backend name, logged with results.
    fn backend(&self) -> &'static str;

    async fn rank(&self, jd_text: &str, candidates: &[String]) -> Result<Vec<String>, RankError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PassthroughRanker
// ────────────────────────────────────────────────────────────────────────────

/// Keeps the extractor's order, capped like the fallback.
pub struct PassthroughRanker;

#[async_trait]
impl KeywordRanker for PassthroughRanker {
    fn backend(&self) -> &'static str {
        "passthrough"
    }

    async fn rank(&self, _jd_text: &str, candidates: &[String]) -> Result<Vec<String>, RankError> {
        Ok(fallback(candidates))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmKeywordRanker
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmKeywordRanker(pub LlmClient);

#[async_trait]
impl KeywordRanker for LlmKeywordRanker {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn rank(&self, jd_text: &str, candidates: &[String]) -> Result<Vec<String>, RankError> {
        let prompt = build_rank_prompt(jd_text, candidates);
        let system = format!("{KEYWORD_RANK_SYSTEM} {JSON_ONLY_SYSTEM}");
        let raw: Vec<String> = self.0.call_json(&prompt, &system).await?;
        accept_ranked(raw)
    }
}

fn build_rank_prompt(jd_text: &str, candidates: &[String]) -> String {
    let jd_head: String = jd_text.chars().take(JD_PROMPT_CHARS).collect();
    let limit = candidates.len().min(CANDIDATE_PROMPT_LIMIT);
    let listed = serde_json::to_string(&candidates[..limit]).unwrap_or_else(|_| "[]".to_string());
    KEYWORD_RANK_PROMPT_TEMPLATE
        .replace("{jd_text}", &jd_head)
        .replace("{candidates}", &listed)
}

/// Dedupes the ranker's answer and caps it; an empty answer is an error.
fn accept_ranked(raw: Vec<String>) -> Result<Vec<String>, RankError> {
    let mut ranked = dedupe_list(&raw);
    ranked.truncate(RANKED_LIMIT);
    if ranked.is_empty() {
        return Err(RankError::Empty);
    }
    Ok(ranked)
}

fn fallback(candidates: &[String]) -> Vec<String> {
    candidates.iter().take(FALLBACK_LIMIT).cloned().collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Ranks `candidates`, never failing: errors and timeouts degrade to the
/// first 40 candidates and are logged.
pub async fn rank_keywords(
    ranker: &dyn KeywordRanker,
    jd_text: &str,
    candidates: &[String],
    timeout: Duration,
) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let outcome = match tokio::time::timeout(timeout, ranker.rank(jd_text, candidates)).await {
        Ok(result) => result,
        Err(_) => Err(RankError::Timeout(timeout)),
    };

    match outcome {
        Ok(ranked) => {
            info!(
                "Ranked {} keyword(s) from {} candidate(s) via {}",
                ranked.len(),
                candidates.len(),
                ranker.backend()
            );
            debug!("Ranked keywords: {:?}", ranked);
            ranked
        }
        Err(e) => {
            warn!(
                "Keyword ranking via {} unavailable ({e}); using first {FALLBACK_LIMIT} candidates",
                ranker.backend()
            );
            fallback(candidates)
        }
    }
}

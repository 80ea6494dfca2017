//! Axum route handlers for the Generation API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::keywords::{extract_keywords, DEFAULT_TOP_K};
use crate::generation::pipeline::{build_pair, BuildOutcome, BuildRequest};
use crate::generation::preview::{preview, PreviewReport};
use crate::generation::ranking::rank_keywords;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub jd_text: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub candidates: Vec<String>,
    pub ranked: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub jd_text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords
///
/// Extracts candidates from a JD and ranks them. Ranking never fails; it
/// degrades to the first 40 candidates. A blank JD yields empty lists.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let candidates = extract_keywords(&request.jd_text, request.top_k.unwrap_or(DEFAULT_TOP_K));
    let ranked = rank_keywords(
        state.ranker.as_ref(),
        &request.jd_text,
        &candidates,
        state.config.rank_timeout,
    )
    .await;

    Ok(Json(KeywordsResponse { candidates, ranked }))
}

/// POST /api/v1/preview
///
/// Keep/drop partition of the workspace profile's skills for a JD. Writes nothing.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewReport>, AppError> {
    let profile = state.workspace.load_profile()?;
    let answers = state.workspace.load_answers()?;
    let jd_text = match request.jd_text {
        Some(text) => text,
        None => state.workspace.load_jd_text()?,
    };

    Ok(Json(preview(&profile, &answers, &jd_text)))
}

/// POST /api/v1/resumes
///
/// Builds the primary-style résumé and the CV into `outputs/<company-slug>/`.
pub async fn handle_build(
    State(state): State<AppState>,
    Json(request): Json<BuildRequest>,
) -> Result<(StatusCode, Json<BuildOutcome>), AppError> {
    let outcome = build_pair(&state, request).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

//! Pipeline — one JD in, a primary-style résumé and a CV out.
//!
//! For each style the pipeline composes the text, renders it, reads the
//! rendered artifact back and writes two reports next to it:
//!
//! ```text
//! outputs/<slug>/Resume - <name> - <Label> (<slug>).<ext>
//! outputs/<slug>/match_report_<label> (<slug>).json
//! outputs/<slug>/ats_lint_<label> (<slug>).txt
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::coverage::{coverage, CoverageReport};
use crate::analysis::lint::lint;
use crate::errors::AppError;
use crate::generation::composer::{compose, header_block, Style};
use crate::generation::keywords::{extract_keywords, DEFAULT_TOP_K};
use crate::generation::ranking::rank_keywords;
use crate::models::answers::Answers;
use crate::models::profile::Profile;
use crate::render::DocumentBody;
use crate::state::AppState;
use crate::store::write_atomic;
use crate::text::slugify;

// ────────────────────────────────────────────────────────────────────────────
// Request / outcome types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildRequest {
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub company: String,
    /// Falls back to `data/job_posting.txt`, then to empty.
    #[serde(default)]
    pub jd_text: Option<String>,
}

/// Files and reports produced for one style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifacts {
    pub style: Style,
    pub label: String,
    pub document: PathBuf,
    pub report: PathBuf,
    pub lint: PathBuf,
    pub coverage: CoverageReport,
    pub lint_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildOutcome {
    pub company_slug: String,
    pub ranked_keywords: Vec<String>,
    pub primary: Artifacts,
    pub cv: Artifacts,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Builds the primary style and the CV for one job posting.
///
/// Keywords are extracted and ranked once and shared by both documents.
/// When the primary style is `cv` a single artifact set is produced.
pub async fn build_pair(state: &AppState, request: BuildRequest) -> Result<BuildOutcome, AppError> {
    let workspace = &state.workspace;
    let profile = workspace.load_profile()?;
    let answers = workspace.load_answers()?;
    let jd_text = match request.jd_text {
        Some(text) => text,
        None => workspace.load_jd_text()?,
    };

    let company_slug = slugify(&request.company);
    let out_dir = workspace.output_dir(&request.company);

    let candidates = extract_keywords(&jd_text, DEFAULT_TOP_K);
    debug!("Extracted {} keyword candidate(s)", candidates.len());
    let ranked = rank_keywords(
        state.ranker.as_ref(),
        &jd_text,
        &candidates,
        state.config.rank_timeout,
    )
    .await;

    let job = StyleJob {
        state,
        profile: &profile,
        answers: &answers,
        ranked: &ranked,
        out_dir: &out_dir,
        company_slug: &company_slug,
    };

    let primary = job.build(request.style)?;
    let cv = if request.style == Style::Cv {
        primary.clone()
    } else {
        job.build(Style::Cv)?
    };

    info!(
        "Built {} + CV for '{}' in {} (coverage {}% / {}%)",
        primary.label,
        company_slug,
        out_dir.display(),
        primary.coverage.coverage_percent,
        cv.coverage.coverage_percent
    );

    Ok(BuildOutcome {
        company_slug,
        ranked_keywords: ranked,
        primary,
        cv,
    })
}

struct StyleJob<'a> {
    state: &'a AppState,
    profile: &'a Profile,
    answers: &'a Answers,
    ranked: &'a [String],
    out_dir: &'a Path,
    company_slug: &'a str,
}

impl StyleJob<'_> {
    fn build(&self, style: Style) -> Result<Artifacts, AppError> {
        let renderer = self.state.renderer.as_ref();
        let label = style.label();
        let slug = self.company_slug;

        let template = match self.state.workspace.template_override(style.template_file())? {
            Some(custom) => {
                debug!("Using workspace template {}", style.template_file());
                custom
            }
            None => style.builtin_template().to_string(),
        };
        let text = compose(self.profile, self.answers, self.ranked, &template)?;

        let document = self.out_dir.join(format!(
            "Resume - {} - {label} ({slug}).{}",
            file_safe(&self.profile.name),
            renderer.extension()
        ));
        let body = DocumentBody::from_text(header_block(self.profile), &text);
        renderer.render(&body, &document)?;

        let rendered = renderer.open(&document)?;
        let coverage = coverage(self.ranked, &rendered.visible_text());
        let report = self
            .out_dir
            .join(format!("match_report_{} ({slug}).json", label.to_lowercase()));
        let encoded = serde_json::to_vec_pretty(&coverage)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("encoding coverage report: {e}")))?;
        write_atomic(&report, &encoded)?;

        let lint_report = lint(renderer, &document);
        let lint_path = self
            .out_dir
            .join(format!("ats_lint_{} ({slug}).txt", label.to_lowercase()));
        write_atomic(&lint_path, lint_report.to_text().as_bytes())?;

        debug!("Wrote {} artifacts to {}", label, self.out_dir.display());

        Ok(Artifacts {
            style,
            label,
            document,
            report,
            lint: lint_path,
            coverage,
            lint_lines: lint_report.lines(),
        })
    }
}

/// Keeps a display name usable as a single path component.
fn file_safe(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

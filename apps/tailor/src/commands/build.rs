use std::path::Path;

use crate::errors::AppError;
use crate::generation::composer::Style;
use crate::generation::pipeline::{build_pair, Artifacts, BuildOutcome, BuildRequest};
use crate::state::AppState;

use super::read_jd;

pub async fn run(
    state: &AppState,
    style: &str,
    company: &str,
    jd_file: Option<&Path>,
) -> Result<BuildOutcome, AppError> {
    let jd_text = read_jd(&state.workspace, jd_file)?;
    let request = BuildRequest {
        style: Style::parse_lenient(style),
        company: company.to_string(),
        jd_text: Some(jd_text),
    };
    let outcome = build_pair(state, request).await?;

    print_artifacts("primary", &outcome.primary);
    print_artifacts("cv", &outcome.cv);
    Ok(outcome)
}

fn print_artifacts(which: &str, artifacts: &Artifacts) {
    println!("Generated ({which}, {}):", artifacts.label);
    println!("- document: {}", artifacts.document.display());
    println!(
        "- report: {} ({}% coverage)",
        artifacts.report.display(),
        artifacts.coverage.coverage_percent
    );
    println!("- lint: {}", artifacts.lint.display());
    for line in &artifacts.lint_lines {
        println!("  {line}");
    }
}

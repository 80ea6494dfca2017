use std::path::Path;

use crate::errors::AppError;
use crate::generation::preview::{preview, PreviewReport};
use crate::store::Workspace;

use super::read_jd;

/// Characters of the keyword list shown in the text report.
const KEYWORD_LINE_CHARS: usize = 800;

pub fn run(workspace: &Workspace, jd_file: Option<&Path>, json: bool) -> Result<(), AppError> {
    let jd_text = read_jd(workspace, jd_file)?;
    if jd_text.trim().is_empty() {
        println!("No JD found. Provide --jd-file or put text in data/job_posting.txt");
        return Ok(());
    }

    let profile = workspace.load_profile()?;
    let answers = workspace.load_answers()?;
    let report = preview(&profile, &answers, &jd_text);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("encoding preview: {e}")))?;
        println!("{out}");
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn render_text(report: &PreviewReport) -> String {
    let mut keywords = report.jd_keywords.clone();
    keywords.sort();
    let joined = keywords.join(", ");
    let shown: String = joined.chars().take(KEYWORD_LINE_CHARS).collect();
    let ellipsis = if joined.chars().count() > KEYWORD_LINE_CHARS { "..." } else { "" };

    let mut out = String::from("=== JD Filter Preview ===\n");
    out.push_str(&format!("JD keywords: {shown}{ellipsis}\n"));

    let lists = [
        ("DOMAINS", &report.domains),
        ("METHODS", &report.methods),
        ("PLATFORMS", &report.platforms),
        ("SECURITY_TERMS", &report.security_terms),
    ];
    for (label, selection) in lists {
        out.push_str(&format!("\n[{label}]\n"));
        out.push_str(&format!("  Keep: {}\n", or_none(&selection.keep)));
        out.push_str(&format!("  Drop: {}\n", or_none(&selection.drop)));
    }

    if report.summary_additions.is_empty() {
        out.push_str("\n[SUMMARY ADDITIONS] (none)\n");
    } else {
        out.push_str("\n[SUMMARY ADDITIONS (curated)]\n");
        for (i, line) in report.summary_additions.iter().enumerate() {
            out.push_str(&format!("  {}. {line}\n", i + 1));
        }
    }
    out
}

fn or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answers::Answers;
    use crate::models::profile::fixtures::sample_profile;

    #[test]
    fn test_render_text_sections() {
        let report = preview(&sample_profile(), &Answers::default(), "SaaS prospecting");
        let text = render_text(&report);
        assert!(text.starts_with("=== JD Filter Preview ===\n"));
        assert!(text.contains("[DOMAINS]\n  Keep: SaaS\n  Drop: Cybersecurity\n"));
        assert!(text.contains("[PLATFORMS]\n  Keep: (none)\n"));
        assert!(text.ends_with("[SUMMARY ADDITIONS] (none)\n"));
    }
}

//! ATS lint — formatting checks that approximate applicant-tracking parsers.
//!
//! Lint never fails: if the document cannot be opened, the failure itself is
//! reported as the single issue line.

use std::path::Path;

use tracing::warn;

use crate::render::{Document, DocumentRenderer};

/// Sole visible line of a clean lint report.
pub const NO_ISSUES_SENTINEL: &str = "No ATS lint issues detected.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintReport {
    pub issues: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue lines, or the sentinel when there are none.
    pub fn lines(&self) -> Vec<String> {
        if self.issues.is_empty() {
            vec![NO_ISSUES_SENTINEL.to_string()]
        } else {
            self.issues.clone()
        }
    }

    /// Plain-text form written to the lint file.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Opens the artifact at `path` and lints it.
pub fn lint(renderer: &dyn DocumentRenderer, path: &Path) -> LintReport {
    match renderer.open(path) {
        Ok(document) => lint_document(&document),
        Err(e) => {
            warn!("Lint could not inspect {}: {e}", path.display());
            LintReport {
                issues: vec![format!("Lint error: {e}")],
            }
        }
    }
}

/// Checks tables, header, footer and non-ASCII content, in that order.
pub fn lint_document(document: &Document) -> LintReport {
    let mut issues = Vec::new();

    if !document.tables.is_empty() {
        issues.push(format!(
            "Found {} table(s) - remove tables for ATS.",
            document.tables.len()
        ));
    }
    if has_text(&document.header) {
        issues.push("Header contains text - clear it (ATS can skip headers).".to_string());
    }
    if has_text(&document.footer) {
        issues.push("Footer contains text - clear it (ATS can skip footers).".to_string());
    }

    let non_ascii = document
        .visible_text()
        .chars()
        .filter(|c| (*c as u32) > 127)
        .count();
    if non_ascii > 0 {
        issues.push(format!(
            "Non-ASCII chars detected: {non_ascii} - keep ASCII only."
        ));
    }

    LintReport { issues }
}

fn has_text(paragraphs: &[String]) -> bool {
    paragraphs.iter().any(|p| !p.trim().is_empty())
}

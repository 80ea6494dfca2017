use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::generation::questions::{generate_questions, record_answer};
use crate::models::answers::Answers;
use crate::store::Workspace;
use crate::text::slugify;

use super::read_jd;

/// Asks each new question on `output`, reads one line per answer from `input`
/// and saves the updated answers. Blank lines skip a question.
pub fn run<R: BufRead, W: Write>(
    workspace: &Workspace,
    company: &str,
    jd_file: Option<&Path>,
    mut input: R,
    mut output: W,
) -> Result<Answers, AppError> {
    let jd_text = read_jd(workspace, jd_file)?;
    let company_slug = slugify(company);
    let mut answers = workspace.load_answers()?;

    let asked: HashSet<String> = answers.asked.keys().cloned().collect();
    let questions = generate_questions(&jd_text, &asked);
    if questions.is_empty() {
        writeln!(output, "No new questions for this posting.")?;
        return Ok(answers);
    }

    writeln!(output, "=== Answer the following (blank line to skip) ===")?;
    let mut recorded = 0;
    for question in &questions {
        writeln!(output, "\n{}", question.prompt)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let before = answers.asked.len();
        answers = record_answer(answers, question, &line, &company_slug, Utc::now());
        recorded += answers.asked.len() - before;
    }

    let saved = workspace.save_answers(answers)?;
    info!("Recorded {recorded} new answer(s) for '{company_slug}'");
    Ok(saved)
}

use tracing::info;

use crate::errors::AppError;
use crate::models::answers::Answers;
use crate::store::Workspace;

/// Curates summary additions in place and saves them.
pub fn run(workspace: &Workspace) -> Result<Answers, AppError> {
    let answers = workspace.load_answers()?;
    let before = answers.global.summary_additions.len();
    let saved = workspace.save_answers(answers.curated())?;
    info!(
        "Curated {before} summary addition(s) into {}",
        saved.global.summary_additions.len()
    );

    println!("=== Curated summary additions ===");
    for (i, line) in saved.global.summary_additions.iter().enumerate() {
        println!("  {}. {line}", i + 1);
    }
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::sample_workspace;

    #[test]
    fn test_curate_rewrites_and_dedupes() {
        let (_dir, workspace) = sample_workspace();
        let mut answers = Answers::default();
        answers.global.summary_additions = vec![
            "exceeded quota by 120%".into(),
            "Exceeded quota by 120%.".into(),
        ];
        workspace.save_answers(answers).unwrap();

        let saved = run(&workspace).unwrap();
        assert_eq!(saved.global.summary_additions, vec!["Exceeded quota by 120%."]);
        assert_eq!(workspace.load_answers().unwrap(), saved);
    }
}

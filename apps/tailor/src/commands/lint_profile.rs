use crate::analysis::profile_lint::{lint_profile, Finding};
use crate::errors::AppError;
use crate::store::Workspace;

pub fn run(workspace: &Workspace) -> Result<Vec<Finding>, AppError> {
    let profile = workspace.load_profile()?;
    let findings = lint_profile(&profile);
    for finding in &findings {
        println!("{finding}");
    }
    Ok(findings)
}

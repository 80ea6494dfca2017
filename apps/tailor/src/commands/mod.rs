//! CLI sub-commands. Each loads its inputs, calls the core and prints results.

pub mod ask;
pub mod build;
pub mod curate;
pub mod lint_profile;
pub mod preview;
pub mod serve;

use std::path::Path;

use crate::errors::AppError;
use crate::store::Workspace;

/// JD text from an explicit file, else the workspace default, else empty.
pub(crate) fn read_jd(workspace: &Workspace, jd_file: Option<&Path>) -> Result<String, AppError> {
    match jd_file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("job posting not found at {}", path.display()))
            }
            _ => AppError::Io(e),
        }),
        None => workspace.load_jd_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_jd_explicit_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path());
        let err = read_jd(&workspace, Some(&dir.path().join("nope.txt"))).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_read_jd_prefers_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path());
        let path = dir.path().join("jd.txt");
        std::fs::write(&path, "Enterprise AE").unwrap();
        assert_eq!(read_jd(&workspace, Some(&path)).unwrap(), "Enterprise AE");
        assert_eq!(read_jd(&workspace, None).unwrap(), "");
    }
}

//! Workspace layout and file persistence.
//!
//! A workspace is a directory holding:
//!
//! ```text
//! profile/profile.json     required
//! profile/answers.json     optional, created on first answer
//! data/job_posting.txt     optional default JD
//! templates/<style>.md     optional overrides of the built-in templates
//! outputs/<company-slug>/  generated artifacts
//! ```
//!
//! Every write goes through `write_atomic`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::answers::{object_only, Answers};
use crate::models::profile::Profile;
use crate::text::slugify;

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join("profile").join("profile.json")
    }

    pub fn answers_path(&self) -> PathBuf {
        self.root.join("profile").join("answers.json")
    }

    pub fn job_posting_path(&self) -> PathBuf {
        self.root.join("data").join("job_posting.txt")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    /// `outputs/<slug>` for the company name; the slug falls back to "generic".
    pub fn output_dir(&self, company: &str) -> PathBuf {
        self.root.join("outputs").join(slugify(company))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Loading
    // ────────────────────────────────────────────────────────────────────────

    /// Loads and validates the profile. A missing file is `NotFound`,
    /// a malformed or invalid one is `Validation`.
    pub fn load_profile(&self) -> Result<Profile, AppError> {
        let path = self.profile_path();
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::NotFound(format!(
                    "profile not found at {}",
                    path.display()
                )));
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let profile: Profile = serde_json::from_str(&raw)
            .map_err(|e| AppError::Validation(format!("{}: {e}", path.display())))?;
        profile
            .validate()
            .map_err(|msg| AppError::Validation(format!("{}: {msg}", path.display())))?;

        debug!(
            "Loaded profile '{}' with {} role(s)",
            profile.name,
            profile.experience.len()
        );
        Ok(profile)
    }

    /// Loads answers; an absent file yields the default shape.
    pub fn load_answers(&self) -> Result<Answers, AppError> {
        let path = self.answers_path();
        match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let mut de = serde_json::Deserializer::from_str(&raw);
                let answers: Answers = object_only(&mut de)
                    .and_then(|answers| de.end().map(|()| answers))
                    .map_err(|e| AppError::Validation(format!("{}: {e}", path.display())))?;
                Ok(answers)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No answers file at {}, using defaults", path.display());
                Ok(Answers::default())
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Normalizes and persists answers, returning what was written.
    pub fn save_answers(&self, answers: Answers) -> Result<Answers, AppError> {
        let answers = answers.normalized();
        let bytes = serde_json::to_vec_pretty(&answers)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("encoding answers: {e}")))?;
        write_atomic(&self.answers_path(), &bytes)?;
        info!("Saved answers to {}", self.answers_path().display());
        Ok(answers)
    }

    /// Reads `data/job_posting.txt`, or returns an empty string when absent.
    pub fn load_jd_text(&self) -> Result<String, AppError> {
        match std::fs::read_to_string(self.job_posting_path()) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Reads a template override, if the workspace has one.
    pub fn template_override(&self, file_name: &str) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(self.templates_dir().join(file_name)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

/// Writes `bytes` to a temp file in the destination directory, then renames
/// it over `path`. Parent directories are created as needed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_workspace;
    use super::*;

    #[test]
    fn test_write_atomic_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.txt");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_missing_profile_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Workspace::new(dir.path()).load_profile().unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("profile.json")));
    }

    #[test]
    fn test_profile_missing_field_is_validation_error() {
        let (_dir, workspace) = sample_workspace();
        std::fs::write(workspace.profile_path(), r#"{"name": "Graham Hill"}"#).unwrap();
        let err = workspace.load_profile().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("profile.json")));
    }

    #[test]
    fn test_invalid_profile_list_is_validation_error() {
        let (_dir, workspace) = sample_workspace();
        let mut profile = workspace.load_profile().unwrap();
        profile.domains.push("saas".to_string());
        std::fs::write(
            workspace.profile_path(),
            serde_json::to_vec(&profile).unwrap(),
        )
        .unwrap();
        let err = workspace.load_profile().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("domains[2]")));
    }

    #[test]
    fn test_absent_answers_load_as_default() {
        let (_dir, workspace) = sample_workspace();
        assert_eq!(workspace.load_answers().unwrap(), Answers::default());
    }

    #[test]
    fn test_malformed_answers_are_validation_error() {
        let (_dir, workspace) = sample_workspace();
        write_atomic(&workspace.answers_path(), br#"{"roles": []}"#).unwrap();
        assert!(matches!(
            workspace.load_answers().unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_answers_file_must_be_an_object() {
        let (_dir, workspace) = sample_workspace();
        let shapes: [&[u8]; 3] = [b"[]", br#"{"global": []}"#, b"{} trailing"];
        for raw in shapes {
            write_atomic(&workspace.answers_path(), raw).unwrap();
            assert!(matches!(
                workspace.load_answers().unwrap_err(),
                AppError::Validation(_)
            ));
        }
    }

    #[test]
    fn test_save_answers_normalizes_and_round_trips() {
        let (_dir, workspace) = sample_workspace();
        let mut answers = Answers::default();
        answers.global.extra_keywords = vec!["MEDDIC".into(), "meddic".into()];

        let saved = workspace.save_answers(answers).unwrap();
        assert_eq!(saved.global.extra_keywords, vec!["MEDDIC"]);
        assert_eq!(workspace.load_answers().unwrap(), saved);
    }

    #[test]
    fn test_jd_text_defaults_to_empty() {
        let (_dir, workspace) = sample_workspace();
        assert_eq!(workspace.load_jd_text().unwrap(), "");
        write_atomic(&workspace.job_posting_path(), b"Enterprise AE").unwrap();
        assert_eq!(workspace.load_jd_text().unwrap(), "Enterprise AE");
    }

    #[test]
    fn test_output_dir_uses_company_slug() {
        let workspace = Workspace::new("/tmp/ws");
        assert_eq!(
            workspace.output_dir("WinMagic, Inc."),
            PathBuf::from("/tmp/ws/outputs/winmagic-inc")
        );
        assert_eq!(
            workspace.output_dir(""),
            PathBuf::from("/tmp/ws/outputs/generic")
        );
    }

    #[test]
    fn test_template_override_is_optional() {
        let (_dir, workspace) = sample_workspace();
        assert_eq!(workspace.template_override("balanced.md").unwrap(), None);
        write_atomic(&workspace.templates_dir().join("balanced.md"), b"{NAME}").unwrap();
        assert_eq!(
            workspace.template_override("balanced.md").unwrap().as_deref(),
            Some("{NAME}")
        );
    }
}

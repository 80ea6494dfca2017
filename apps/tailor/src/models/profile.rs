use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::fold_key;

/// One role in the work history. Read-only input to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// The candidate's structured record, loaded from `profile/profile.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub domains: Vec<String>,
    pub methods: Vec<String>,
    pub platforms: Vec<String>,
    pub security_terms: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    /// Base summary sentences; answers may append more.
    #[serde(default)]
    pub summary: Vec<String>,
    /// Cross-functional collaboration line items.
    #[serde(default)]
    pub collaboration: Vec<String>,
}

impl Profile {
    /// Checks the list invariants serde cannot express.
    ///
    /// Returns the first violation as a single line naming the field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }

        let lists: [(&str, &[String]); 8] = [
            ("domains", self.domains.as_slice()),
            ("methods", self.methods.as_slice()),
            ("platforms", self.platforms.as_slice()),
            ("security_terms", self.security_terms.as_slice()),
            ("education", self.education.as_slice()),
            ("awards", self.awards.as_slice()),
            ("summary", self.summary.as_slice()),
            ("collaboration", self.collaboration.as_slice()),
        ];
        for (field, items) in lists {
            check_list(field, items)?;
        }

        for (idx, role) in self.experience.iter().enumerate() {
            if role.company.trim().is_empty() || role.title.trim().is_empty() {
                return Err(format!("experience[{idx}] needs both company and title"));
            }
            check_list(&format!("experience[{idx}].bullets"), &role.bullets)?;
        }

        Ok(())
    }
}

fn check_list(field: &str, items: &[String]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for (idx, item) in items.iter().enumerate() {
        if item.trim().is_empty() {
            return Err(format!("{field}[{idx}] is empty"));
        }
        if item.trim() != item.as_str() {
            return Err(format!("{field}[{idx}] has surrounding whitespace: {item:?}"));
        }
        if !seen.insert(fold_key(item)) {
            return Err(format!("{field}[{idx}] duplicates an earlier entry: {item:?}"));
        }
    }
    Ok(())
}

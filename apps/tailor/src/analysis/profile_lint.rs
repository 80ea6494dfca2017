//! Sanity checks on the profile before building.

use std::fmt;

use serde::Serialize;

use crate::models::profile::Profile;

const LONG_BULLET_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity {
            Severity::Ok => "ok",
            Severity::Warn => "warn",
        };
        write!(f, "[{marker}] {}", self.message)
    }
}

pub fn lint_profile(profile: &Profile) -> Vec<Finding> {
    let mut findings = Vec::new();

    let contact = [
        ("location", &profile.location),
        ("email", &profile.email),
        ("phone", &profile.phone),
        ("linkedin", &profile.linkedin),
    ];
    let missing: Vec<&str> = contact
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();
    if missing.is_empty() {
        findings.push(Finding::ok("Contact block complete."));
    } else {
        findings.push(Finding::warn(format!("Contact missing: {}", missing.join(", "))));
    }

    if profile.experience.is_empty() {
        findings.push(Finding::warn("No experience entries."));
    } else {
        findings.push(Finding::ok(format!(
            "{} experience entries found.",
            profile.experience.len()
        )));
    }

    for role in &profile.experience {
        let who = format!("{} - {}", role.company, role.title);
        if [&role.company, &role.title, &role.start, &role.end]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            findings.push(Finding::warn(format!(
                "Role missing fields: {} | {} | {}-{}",
                role.company, role.title, role.start, role.end
            )));
        }
        if role.bullets.is_empty() {
            findings.push(Finding::warn(format!("{who}: 0 bullets")));
        }

        let long = role
            .bullets
            .iter()
            .filter(|b| b.chars().count() > LONG_BULLET_CHARS)
            .count();
        if long > 0 {
            findings.push(Finding::warn(format!(
                "{who}: {long} very long bullet(s) (>{LONG_BULLET_CHARS} chars)."
            )));
        }
        let no_period = role
            .bullets
            .iter()
            .filter(|b| !b.trim().ends_with('.'))
            .count();
        if no_period > 0 {
            findings.push(Finding::warn(format!(
                "{who}: {no_period} bullet(s) do not end with a period."
            )));
        }
    }

    let skills = [
        ("domains", &profile.domains),
        ("methods", &profile.methods),
        ("platforms", &profile.platforms),
        ("security_terms", &profile.security_terms),
    ];
    for (field, items) in skills {
        if items.is_empty() {
            findings.push(Finding::warn(format!("No values in {field}.")));
        } else {
            findings.push(Finding::ok(format!("{field}: {} item(s).", items.len())));
        }
    }

    findings
}

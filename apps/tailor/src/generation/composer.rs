//! Assembles template fields from the profile, answers and ranked keywords,
//! then fills the style's template.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generation::skill_filter::{
    filter_skills, join_capped, SECURITY_LINE_MAX_CHARS, SKILL_LINE_MAX_CHARS,
};
use crate::generation::template::{fill_template, TemplateError};
use crate::models::answers::Answers;
use crate::models::profile::{ExperienceEntry, Profile};
use crate::text::{capitalize, dedupe_list, role_key, to_ascii};

const DOMAINS_CAP: usize = 6;
const METHODS_CAP: usize = 10;
const PLATFORMS_CAP: usize = 8;

// ────────────────────────────────────────────────────────────────────────────
// Style
// ────────────────────────────────────────────────────────────────────────────

/// Output style. Unknown names parse as `Balanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Style {
    #[default]
    Balanced,
    Executive,
    Ats,
    Human,
    Cv,
}

impl Style {
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "executive" => Style::Executive,
            "ats" => Style::Ats,
            "human" => Style::Human,
            "cv" => Style::Cv,
            _ => Style::Balanced,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Style::Balanced => "balanced",
            Style::Executive => "executive",
            Style::Ats => "ats",
            Style::Human => "human",
            Style::Cv => "cv",
        }
    }

    /// Template file name, looked up in the workspace `templates/` directory.
    pub fn template_file(&self) -> &'static str {
        match self {
            Style::Balanced => "balanced.md",
            Style::Executive => "executive.md",
            Style::Ats => "ats_strict.md",
            Style::Human => "human.md",
            Style::Cv => "cv.md",
        }
    }

    /// Display label used in artifact file names.
    pub fn label(&self) -> String {
        match self {
            Style::Cv => "CV".to_string(),
            other => capitalize(other.name()),
        }
    }

    /// Template shipped with the binary.
    pub fn builtin_template(&self) -> &'static str {
        match self {
            Style::Balanced => include_str!("../../templates/balanced.md"),
            Style::Executive => include_str!("../../templates/executive.md"),
            Style::Ats => include_str!("../../templates/ats_strict.md"),
            Style::Human => include_str!("../../templates/human.md"),
            Style::Cv => include_str!("../../templates/cv.md"),
        }
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Style::parse_lenient(&name)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fields
// ────────────────────────────────────────────────────────────────────────────

/// Name line and contact line placed above the template body.
pub fn header_block(profile: &Profile) -> Vec<String> {
    vec![
        profile.name.clone(),
        format!(
            "{} | {} | {} | {}",
            profile.location, profile.email, profile.phone, profile.linkedin
        ),
    ]
}

/// Every field a template may reference.
pub fn compose_fields(
    profile: &Profile,
    answers: &Answers,
    ranked: &[String],
) -> HashMap<String, String> {
    let skill_line = |items: &[String], cap: usize| {
        join_capped(&filter_skills(items, ranked, cap).keep, SKILL_LINE_MAX_CHARS)
    };

    let security_terms: Vec<&String> = profile
        .security_terms
        .iter()
        .chain(&answers.global.extra_keywords)
        .collect();
    let security = join_capped(&dedupe_list(&security_terms), SECURITY_LINE_MAX_CHARS);

    let fields = [
        ("NAME", profile.name.clone()),
        ("LOCATION", profile.location.clone()),
        ("LINKEDIN", profile.linkedin.clone()),
        ("EMAIL", profile.email.clone()),
        ("PHONE", profile.phone.clone()),
        ("SUMMARY", summary_line(profile, answers)),
        ("DOMAINS", skill_line(&profile.domains, DOMAINS_CAP)),
        ("METHODS", skill_line(&profile.methods, METHODS_CAP)),
        ("PLATFORMS", skill_line(&profile.platforms, PLATFORMS_CAP)),
        ("SECURITY", security),
        ("COLLAB", profile.collaboration.join("; ")),
        ("EXPERIENCE", experience_block(&profile.experience, answers)),
        ("EDUCATION", dash_list(&profile.education)),
        ("AWARDS", dash_list(&profile.awards)),
    ];

    fields
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Fills `template` with the composed fields.
pub fn compose(
    profile: &Profile,
    answers: &Answers,
    ranked: &[String],
    template: &str,
) -> Result<String, TemplateError> {
    fill_template(template, &compose_fields(profile, answers, ranked))
}

/// Base summary plus answer additions, `"; "`-joined, one closing period.
fn summary_line(profile: &Profile, answers: &Answers) -> String {
    let bits: Vec<String> = profile
        .summary
        .iter()
        .chain(&answers.global.summary_additions)
        .map(|s| to_ascii(s))
        .map(|s| {
            s.trim()
                .trim_end_matches(|c: char| c == '.' || c == ';' || c.is_whitespace())
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .collect();

    if bits.is_empty() {
        String::new()
    } else {
        format!("{}.", bits.join("; "))
    }
}

fn experience_block(experience: &[ExperienceEntry], answers: &Answers) -> String {
    let mut lines = Vec::new();
    for role in experience {
        lines.push(format!(
            "**{} - {} ({}-{})**",
            role.company, role.title, role.start, role.end
        ));
        let extras = answers.role_bullets(&role_key(&role.company, &role.title));
        for bullet in role.bullets.iter().chain(extras) {
            lines.push(format!("- {bullet}"));
        }
        lines.push(String::new());
    }
    lines.join("\n").trim().to_string()
}

fn dash_list(items: &[String]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {}", to_ascii(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answers::RoleAnswers;
    use crate::models::profile::fixtures::sample_profile;

    fn ranked(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_style_parsing_is_lenient() {
        assert_eq!(Style::parse_lenient("Executive"), Style::Executive);
        assert_eq!(Style::parse_lenient(" ATS "), Style::Ats);
        assert_eq!(Style::parse_lenient("fancy"), Style::Balanced);
        assert_eq!(Style::parse_lenient(""), Style::Balanced);
    }

    #[test]
    fn test_style_labels_and_files() {
        assert_eq!(Style::Balanced.label(), "Balanced");
        assert_eq!(Style::Ats.label(), "Ats");
        assert_eq!(Style::Cv.label(), "CV");
        assert_eq!(Style::Ats.template_file(), "ats_strict.md");
        assert_eq!(Style::Human.template_file(), "human.md");
    }

    #[test]
    fn test_style_deserializes_unknown_as_balanced() {
        let style: Style = serde_json::from_str("\"modern\"").unwrap();
        assert_eq!(style, Style::Balanced);
        let style: Style = serde_json::from_str("\"human\"").unwrap();
        assert_eq!(style, Style::Human);
    }

    #[test]
    fn test_every_builtin_template_fills_cleanly() {
        let profile = sample_profile();
        let answers = Answers::default();
        for style in [Style::Balanced, Style::Executive, Style::Ats, Style::Human, Style::Cv] {
            let filled = compose(&profile, &answers, &[], style.builtin_template());
            assert!(filled.is_ok(), "{style}: {filled:?}");
        }
    }

    #[test]
    fn test_header_block_lines() {
        assert_eq!(
            header_block(&sample_profile()),
            vec![
                "Graham Hill",
                "Toronto, ON | graham@example.com | (555) 555-5555 | https://www.linkedin.com/in/grahamhillsaas/"
            ]
        );
    }

    #[test]
    fn test_skill_lines_follow_ranked_keywords() {
        let fields = compose_fields(
            &sample_profile(),
            &Answers::default(),
            &ranked(&["prospecting", "discovery", "closing", "saas"]),
        );
        assert_eq!(fields["DOMAINS"], "SaaS");
        assert_eq!(fields["METHODS"], "Prospecting, Discovery, Closing");
        // nothing matches: fall back to the first entries
        assert_eq!(fields["PLATFORMS"], "Salesforce, HubSpot");
    }

    #[test]
    fn test_security_line_merges_extra_keywords() {
        let mut answers = Answers::default();
        answers.global.extra_keywords = vec!["Zero Trust".into(), "ENDPOINT".into()];
        let fields = compose_fields(&sample_profile(), &answers, &[]);
        assert_eq!(
            fields["SECURITY"],
            "endpoint, identity-first, passwordless, Zero Trust"
        );
    }

    #[test]
    fn test_summary_joins_with_single_period() {
        let mut profile = sample_profile();
        profile.summary = vec!["Enterprise AE for SaaS".into()];
        let mut answers = Answers::default();
        answers.global.summary_additions = vec!["Exceeded quota by 120%.".into(), " ".into()];

        let fields = compose_fields(&profile, &answers, &[]);
        assert_eq!(fields["SUMMARY"], "Enterprise AE for SaaS; Exceeded quota by 120%.");
    }

    #[test]
    fn test_empty_summary_is_blank() {
        let fields = compose_fields(&sample_profile(), &Answers::default(), &[]);
        assert_eq!(fields["SUMMARY"], "");
    }

    #[test]
    fn test_experience_block_includes_role_extras() {
        let profile = sample_profile();
        let mut answers = Answers::default();
        answers.roles.insert(
            role_key("SampleCo", "Enterprise Account Executive"),
            RoleAnswers {
                extra_bullets: vec!["Won the Acme renewal.".into()],
            },
        );

        let fields = compose_fields(&profile, &answers, &[]);
        assert_eq!(
            fields["EXPERIENCE"],
            "**SampleCo - Enterprise Account Executive (2022-Present)**\n\
             - Closed 500K TCV 3-year term, unlimited seats.\n\
             - Built pipeline and exceeded quota consistently.\n\
             - Won the Acme renewal."
        );
    }

    #[test]
    fn test_education_and_awards_are_dash_lists() {
        let mut profile = sample_profile();
        profile.awards.clear();
        let fields = compose_fields(&profile, &Answers::default(), &[]);
        assert_eq!(fields["EDUCATION"], "- B.A. (Hons)  University");
        assert_eq!(fields["AWARDS"], "-");
    }

    #[test]
    fn test_field_values_are_not_rescanned() {
        let mut profile = sample_profile();
        profile.name = "{EMAIL}".into();
        let out = compose(&profile, &Answers::default(), &[], "Hello, {NAME}.").unwrap();
        assert_eq!(out, "Hello, {EMAIL}.");
    }
}

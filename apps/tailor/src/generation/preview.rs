//! Shows which profile skills a JD would keep, without writing anything.

use serde::Serialize;

use crate::generation::keywords::{extract_keywords, DEFAULT_TOP_K};
use crate::generation::skill_filter::{filter_skills, SkillSelection};
use crate::models::answers::Answers;
use crate::models::profile::Profile;

/// Summary additions shown in a preview.
const PREVIEW_SUMMARY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewReport {
    pub jd_keywords: Vec<String>,
    pub domains: SkillSelection,
    pub methods: SkillSelection,
    pub platforms: SkillSelection,
    pub security_terms: SkillSelection,
    /// First ten summary additions, curated.
    pub summary_additions: Vec<String>,
}

/// Partitions each skill list against the JD keywords.
///
/// Unlike a build, a list with no matches keeps nothing: the preview shows
/// real matches only.
pub fn preview(profile: &Profile, answers: &Answers, jd_text: &str) -> PreviewReport {
    let jd_keywords = extract_keywords(jd_text, DEFAULT_TOP_K);
    let select = |items: &[String]| filter_skills(items, &jd_keywords, 0);

    let mut summary_additions = answers.clone().curated().global.summary_additions;
    summary_additions.truncate(PREVIEW_SUMMARY_LIMIT);

    PreviewReport {
        domains: select(&profile.domains),
        methods: select(&profile.methods),
        platforms: select(&profile.platforms),
        security_terms: select(&profile.security_terms),
        summary_additions,
        jd_keywords,
    }
}

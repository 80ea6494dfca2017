use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::text::{capitalize, dedupe_list};

/// Answers that apply to every résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalAnswers {
    #[serde(default)]
    pub extra_keywords: Vec<String>,
    #[serde(default)]
    pub summary_additions: Vec<String>,
}

/// Additions for a single role, keyed by `text::role_key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAnswers {
    #[serde(default)]
    pub extra_bullets: Vec<String>,
}

/// A clarifying question that has already been answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskedQuestion {
    pub prompt: String,
    pub answer: String,
    #[serde(rename = "type", default = "default_answer_kind")]
    pub kind: String,
    #[serde(default)]
    pub company_used: String,
    pub timestamp: DateTime<Utc>,
}

fn default_answer_kind() -> String {
    "freeform".to_string()
}

/// Accumulated answers, carried across runs in `profile/answers.json`.
///
/// Passed into and returned from operations by value; the caller persists it.
///
/// Every section and every entry must be a JSON object; serde's derived
/// visitors would otherwise take `[]` as an all-default struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answers {
    #[serde(rename = "global", default, deserialize_with = "object_only")]
    pub global: GlobalAnswers,
    #[serde(default, deserialize_with = "map_of_objects")]
    pub roles: BTreeMap<String, RoleAnswers>,
    #[serde(default, deserialize_with = "map_of_objects")]
    pub asked: BTreeMap<String, AskedQuestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Shape checks
// ────────────────────────────────────────────────────────────────────────────

/// Deserializes `T` only from a map, rejecting sequences and scalars.
pub fn object_only<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct ObjectVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
            T::deserialize(MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_map(ObjectVisitor(PhantomData))
}

struct Object<T>(T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        object_only(deserializer).map(Object)
    }
}

fn map_of_objects<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = BTreeMap::<String, Object<T>>::deserialize(deserializer)?;
    Ok(entries.into_iter().map(|(k, Object(v))| (k, v)).collect())
}

/// Summary additions longer than this many words get shortened.
const CURATE_MAX_WORDS: usize = 30;
/// Words kept when a summary addition is shortened.
const CURATE_KEEP_WORDS: usize = 24;

impl Answers {
    /// Trims, drops blanks and removes case-insensitive duplicates from every list.
    pub fn normalized(mut self) -> Self {
        self.global.extra_keywords = dedupe_list(&self.global.extra_keywords);
        self.global.summary_additions = dedupe_list(&self.global.summary_additions);
        for role in self.roles.values_mut() {
            role.extra_bullets = dedupe_list(&role.extra_bullets);
        }
        self
    }

    pub fn has_asked(&self, question_id: &str) -> bool {
        self.asked.contains_key(question_id)
    }

    /// Records an answered question and adds the rewritten answer to the summary.
    pub fn record(
        mut self,
        question_id: &str,
        prompt: &str,
        rewritten: &str,
        company_slug: &str,
        now: DateTime<Utc>,
    ) -> Self {
        self.asked.insert(
            question_id.to_string(),
            AskedQuestion {
                prompt: prompt.to_string(),
                answer: rewritten.to_string(),
                kind: default_answer_kind(),
                company_used: company_slug.to_string(),
                timestamp: now,
            },
        );
        self.global.summary_additions.push(rewritten.to_string());
        self
    }

    /// Extra bullets recorded for a role, or none.
    pub fn role_bullets(&self, role_key: &str) -> &[String] {
        self.roles
            .get(role_key)
            .map(|r| r.extra_bullets.as_slice())
            .unwrap_or(&[])
    }

    /// Tidies summary additions into single crisp sentences.
    ///
    /// Trailing periods are stripped, anything over 30 words is cut to its
    /// first 24, the first letter is capitalized and the rest lowercased,
    /// and a single period is appended.
    pub fn curated(mut self) -> Self {
        self.global.summary_additions = self
            .global
            .summary_additions
            .iter()
            .map(|item| curate_sentence(item))
            .collect();
        self
    }
}

fn curate_sentence(item: &str) -> String {
    let trimmed = item.trim().trim_end_matches('.');
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let sentence = if words.len() > CURATE_MAX_WORDS {
        words[..CURATE_KEEP_WORDS].join(" ")
    } else {
        trimmed.to_string()
    };
    format!("{}.", capitalize(&sentence))
}

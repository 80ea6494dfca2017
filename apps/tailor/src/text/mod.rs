//! Text normalization shared by extraction, filtering, answers and rendering.
//!
//! Everything that compares two human-entered strings goes through `fold_key`
//! so that "Salesforce", " salesforce " and "Ｓalesforce" collapse together.

use sha1::{Digest, Sha1};
use unicode_normalization::UnicodeNormalization;

/// Decomposes to NFKD and drops every non-ASCII code point.
///
/// Accented letters keep their base letter ("é" → "e"); symbols with no
/// ASCII decomposition ("—", "✓") disappear entirely.
pub fn to_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Comparison key: ASCII-folded, trimmed, lowercased.
pub fn fold_key(text: &str) -> String {
    to_ascii(text).trim().to_lowercase()
}

/// Removes blank and case-insensitive duplicate entries, keeping the first
/// occurrence (trimmed) in source order.
pub fn dedupe_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item = item.as_ref();
        let key = fold_key(item);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        out.push(item.trim().to_string());
    }
    out
}

/// Lowercase, `[a-z0-9]` runs joined by single hyphens. Never empty.
pub fn slugify(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut pending_dash = false;
    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "generic".to_string()
    } else {
        slug
    }
}

/// Key under which per-role answers are stored.
pub fn role_key(company: &str, title: &str) -> String {
    slugify(&format!("{company}-{title}"))
}

/// Stable 16-hex-char identifier for a question prompt: the head of its SHA-1,
/// so ids recorded in existing `answers.json` files keep matching.
pub fn prompt_hash(prompt: &str) -> String {
    let digest = Sha1::digest(prompt.as_bytes());
    hex::encode(digest)[..16].to_string()
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

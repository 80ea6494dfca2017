// LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for keyword ranking.
pub const KEYWORD_RANK_SYSTEM: &str = "You are an applicant-tracking-system (ATS) expert. \
    You rank job-description keywords by how much they affect resume parsing and keyword matching.";

/// Keyword ranking prompt. Replace `{jd_text}` and `{candidates}` before sending.
pub const KEYWORD_RANK_PROMPT_TEMPLATE: &str = r#"Given a job description, select and rank the 35-45 MOST IMPORTANT skills/keywords
that would impact resume parsing and keyword matching. Return a JSON array of strings only.

JD:
{jd_text}

Candidates:
{candidates}
"#;

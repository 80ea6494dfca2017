// Analysis of rendered output and of the profile itself. No LLM calls here.

pub mod coverage;
pub mod lint;
pub mod profile_lint;

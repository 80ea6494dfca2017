// Résumé generation: keyword extraction and ranking, skill filtering, bullet
// rewriting, template filling and the build pipeline.
// All LLM calls go through llm_client, and only ranking makes them.

pub mod bullets;
pub mod composer;
pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod preview;
pub mod prompts;
pub mod questions;
pub mod ranking;
pub mod skill_filter;
pub mod template;

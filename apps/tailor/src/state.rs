use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::generation::ranking::{KeywordRanker, LlmKeywordRanker, PassthroughRanker};
use crate::llm_client::{self, LlmClient, LlmError};
use crate::render::{DocumentRenderer, JsonDocumentRenderer};
use crate::store::Workspace;

/// Shared application state, handed to CLI commands and injected into route
/// handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub workspace: Workspace,
    /// Pluggable keyword ranker. `LlmKeywordRanker` when an API key is set,
    /// `PassthroughRanker` otherwise.
    pub ranker: Arc<dyn KeywordRanker>,
    pub renderer: Arc<dyn DocumentRenderer>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, LlmError> {
        let ranker: Arc<dyn KeywordRanker> = match &config.anthropic_api_key {
            Some(key) => {
                let llm = LlmClient::new(key.clone(), config.rank_timeout)?;
                info!("Keyword ranking via LLM (model: {})", llm_client::MODEL);
                Arc::new(LlmKeywordRanker(llm))
            }
            None => {
                info!("No ANTHROPIC_API_KEY set; keyword ranking is passthrough");
                Arc::new(PassthroughRanker)
            }
        };

        Ok(Self {
            workspace: Workspace::new(config.home.clone()),
            config,
            ranker,
            renderer: Arc::new(JsonDocumentRenderer),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_key_uses_passthrough() {
        let state = AppState::from_config(Config::for_home("/tmp/ws")).unwrap();
        assert_eq!(state.ranker.backend(), "passthrough");
        assert_eq!(state.workspace.root(), std::path::Path::new("/tmp/ws"));
    }

    #[test]
    fn test_with_key_uses_llm_ranker() {
        let mut config = Config::for_home("/tmp/ws");
        config.anthropic_api_key = Some("sk-test".to_string());
        let state = AppState::from_config(config).unwrap();
        assert_eq!(state.ranker.backend(), "llm");
    }
}

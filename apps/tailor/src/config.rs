use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace root holding `profile/`, `data/`, `templates/` and `outputs/`.
    pub home: PathBuf,
    /// Enables the LLM keyword ranker when set.
    pub anthropic_api_key: Option<String>,
    pub rank_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            home: PathBuf::from(std::env::var("TAILOR_HOME").unwrap_or_else(|_| ".".to_string())),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            rank_timeout: Duration::from_secs(
                std::env::var("RANK_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse::<u64>()
                    .context("RANK_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Defaults for a workspace at `home`, without touching the environment.
    pub fn for_home(home: impl Into<PathBuf>) -> Self {
        Config {
            home: home.into(),
            anthropic_api_key: None,
            rank_timeout: Duration::from_secs(20),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_home_defaults() {
        let config = Config::for_home("/srv/tailor");
        assert_eq!(config.home, PathBuf::from("/srv/tailor"));
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.rank_timeout, Duration::from_secs(20));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_optional_env_ignores_blank() {
        std::env::set_var("TAILOR_TEST_BLANK_VAR", "   ");
        assert_eq!(optional_env("TAILOR_TEST_BLANK_VAR"), None);
        std::env::set_var("TAILOR_TEST_BLANK_VAR", " sk-test ");
        assert_eq!(optional_env("TAILOR_TEST_BLANK_VAR").as_deref(), Some("sk-test"));
        std::env::remove_var("TAILOR_TEST_BLANK_VAR");
    }
}

//! LLM client: the only code in the crate that talks to the Anthropic API.
//!
//! Used by the keyword ranker. The client is optional; without an API key the
//! pipeline runs on the deterministic extractor alone.
//!
//! Every call runs against a deadline fixed when it starts. Attempts and
//! backoff sleeps are fitted into what remains of it, and a retry that could
//! not finish in time is not started.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
/// A ranked keyword list is short; this leaves room for 45 entries.
const MAX_TOKENS: u32 = 1024;
const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response was not the expected JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no text")]
    EmptyContent,

    #[error("deadline reached after {attempts} attempt(s)")]
    DeadlineExceeded { attempts: u32 },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl MessagesResponse {
    fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
    }
}

/// Outcome of one failed attempt.
enum Failure {
    /// Rate limits, 5xx and transport errors; worth another try.
    Transient(LlmError),
    Fatal(LlmError),
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
    budget: Duration,
}

impl LlmClient {
    /// `budget` bounds a whole call, retries and backoff included.
    pub fn new(api_key: String, budget: Duration) -> Result<Self, LlmError> {
        let http = Client::builder()
            .build()
            .map_err(|e| LlmError::Client(e.to_string()))?;
        Ok(Self {
            http,
            api_key,
            budget,
        })
    }

    /// Sends one user prompt and parses the reply text as JSON `T`.
    ///
    /// Markdown code fences around the JSON are tolerated.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.complete(prompt, system).await?;
        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };
        let deadline = Instant::now() + self.budget;

        let mut attempts = 0;
        let mut last_error = None;
        while attempts < MAX_ATTEMPTS {
            if attempts > 0 {
                let delay = backoff(attempts);
                if Instant::now() + delay >= deadline {
                    debug!("Skipping retry: {}ms backoff would pass the deadline", delay.as_millis());
                    break;
                }
                tokio::time::sleep(delay).await;
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            attempts += 1;

            match self.attempt(&body, remaining).await {
                Ok(response) => {
                    if let Some(usage) = &response.usage {
                        debug!(
                            "LLM call succeeded on attempt {attempts}: input_tokens={}, output_tokens={}",
                            usage.input_tokens, usage.output_tokens
                        );
                    }
                    return response.into_text().ok_or(LlmError::EmptyContent);
                }
                Err(Failure::Fatal(e)) => return Err(e),
                Err(Failure::Transient(e)) => {
                    warn!("LLM attempt {attempts}/{MAX_ATTEMPTS} failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) if attempts == MAX_ATTEMPTS => e,
            _ => LlmError::DeadlineExceeded { attempts },
        })
    }

    async fn attempt(
        &self,
        body: &MessagesRequest<'_>,
        timeout: Duration,
    ) -> Result<MessagesResponse, Failure> {
        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .timeout(timeout)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|e| Failure::Transient(LlmError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            let error = LlmError::Api {
                status: status.as_u16(),
                message,
            };
            return Err(if is_transient(status) {
                Failure::Transient(error)
            } else {
                Failure::Fatal(error)
            });
        }

        response
            .json()
            .await
            .map_err(|e| Failure::Fatal(LlmError::Http(e)))
    }
}

/// Sleep before retry number `attempt` (1-based): 500ms, 1s, 2s...
fn backoff(attempt: u32) -> Duration {
    BASE_BACKOFF * 2u32.saturating_pow(attempt.saturating_sub(1))
}

fn is_transient(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(body) = text.strip_prefix("```") else {
        return text;
    };
    let body = body.strip_prefix("json").unwrap_or(body).trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}

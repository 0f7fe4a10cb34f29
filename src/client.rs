//! Hosted completion client.
//!
//! One blocking request per run against the Anthropic Messages API, no
//! timeout beyond the HTTP client's own defaults. The `Completion` trait is
//! the seam between the workflow and the network so the pipeline can run
//! against canned responses in tests.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Completion model used when the CLI does not override it.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250514";

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

/// A text-completion backend: system + user instruction in, free text out.
pub trait Completion {
    fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Anthropic-backed completion client.
pub struct AnthropicClient {
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Build a client from the environment.
    ///
    /// Reads `ANTHROPIC_API_KEY` after a best-effort `.env` load; a missing
    /// key is a configuration error raised before any file I/O happens.
    pub fn from_env(model: &str) -> Result<Self> {
        dotenv::dotenv().ok();
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            GeneratorError::Config(
                "ANTHROPIC_API_KEY is not set; export it or add it to a .env file".to_string(),
            )
        })?;
        Ok(Self {
            api_key,
            model: model.to_string(),
        })
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl Completion for AnthropicClient {
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserMessage {
                role: "user",
                content: user,
            }],
        };

        let mut response = ureq::post(MESSAGES_URL)
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", API_VERSION)
            .send_json(&request)
            .context("send completion request")?;

        let body: MessagesResponse = response
            .body_mut()
            .read_json()
            .context("decode completion response")?;

        let text = body
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .ok_or_else(|| anyhow!("completion response contains no text content"))?;

        tracing::info!(
            model = %self.model,
            response_bytes = text.len(),
            "completion received"
        );
        Ok(text)
    }
}

//! LLM client for CATSUP answers and RELISH wisdom.

use crate::config::AnthropicConfig;
use crate::error::{Result, SauceError};
use async_trait::async_trait;
use serde::Deserialize;

/// Text completion from a language model.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single user prompt and return the text reply.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;

    fn model_name(&self) -> &str;
}

/// Prompt asking for a short Socratic answer.
pub fn tutor_prompt(question: &str, topic: Option<&str>) -> String {
    let topic = topic
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("general knowledge");
    format!(
        "You are a Socratic tutor. Answer this question about {topic} in a way that teaches \
         understanding, not just facts.\n\nQuestion: {question}\n\nRespond in 2-3 sentences \
         that focus on understanding, not memorization."
    )
}

/// Prompt asking for exactly three sentences of practical wisdom.
pub fn wisdom_prompt(situation: &str, context: Option<&str>) -> String {
    let context = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("general life");
    format!(
        "You are a wisdom guide. For this situation: \"{situation}\" (context: {context})\n\n\
         Provide wisdom in exactly THREE sentences. Focus on:\n\
         1. What's actually true about this situation\n\
         2. What action to take\n\
         3. Why it matters\n\n\
         Be compressed. Be profound. Be actionable."
    )
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// First text block of a Messages API response body.
pub fn first_text_block(body: &str) -> Result<String> {
    let parsed: MessagesResponse = serde_json::from_str(body)?;
    parsed
        .content
        .into_iter()
        .find_map(|c| c.text)
        .ok_or_else(|| SauceError::upstream("Anthropic", "empty response"))
}

/// Anthropic Messages API client
#[derive(Clone)]
pub struct AnthropicClient {
    api_key: String,
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Create a client; fails when no API key is configured.
    pub fn new(config: AnthropicConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| SauceError::Config("ANTHROPIC_API_KEY is not set".to_string()))?;
        Ok(Self {
            api_key,
            client: reqwest::Client::builder()
                .timeout(config.timeout())
                .build()?,
            config,
        })
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(&serde_json::json!({
                "model": &self.config.model,
                "max_tokens": max_tokens,
                "messages": [{"role": "user", "content": prompt}]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SauceError::upstream(
                "Anthropic",
                format!("{status}: {body}"),
            ));
        }

        let body = response.text().await?;
        first_text_block(&body)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// Client used when no API key is configured; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredLlm;

#[async_trait]
impl LlmClient for UnconfiguredLlm {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String> {
        Err(SauceError::Config("ANTHROPIC_API_KEY is not set".to_string()))
    }

    fn model_name(&self) -> &str {
        "unconfigured"
    }
}

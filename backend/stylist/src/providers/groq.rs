use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use styleforge_core::StyleError;

use super::{AdviceProvider, AdviceRequest};

/// Groq chat-completions provider (OpenAI-compatible API).
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[async_trait]
impl AdviceProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn advise(&self, request: &AdviceRequest) -> Result<String> {
        let mut messages = Vec::new();
        if !request.system_prompt.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: request.system_prompt.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.user_prompt.clone(),
        });

        let body = ChatRequest {
            model: request.model.clone(),
            messages,
            max_tokens: Some(request.max_tokens),
            temperature: Some(request.temperature),
        };

        debug!(model = %request.model, "Sending request to Groq");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Groq HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(StyleError::Provider {
                provider: "groq".to_string(),
                message: format!("{status}: {error_body}"),
            }
            .into());
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Groq response")?;

        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .context("Groq response contained no choices")?;

        Ok(content)
    }
}

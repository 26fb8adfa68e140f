pub mod groq;
pub mod mock;

pub use groq::GroqProvider;
pub use mock::MockProvider;

use anyhow::Result;
use async_trait::async_trait;

use crate::prompt::{STYLIST_SYSTEM_PROMPT, advice_prompt};

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Request to an advice provider.
#[derive(Debug, Clone)]
pub struct AdviceRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl AdviceRequest {
    /// Build the standard stylist request for a detected skin tone.
    pub fn for_skin_tone(skin_tone: &str, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: STYLIST_SYSTEM_PROMPT.to_string(),
            user_prompt: advice_prompt(skin_tone),
            max_tokens: 400,
            temperature: 0.7,
        }
    }
}

/// Trait for chat-completion providers that return stylist advice text.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Provider name (e.g., "groq", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the raw advice text.
    async fn advise(&self, request: &AdviceRequest) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylist_request_carries_template_and_defaults() {
        let request = AdviceRequest::for_skin_tone("medium", DEFAULT_MODEL);
        assert_eq!(request.model, "llama-3.1-8b-instant");
        assert_eq!(request.max_tokens, 400);
        assert!(request.user_prompt.contains("SHOPPING_ITEMS:"));
        assert!(request.system_prompt.contains("fashion stylist"));
    }
}

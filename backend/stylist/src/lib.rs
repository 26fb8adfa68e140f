//! Stylist LLM Client
//!
//! Builds the sectioned stylist prompt and sends it to a chat-completions
//! provider, returning the raw advice text for downstream parsing.

pub mod prompt;
pub mod providers;

pub use prompt::{DEFAULT_SKIN_TONE, STYLIST_SYSTEM_PROMPT, advice_prompt};
pub use providers::{AdviceProvider, AdviceRequest, DEFAULT_MODEL, GroqProvider, MockProvider};

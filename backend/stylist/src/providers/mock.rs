use anyhow::Result;
use async_trait::async_trait;

use super::{AdviceProvider, AdviceRequest};

/// Canned advice returned when no fixed response is set. Shaped like a real
/// template reply so the full parse/render path can run offline.
const CANNED_ADVICE: &str = "\
DRESS_CODE:
- smart casual
- business formal

OUTFIT:
- navy blazer with chinos

COLORS:
- emerald green
- royal blue

SHOPPING_ITEMS:
- Royal Blue Shirt
- Black Chelsea Boots
";

/// A mock advice provider that returns canned responses.
pub struct MockProvider {
    fixed_response: Option<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            fixed_response: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdviceProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn advise(&self, _request: &AdviceRequest) -> Result<String> {
        Ok(self
            .fixed_response
            .clone()
            .unwrap_or_else(|| CANNED_ADVICE.to_string()))
    }
}

//! Analyze and plan endpoints.
//!
//! `POST /api/analyze` receives an image, detects the skin tone, prompts the
//! stylist provider, and returns the raw advice text. `POST /api/plan`
//! exposes the pure text-to-plan projection for clients that want structured
//! blocks instead of raw text. Both handlers are total: every failure comes
//! back as a JSON response, never a 500.

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Deserialize;
use tracing::{error, info, warn};

use styleforge_advice::{RenderPlan, SHOPPING_ITEMS, SectionKey, parse, render};
use styleforge_core::{AnalysisResponse, StyleError};
use styleforge_stylist::{AdviceRequest, DEFAULT_SKIN_TONE};

use crate::mime_detect::{detect_mime_type, is_image};
use crate::server::GatewayState;

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Pull the `file` field out of the multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, StyleError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(StyleError::MissingImage),
            Err(err) => {
                warn!(error = %err, "Malformed multipart body");
                return Err(StyleError::MissingImage);
            }
        };
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(StyleError::EmptyFile);
        }
        let mime = detect_mime_type(&filename);
        if !is_image(mime) {
            return Err(StyleError::UnsupportedMedia(mime.to_string()));
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "Failed to read upload body");
                return Err(StyleError::EmptyFile);
            }
        };
        if bytes.is_empty() {
            return Err(StyleError::EmptyFile);
        }

        return Ok(Upload {
            filename,
            bytes: bytes.to_vec(),
        });
    }
}

/// Detect the skin tone for an uploaded image. Fixed placeholder until a
/// real classifier is wired in.
fn detect_tone(_image: &[u8]) -> &'static str {
    DEFAULT_SKIN_TONE
}

/// Prompt the configured provider and shape the outcome for the wire.
async fn run_analysis(state: &GatewayState, tone: &str) -> AnalysisResponse {
    let request = AdviceRequest::for_skin_tone(tone, state.model.as_str());
    match state.provider.advise(&request).await {
        Ok(advice) => AnalysisResponse::completed(tone, advice),
        Err(err) => {
            error!(provider = state.provider.name(), error = %err, "Advice request failed");
            AnalysisResponse::failed(err.to_string())
        }
    }
}

/// Handler for `POST /api/analyze`.
pub async fn analyze(
    State(state): State<GatewayState>,
    mut multipart: Multipart,
) -> Json<AnalysisResponse> {
    let upload = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(err) => return Json(AnalysisResponse::failed(err.to_string())),
    };

    info!(
        filename = %upload.filename,
        size_bytes = upload.bytes.len(),
        "Analyzing uploaded image"
    );

    let tone = detect_tone(&upload.bytes);
    Json(run_analysis(&state, tone).await)
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub analysis: String,
}

/// Handler for `POST /api/plan`: project advice text into a render plan.
pub async fn plan(Json(request): Json<PlanRequest>) -> Json<RenderPlan> {
    let parsed = parse(&request.analysis);
    Json(render(&parsed, &SectionKey::new(SHOPPING_ITEMS)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::Arc;
    use styleforge_stylist::{AdviceProvider, MockProvider};

    struct FailingProvider;

    #[async_trait]
    impl AdviceProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }
        async fn advise(&self, _request: &AdviceRequest) -> anyhow::Result<String> {
            bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn successful_analysis_reports_tone_and_advice() {
        let provider = MockProvider::new().with_response("TONE:\n- warm");
        let state = GatewayState::new(Arc::new(provider), "llama-3.1-8b-instant");

        let response = run_analysis(&state, "medium").await;
        assert!(response.success);
        assert_eq!(response.tone.as_deref(), Some("medium"));
        assert_eq!(response.analysis.as_deref(), Some("TONE:\n- warm"));
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn provider_failure_becomes_error_response() {
        let state = GatewayState::new(Arc::new(FailingProvider), "llama-3.1-8b-instant");

        let response = run_analysis(&state, "medium").await;
        assert!(!response.success);
        assert!(response.error.as_deref().unwrap().contains("connection refused"));
        assert!(response.analysis.is_none());
    }

    #[tokio::test]
    async fn plan_endpoint_projects_advice_text() {
        let request = PlanRequest {
            analysis: "Outfit:\n- blazer\nShopping Items:\n- Royal Blue Shirt".to_string(),
        };
        let Json(plan) = plan(Json(request)).await;

        assert_eq!(plan.recommendation_blocks.len(), 1);
        assert_eq!(plan.recommendation_blocks[0].label, "OUTFIT");
        assert_eq!(plan.shop_cards.len(), 1);
        assert_eq!(plan.shop_cards[0].item, "Royal Blue Shirt");
    }

    #[tokio::test]
    async fn plan_endpoint_handles_headerless_text() {
        let request = PlanRequest {
            analysis: "no structure here".to_string(),
        };
        let Json(plan) = plan(Json(request)).await;
        assert!(plan.recommendation_blocks.is_empty());
        assert!(plan.shop_cards.is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// Wire-level outcome of one analysis request.
///
/// Exactly one of `analysis` / `error` is meaningful depending on `success`.
/// Absent fields are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// A completed analysis with the detected tone and the model's advice.
    pub fn completed(tone: impl Into<String>, analysis: impl Into<String>) -> Self {
        Self {
            success: true,
            tone: Some(tone.into()),
            analysis: Some(analysis.into()),
            error: None,
        }
    }

    /// A failed analysis carrying a user-visible error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            tone: None,
            analysis: None,
            error: Some(error.into()),
        }
    }
}

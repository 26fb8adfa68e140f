use thiserror::Error;

/// Top-level error type for the StyleForge pipeline.
///
/// The upload variants carry the exact messages the analyze endpoint returns
/// to clients, so `to_string()` is the wire message.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("No image uploaded")]
    MissingImage,

    #[error("Empty file")]
    EmptyFile,

    #[error("Unsupported file type: {0}")]
    UnsupportedMedia(String),

    #[error("stylist provider error ({provider}): {message}")]
    Provider { provider: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_render_wire_messages() {
        assert_eq!(StyleError::MissingImage.to_string(), "No image uploaded");
        assert_eq!(StyleError::EmptyFile.to_string(), "Empty file");
    }

    #[test]
    fn provider_error_names_provider() {
        let err = StyleError::Provider {
            provider: "groq".to_string(),
            message: "429: rate limited".to_string(),
        };
        assert!(err.to_string().contains("groq"));
        assert!(err.to_string().contains("rate limited"));
    }
}

use serde::Deserialize;

use styleforge_stylist::DEFAULT_MODEL;

/// StyleForge runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Groq API key; the mock provider is used when unset
    pub groq_api_key: Option<String>,
    /// Chat model requested from the provider
    pub model: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            groq_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("STYLEFORGE_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("STYLEFORGE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            model: std::env::var("STYLEFORGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

mod config;
mod terminal_output;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use styleforge_advice::{SHOPPING_ITEMS, SectionKey, parse, render};
use styleforge_gateway::{GatewayState, start_server};
use styleforge_stylist::{
    AdviceProvider, AdviceRequest, DEFAULT_SKIN_TONE, GroqProvider, MockProvider,
};

use config::Config;
use terminal_output::{format_plan, note_error, note_info, note_success};

#[derive(Parser)]
#[command(name = "styleforge")]
#[command(about = "StyleForge — AI fashion stylist backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the StyleForge gateway server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze an image and print the rendered advice
    Analyze {
        /// Path to the image to analyze
        image: PathBuf,
        /// Skin tone to prompt with instead of the detected one
        #[arg(long)]
        tone: Option<String>,
    },
    /// Show current gateway status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Analyze { image, tone } => {
            run_analyze(config, image, tone).await?;
        }
        Commands::Status => {
            note_info("StyleForge status: checking...");
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    note_error(&format!(
                        "Gateway not reachable on port {}",
                        config.port
                    ));
                }
            }
        }
    }

    Ok(())
}

/// Pick the configured provider: Groq when an API key is present, otherwise
/// the offline mock.
fn build_provider(config: &Config) -> Arc<dyn AdviceProvider> {
    match &config.groq_api_key {
        Some(key) => Arc::new(GroqProvider::new(key.clone())),
        None => {
            warn!("GROQ_API_KEY not set; using the mock provider");
            Arc::new(MockProvider::new())
        }
    }
}

async fn run_server(config: Config) -> Result<()> {
    let provider = build_provider(&config);
    let state = GatewayState::new(provider, config.model.clone());

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;
    start_server(addr, state).await
}

async fn run_analyze(config: Config, image: PathBuf, tone: Option<String>) -> Result<()> {
    let bytes = tokio::fs::read(&image)
        .await
        .with_context(|| format!("cannot read {}", image.display()))?;
    if bytes.is_empty() {
        note_error("Empty file");
        anyhow::bail!("Empty file");
    }
    info!(size_bytes = bytes.len(), "Read image");

    let provider = build_provider(&config);
    let tone = tone.unwrap_or_else(|| DEFAULT_SKIN_TONE.to_string());
    let request = AdviceRequest::for_skin_tone(&tone, config.model.as_str());
    let advice = provider.advise(&request).await?;

    let plan = render(&parse(&advice), &SectionKey::new(SHOPPING_ITEMS));
    note_success("Analysis Complete!");
    print!("{}", format_plan(&plan));

    Ok(())
}

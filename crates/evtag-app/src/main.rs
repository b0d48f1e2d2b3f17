//! Evtag server binary - composition root.
//!
//! 1. Load `.env` and CLI arguments
//! 2. Install the tracing subscriber, then load the TOML configuration
//! 3. Build the tag classifier (Gemini, or offline fallback only)
//! 4. Start the axum REST API server

mod cli;

use std::sync::Arc;

use clap::Parser;

use evtag_api::routes;
use evtag_api::state::AppState;
use evtag_classifier::{GeminiClient, LanguageModel, OfflineModel, TagClassifier};
use evtag_core::config::EvtagConfig;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine.
    let dotenv = dotenvy::dotenv();

    let args = CliArgs::parse();

    // Tracing: RUST_LOG > --log-level > info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_level())),
        )
        .init();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = EvtagConfig::load_or_default(&config_file);
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    config.server.port = args.resolve_port(config.server.port);
    config.model.api_key = args.resolve_api_key(config.model.api_key.take());

    tracing::info!("Starting Evtag v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "Loaded environment file");
    }
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    // Classifier.
    let model: Arc<dyn LanguageModel> = if args.offline {
        tracing::warn!("Offline mode: tags come from the keyword fallback only");
        Arc::new(OfflineModel)
    } else {
        match GeminiClient::new(&config.model) {
            Ok(client) => {
                tracing::info!(model = %config.model.model, "Gemini client ready");
                Arc::new(client)
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot start tag classifier; set GEMINI_API_KEY or pass --offline");
                return Err(evtag_core::EvtagError::from(e).into());
            }
        }
    };
    let classifier = TagClassifier::new(model);

    // API server.
    let state = AppState::new(config.server.clone(), classifier);
    routes::start_server(&config.server, state).await?;

    Ok(())
}

//! Docguard API
//!
//! HTTP front end for the insurance document validator. Extracts policy
//! fields from document text with an LLM and runs the business rules over
//! them.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod vessels;

use config::{ApiConfig, ConfigError};
use docguard_extractor::Extractor;
use docguard_llm::{GeminiProvider, LlmError};
use docguard_validator::Validator;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vessels::{load_vessels, VesselListError};

/// API server error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Approved vessel list could not be loaded
    #[error("{0}")]
    VesselList(#[from] VesselListError),

    /// LLM provider could not be created
    #[error("LLM provider error: {0}")]
    Llm(#[from] LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "docguard=debug,info"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Build the application state described by `config`
///
/// Reads the API key from the environment and loads the approved vessel list.
pub fn build_state(config: &ApiConfig) -> Result<AppState, ApiError> {
    let api_key = config.api_key()?;
    let provider = GeminiProvider::new(
        config.llm.endpoint.clone(),
        config.llm.model.clone(),
        api_key,
        config.llm.timeout(),
    )?;

    let vessels = load_vessels(&config.vessels_path)?;
    info!(
        "Loaded {} approved vessels from {}",
        vessels.len(),
        config.vessels_path.display()
    );

    Ok(AppState::new(
        Extractor::new(provider, config.extractor.clone()),
        Validator::new(vessels),
    ))
}

/// Start the API HTTP server
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    info!("Starting Docguard API");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {} at {}", config.llm.model, config.llm.endpoint);

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?;

    Ok(())
}

use anyhow::{Context, Result};
use global_housing::config::Config;
use global_housing::geocode::Geocoder;
use global_housing::model::GradientBoostedModel;
use global_housing::predict::Predictor;
use global_housing::server::{self, AppState};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("global_housing=info".parse()?),
        )
        .init();

    info!("Starting Global Housing price estimator");

    let config = Config::from_env()?;

    // A missing or invalid model is fatal
    let model = match GradientBoostedModel::load(&config.model_path) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to load model from {}: {}", config.model_path.display(), e);
            std::process::exit(1);
        }
    };

    let predictor = Predictor::new(Arc::new(model))
        .context("Model does not match the feature adapter")?
        .with_defaults(config.default_language, config.default_currency);
    let geocoder = Geocoder::from_config(&config)?;

    info!(
        "Defaults: language={}, currency={}; geocoder at {}",
        config.default_language.code(),
        config.default_currency.code(),
        config.geocoder_url
    );
    if config.api_key.is_none() {
        info!("API_KEY not set, /metrics is unauthenticated");
    }

    let app = server::router(AppState::new(&config, predictor, geocoder));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

//! Propcast Server - player-prop prediction API
//!
//! Loads every model artifact at startup, then serves predictions and parlay
//! picks over HTTP. Metrics are pushed via structured JSON logs to stdout.
//!
//! # Usage
//! ```sh
//! MODEL_DIR=models FEATURE_SCHEMA=counting cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `HOST` / `PORT` - Listen address (default: 0.0.0.0:10000)
//! - `MODEL_DIR` - Directory holding the model artifacts (default: models)
//! - `FEATURE_SCHEMA` - `counting` or `rate` (default: counting)
//! - `OBSERVABILITY_ENABLED` - Enable metrics reporting (default: true)
//! - `OBSERVABILITY_INTERVAL` - Interval in seconds between metric outputs (default: 60)

use anyhow::{Context, Result};
use propcast::application::system::Application;
use propcast::config::Config;
use propcast::infrastructure::observability::MetricsReporter;
use propcast::interfaces::http::{AppState, router};
use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Propcast Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Schema={}, Models={:?}, Decimals={}, Parlay threshold={} (limit {})",
        config.model.schema_variant.as_str(),
        config.model.model_dir,
        config.model.decimals,
        config.parlay.default_threshold,
        config.parlay.limit
    );

    let app = match Application::build(config.clone()) {
        Ok(app) => app,
        Err(e) => {
            error!("Startup failed: {:#}", e);
            return Err(e);
        }
    };

    if config.observability.enabled {
        let interval = config.observability.interval_seconds;
        let reporter = MetricsReporter::new(
            app.metrics.clone(),
            config.model.schema_variant.as_str(),
            interval,
        );

        tokio::spawn(async move {
            reporter.run().await;
        });

        info!("Metrics reporter started (interval: {}s)", interval);
    } else {
        info!("Metrics reporting disabled.");
    }

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}. Press Ctrl+C to shutdown.", addr);

    axum::serve(listener, router(AppState::from(&app)))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received. Exiting...");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}

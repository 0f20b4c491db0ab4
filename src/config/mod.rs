//! Configuration module for Propcast.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server, Model, Parlay, and Observability.

mod model_config;
mod observability_config;
mod parlay_config;
mod server_config;

pub use model_config::ModelEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use parlay_config::ParlayEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
    pub parlay: ParlayEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let server = ServerEnvConfig::from_env().context("Failed to load server config")?;
        let model = ModelEnvConfig::from_env().context("Failed to load model config")?;
        let parlay = ParlayEnvConfig::from_env().context("Failed to load parlay config")?;
        let observability = ObservabilityEnvConfig::from_env();

        Ok(Self {
            server,
            model,
            parlay,
            observability,
        })
    }
}

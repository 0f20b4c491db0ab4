//! Parlay configuration parsing from environment variables.

use crate::application::parlay::{DEFAULT_LIMIT, DEFAULT_THRESHOLD};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Parlay environment configuration
#[derive(Debug, Clone)]
pub struct ParlayEnvConfig {
    pub default_threshold: f64,
    pub limit: usize,
    /// JSON file with the candidate pool. Built-in sample picks when unset.
    pub pool_path: Option<PathBuf>,
}

impl Default for ParlayEnvConfig {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            pool_path: None,
        }
    }
}

impl ParlayEnvConfig {
    pub fn from_env() -> Result<Self> {
        let default_threshold = env::var("PARLAY_DEFAULT_THRESHOLD")
            .unwrap_or_else(|_| DEFAULT_THRESHOLD.to_string())
            .parse::<f64>()
            .context("Failed to parse PARLAY_DEFAULT_THRESHOLD")?;
        if !default_threshold.is_finite() {
            anyhow::bail!("PARLAY_DEFAULT_THRESHOLD must be finite");
        }

        let limit = env::var("PARLAY_LIMIT")
            .unwrap_or_else(|_| DEFAULT_LIMIT.to_string())
            .parse::<usize>()
            .context("Failed to parse PARLAY_LIMIT")?;

        let pool_path = env::var("PARLAY_POOL_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            default_threshold,
            limit,
            pool_path,
        })
    }
}

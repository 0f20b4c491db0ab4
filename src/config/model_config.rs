//! Model and prediction configuration parsing from environment variables.
//!
//! Covers where artifacts live, which feature schema the deployment uses,
//! output rounding and the static confidence scores.

use crate::domain::confidence::{MAX_CONFIDENCE, MIN_CONFIDENCE};
use crate::domain::ml::feature_schema::SchemaVariant;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Model environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub model_dir: PathBuf,
    pub schema_variant: SchemaVariant,
    pub decimals: u32,
    pub pitcher_confidence: f64,
    pub hitter_confidence: f64,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            schema_variant: SchemaVariant::Counting,
            decimals: 1,
            pitcher_confidence: 9.0,
            hitter_confidence: 8.0,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Result<Self> {
        let model_dir = PathBuf::from(env::var("MODEL_DIR").unwrap_or_else(|_| "models".to_string()));

        let schema_str = env::var("FEATURE_SCHEMA").unwrap_or_else(|_| "counting".to_string());
        let schema_variant = SchemaVariant::from_str(&schema_str)?;

        let decimals = env::var("PREDICTION_DECIMALS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("Failed to parse PREDICTION_DECIMALS")?;
        if !(1..=2).contains(&decimals) {
            anyhow::bail!("PREDICTION_DECIMALS must be 1 or 2, got {}", decimals);
        }

        let pitcher_confidence = Self::parse_confidence("PITCHER_CONFIDENCE", 9.0)?;
        let hitter_confidence = Self::parse_confidence("HITTER_CONFIDENCE", 8.0)?;

        Ok(Self {
            model_dir,
            schema_variant,
            decimals,
            pitcher_confidence,
            hitter_confidence,
        })
    }

    fn parse_confidence(key: &str, default: f64) -> Result<f64> {
        let value = env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<f64>()
            .context(format!("Failed to parse {}", key))?;
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&value) {
            anyhow::bail!(
                "{} must be between {} and {}, got {}",
                key,
                MIN_CONFIDENCE,
                MAX_CONFIDENCE,
                value
            );
        }
        Ok(value)
    }
}

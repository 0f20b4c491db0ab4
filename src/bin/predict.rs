//! One-shot prediction from the command line.
//!
//! Flags fall back to the `MODEL_DIR`, `FEATURE_SCHEMA`, `PREDICTION_DECIMALS`,
//! `PITCHER_CONFIDENCE` and `HITTER_CONFIDENCE` environment variables.
//!
//! ```sh
//! cargo run --bin predict -- --models models --schema counting \
//!     --pitcher '{"IP": 6, "H": 4, "BB": 1, "ER": 2}' --hitter '{"AB": 4, "H": 2}'
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use propcast::application::prediction::PredictionAggregator;
use propcast::config::ModelEnvConfig;
use propcast::domain::confidence::StaticConfidence;
use propcast::domain::ml::feature_schema::SchemaVariant;
use propcast::domain::types::StatRecord;
use propcast::infrastructure::model_loader::load_registry;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the model artifacts [default: MODEL_DIR or models]
    #[arg(long)]
    models: Option<PathBuf>,

    /// Feature schema the artifacts were trained on, counting or rate [default: FEATURE_SCHEMA]
    #[arg(long)]
    schema: Option<String>,

    /// Pitcher stat line as a JSON object
    #[arg(long)]
    pitcher: Option<String>,

    /// Hitter stat line as a JSON object
    #[arg(long)]
    hitter: Option<String>,

    /// Decimal places in the output, 1 or 2 [default: PREDICTION_DECIMALS or 1]
    #[arg(long)]
    decimals: Option<u32>,

    /// Pitcher confidence score [default: PITCHER_CONFIDENCE or 9]
    #[arg(long)]
    pitcher_confidence: Option<f64>,

    /// Hitter confidence score [default: HITTER_CONFIDENCE or 8]
    #[arg(long)]
    hitter_confidence: Option<f64>,
}

impl Args {
    /// Flags win over the environment.
    fn resolve(self, env: ModelEnvConfig) -> Result<(ModelEnvConfig, Option<String>, Option<String>)> {
        let schema_variant = match &self.schema {
            Some(s) => SchemaVariant::from_str(s)?,
            None => env.schema_variant,
        };
        let decimals = self.decimals.unwrap_or(env.decimals);
        if !(1..=2).contains(&decimals) {
            anyhow::bail!("--decimals must be 1 or 2, got {}", decimals);
        }
        let resolved = ModelEnvConfig {
            model_dir: self.models.unwrap_or(env.model_dir),
            schema_variant,
            decimals,
            pitcher_confidence: self.pitcher_confidence.unwrap_or(env.pitcher_confidence),
            hitter_confidence: self.hitter_confidence.unwrap_or(env.hitter_confidence),
        };
        Ok((resolved, self.pitcher, self.hitter))
    }
}

fn parse_record(label: &str, raw: Option<&str>) -> Result<Option<StatRecord>> {
    raw.map(|s| {
        let value: serde_json::Value = serde_json::from_str(s)
            .with_context(|| format!("--{} is not valid JSON", label))?;
        Ok(StatRecord::from_value(&value))
    })
    .transpose()
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let env = ModelEnvConfig::from_env().context("Failed to load model config")?;
    let (config, pitcher, hitter) = Args::parse().resolve(env)?;

    let pitcher = parse_record("pitcher", pitcher.as_deref())?;
    let hitter = parse_record("hitter", hitter.as_deref())?;

    let registry = load_registry(&config.model_dir, config.schema_variant)
        .context("Failed to load model artifacts")?;
    let confidence = StaticConfidence::new(config.pitcher_confidence, config.hitter_confidence);
    let aggregator = PredictionAggregator::new(Arc::new(registry))
        .with_confidence(Arc::new(confidence))
        .with_decimals(config.decimals);

    let result = aggregator.aggregate(pitcher.as_ref(), hitter.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

use crate::application::ml::registry::ModelRegistry;
use crate::application::parlay::ParlayService;
use crate::application::prediction::PredictionAggregator;
use crate::config::Config;
use crate::domain::confidence::StaticConfidence;
use crate::domain::ports::CandidateSource;
use crate::infrastructure::candidates::{JsonFilePool, SamplePool};
use crate::infrastructure::model_loader::load_registry;
use crate::infrastructure::observability::Metrics;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Fully wired prediction service: shared, read-only after build.
#[derive(Clone)]
pub struct Application {
    pub config: Config,
    pub aggregator: Arc<PredictionAggregator>,
    pub parlay: Arc<ParlayService>,
    pub metrics: Metrics,
}

impl Application {
    /// Loads model artifacts and the candidate source described by `config`.
    pub fn build(config: Config) -> Result<Self> {
        info!(
            "Building Propcast Application (schema: {}, models: {:?})...",
            config.model.schema_variant.as_str(),
            config.model.model_dir
        );

        let registry = load_registry(&config.model.model_dir, config.model.schema_variant)
            .context("Failed to load model artifacts")?;

        let source: Arc<dyn CandidateSource> = match &config.parlay.pool_path {
            Some(path) => {
                info!("Parlay candidates from {:?}", path);
                Arc::new(JsonFilePool::new(path.clone()))
            }
            None => {
                info!("Parlay candidates from built-in sample pool");
                Arc::new(SamplePool::new())
            }
        };

        Self::from_parts(config, registry, source)
    }

    /// Wires an application around an already built registry.
    pub fn from_parts(
        config: Config,
        registry: ModelRegistry,
        source: Arc<dyn CandidateSource>,
    ) -> Result<Self> {
        if registry.variant() != config.model.schema_variant {
            anyhow::bail!(
                "Registry built for '{}' schema but FEATURE_SCHEMA is '{}'",
                registry.variant().as_str(),
                config.model.schema_variant.as_str()
            );
        }

        let metrics = Metrics::new()?;
        let confidence = StaticConfidence::new(
            config.model.pitcher_confidence,
            config.model.hitter_confidence,
        );

        let aggregator = PredictionAggregator::new(Arc::new(registry))
            .with_confidence(Arc::new(confidence))
            .with_decimals(config.model.decimals)
            .with_metrics(metrics.clone());

        let parlay = ParlayService::new(source)
            .with_default_threshold(config.parlay.default_threshold)
            .with_limit(config.parlay.limit)
            .with_metrics(metrics.clone());

        Ok(Self {
            config,
            aggregator: Arc::new(aggregator),
            parlay: Arc::new(parlay),
            metrics,
        })
    }
}

use crate::application::ml::registry::ModelRegistry;
use crate::domain::confidence::{ConfidenceEstimator, StaticConfidence, clamp_confidence};
use crate::domain::errors::PredictionError;
use crate::domain::ml::normalizer::normalize_with_report;
use crate::domain::prediction::{PredictionEntry, PredictionGroup, PredictionResult, round_to};
use crate::domain::types::{PlayerType, StatRecord, Target};
use crate::infrastructure::observability::Metrics;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_DECIMALS: u32 = 1;

/// Turns raw stat lines into the rounded, two-group prediction response.
pub struct PredictionAggregator {
    registry: Arc<ModelRegistry>,
    confidence: Arc<dyn ConfidenceEstimator>,
    decimals: u32,
    metrics: Option<Metrics>,
}

impl PredictionAggregator {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self {
            registry,
            confidence: Arc::new(StaticConfidence::default()),
            decimals: DEFAULT_DECIMALS,
            metrics: None,
        }
    }

    pub fn with_confidence(mut self, confidence: Arc<dyn ConfidenceEstimator>) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Predicts every target for both player types.
    ///
    /// A missing side is treated as an empty record. Either both groups are
    /// returned or the first model failure is.
    pub fn aggregate(
        &self,
        pitcher_stats: Option<&StatRecord>,
        hitter_stats: Option<&StatRecord>,
    ) -> Result<PredictionResult, PredictionError> {
        let empty = StatRecord::new();

        let result = self
            .predict_group(PlayerType::Pitcher, pitcher_stats.unwrap_or(&empty))
            .and_then(|pitcher| {
                let hitter =
                    self.predict_group(PlayerType::Hitter, hitter_stats.unwrap_or(&empty))?;
                Ok(PredictionResult { pitcher, hitter })
            });

        if let Some(metrics) = &self.metrics {
            match &result {
                Ok(_) => metrics.inc_predictions("ok"),
                Err(e) => {
                    metrics.inc_predictions("error");
                    metrics.inc_model_failures(e.target().as_str());
                }
            }
        }
        if let Err(e) = &result {
            warn!("Prediction request failed: {}", e);
        }
        result
    }

    fn predict_group(
        &self,
        player: PlayerType,
        record: &StatRecord,
    ) -> Result<PredictionGroup, PredictionError> {
        let variant = self.registry.variant();
        let schema = variant.schema_for(player);
        let report = normalize_with_report(record, schema);

        let malformed = report.malformed_count();
        if malformed > 0 {
            if let Some(metrics) = &self.metrics {
                metrics.add_malformed_fields(player.as_str(), malformed as u64);
            }
        }

        let mut raw: Vec<(Target, f64)> = Vec::with_capacity(Target::for_player(player).len());
        for &target in Target::for_player(player) {
            let value = self.registry.predict(target, &report.vector)?;
            raw.push((target, value));
        }
        debug!(
            "{} features {:?} -> {:?} (defaults: {})",
            player,
            report.vector.to_f64_vec(),
            raw,
            report.substituted.len()
        );

        let confidence = clamp_confidence(self.confidence.confidence(player, &raw));
        let entries = raw
            .into_iter()
            .map(|(target, value)| PredictionEntry {
                target,
                key: target.response_key(variant),
                value: round_to(value, self.decimals),
            })
            .collect();

        Ok(PredictionGroup {
            player,
            entries,
            confidence,
        })
    }
}

use super::selector::{DEFAULT_LIMIT, DEFAULT_THRESHOLD, select};
use crate::domain::errors::ParlayError;
use crate::domain::parlay::ParlaySelection;
use crate::domain::ports::CandidateSource;
use crate::infrastructure::observability::Metrics;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds parlays from the current candidate pool.
pub struct ParlayService {
    source: Arc<dyn CandidateSource>,
    default_threshold: f64,
    limit: usize,
    metrics: Option<Metrics>,
}

impl ParlayService {
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        Self {
            source,
            default_threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            metrics: None,
        }
    }

    pub fn with_default_threshold(mut self, threshold: f64) -> Self {
        self.default_threshold = threshold;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn default_threshold(&self) -> f64 {
        self.default_threshold
    }

    /// Resolves a caller-supplied threshold.
    ///
    /// Numbers and numeric strings are accepted; anything else falls back to
    /// the default.
    pub fn resolve_threshold(&self, requested: Option<&Value>) -> f64 {
        let Some(value) = requested else {
            return self.default_threshold;
        };
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Null => return self.default_threshold,
            _ => None,
        };
        match parsed.filter(|t| t.is_finite()) {
            Some(t) => t,
            None => {
                debug!(
                    "Invalid parlay threshold {}, using default {}",
                    value, self.default_threshold
                );
                self.default_threshold
            }
        }
    }

    pub fn build(&self, requested: Option<&Value>) -> Result<ParlaySelection, ParlayError> {
        let threshold = self.resolve_threshold(requested);

        let candidates = match self.source.current_picks() {
            Ok(picks) => picks,
            Err(e) => {
                warn!("Candidate source failed: {:#}", e);
                self.record("error");
                return Err(ParlayError::CandidateSource {
                    reason: e.to_string(),
                });
            }
        };

        let parlay = select(&candidates, threshold, self.limit);
        debug!(
            "Parlay: {} of {} candidates at threshold {}",
            parlay.len(),
            candidates.len(),
            threshold
        );
        self.record(if parlay.is_empty() { "empty" } else { "ok" });
        Ok(ParlaySelection { parlay })
    }

    fn record(&self, outcome: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.inc_parlay_requests(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parlay::Pick;
    use crate::domain::types::PlayerType;
    use crate::infrastructure::mock::{MockCandidateSource, UnavailableCandidateSource};
    use serde_json::json;

    fn service() -> ParlayService {
        ParlayService::new(Arc::new(MockCandidateSource::new(vec![
            Pick::new(PlayerType::Pitcher, "A", "Over 6.5 K", 9.0),
            Pick::new(PlayerType::Hitter, "B", "1+ HR", 8.6),
            Pick::new(PlayerType::Hitter, "C", "2+ hits", 8.3),
        ])))
    }

    #[test]
    fn test_threshold_resolution() {
        let svc = service();
        assert_eq!(svc.resolve_threshold(None), 8.0);
        assert_eq!(svc.resolve_threshold(Some(&json!(8.5))), 8.5);
        assert_eq!(svc.resolve_threshold(Some(&json!(7))), 7.0);
        assert_eq!(svc.resolve_threshold(Some(&json!("9.1"))), 9.1);
        assert_eq!(svc.resolve_threshold(Some(&json!("high"))), 8.0);
        assert_eq!(svc.resolve_threshold(Some(&json!(null))), 8.0);
        assert_eq!(svc.resolve_threshold(Some(&json!([9]))), 8.0);
        assert_eq!(svc.resolve_threshold(Some(&json!("inf"))), 8.0);
    }

    #[test]
    fn test_build_uses_threshold() {
        let svc = service();
        assert_eq!(svc.build(None).unwrap().len(), 3);
        assert_eq!(svc.build(Some(&json!(8.5))).unwrap().len(), 2);
        assert!(svc.build(Some(&json!(9.5))).unwrap().is_empty());
        assert_eq!(svc.build(Some(&json!({"x": 1}))).unwrap().len(), 3);
    }

    #[test]
    fn test_configured_default_and_limit() {
        let svc = service().with_default_threshold(8.5).with_limit(1);
        let got = svc.build(None).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got.parlay[0].game, "A");
    }

    #[test]
    fn test_source_failure_surfaces() {
        let metrics = Metrics::new().unwrap();
        let svc =
            ParlayService::new(Arc::new(UnavailableCandidateSource)).with_metrics(metrics.clone());
        let err = svc.build(None).unwrap_err();
        assert!(err.to_string().contains("candidate feed offline"));
        assert!(
            metrics
                .render()
                .contains("propcast_parlay_requests_total{outcome=\"error\"} 1")
        );
    }
}

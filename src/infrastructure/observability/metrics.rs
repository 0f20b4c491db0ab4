//! Prometheus metrics definitions for Propcast
//!
//! All metrics use the `propcast_` prefix and are read-only.

use prometheus::{
    CounterVec, Gauge, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Prediction requests by status (ok/error)
    pub predictions_total: CounterVec,
    /// Model failures by target
    pub model_failures_total: CounterVec,
    /// Parlay requests by outcome (ok/empty/error)
    pub parlay_requests_total: CounterVec,
    /// Stat values replaced by defaults because they were malformed
    pub malformed_fields_total: CounterVec,
    /// Uptime in seconds
    pub uptime_seconds: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new(
                "propcast_predictions_total",
                "Total prediction requests by status",
            ),
            &["status"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let model_failures_total = CounterVec::new(
            Opts::new(
                "propcast_model_failures_total",
                "Total model failures by target",
            ),
            &["target"],
        )?;
        registry.register(Box::new(model_failures_total.clone()))?;

        let parlay_requests_total = CounterVec::new(
            Opts::new(
                "propcast_parlay_requests_total",
                "Total parlay requests by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(parlay_requests_total.clone()))?;

        let malformed_fields_total = CounterVec::new(
            Opts::new(
                "propcast_malformed_fields_total",
                "Stat fields replaced by defaults because they were malformed",
            ),
            &["player"],
        )?;
        registry.register(Box::new(malformed_fields_total.clone()))?;

        let uptime_seconds = Gauge::with_opts(Opts::new(
            "propcast_uptime_seconds",
            "Server uptime in seconds",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            model_failures_total,
            parlay_requests_total,
            malformed_fields_total,
            uptime_seconds,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn inc_predictions(&self, status: &str) {
        self.predictions_total.with_label_values(&[status]).inc();
    }

    pub fn inc_model_failures(&self, target: &str) {
        self.model_failures_total.with_label_values(&[target]).inc();
    }

    pub fn inc_parlay_requests(&self, outcome: &str) {
        self.parlay_requests_total.with_label_values(&[outcome]).inc();
    }

    pub fn add_malformed_fields(&self, player: &str, count: u64) {
        self.malformed_fields_total
            .with_label_values(&[player])
            .inc_by(count as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create default Metrics")
    }
}

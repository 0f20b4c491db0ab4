//! Push-based metrics reporter for Propcast
//!
//! Periodically outputs request counters as structured JSON to stdout.

use crate::infrastructure::observability::metrics::Metrics;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Metrics snapshot for JSON output
#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub schema: String,
    pub predictions: PredictionSnapshot,
    pub parlays: ParlaySnapshot,
}

#[derive(Debug, Serialize)]
pub struct PredictionSnapshot {
    pub ok: u64,
    pub failed: u64,
}

#[derive(Debug, Serialize)]
pub struct ParlaySnapshot {
    pub ok: u64,
    pub empty: u64,
    pub failed: u64,
}

/// Push-based metrics reporter
///
/// Outputs metrics as structured JSON logs on a configurable interval.
pub struct MetricsReporter {
    metrics: Metrics,
    schema: String,
    start_time: Instant,
    interval: Duration,
}

impl MetricsReporter {
    pub fn new(metrics: Metrics, schema: impl Into<String>, interval_seconds: u64) -> Self {
        Self {
            metrics,
            schema: schema.into(),
            start_time: Instant::now(),
            interval: Duration::from_secs(interval_seconds),
        }
    }

    /// Run the reporter in a loop, outputting metrics periodically
    pub async fn run(self) {
        info!(
            "MetricsReporter: Starting push-based metrics (interval: {:?})",
            self.interval
        );

        loop {
            tokio::time::sleep(self.interval).await;

            let snapshot = self.collect_snapshot();
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    // Use a special prefix so logs can be easily filtered
                    println!("METRICS_JSON:{}", json);
                    info!(
                        "Predictions: {} ok / {} failed | Parlays: {} | Uptime: {}s",
                        snapshot.predictions.ok,
                        snapshot.predictions.failed,
                        snapshot.parlays.ok + snapshot.parlays.empty,
                        snapshot.uptime_seconds
                    );
                }
                Err(e) => warn!("Failed to serialize metrics: {}", e),
            }
        }
    }

    fn collect_snapshot(&self) -> MetricsSnapshot {
        let uptime = self.start_time.elapsed().as_secs();
        self.metrics.uptime_seconds.set(uptime as f64);

        let prediction = |status: &str| {
            self.metrics
                .predictions_total
                .with_label_values(&[status])
                .get() as u64
        };
        let parlay = |outcome: &str| {
            self.metrics
                .parlay_requests_total
                .with_label_values(&[outcome])
                .get() as u64
        };

        MetricsSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: uptime,
            version: env!("CARGO_PKG_VERSION").to_string(),
            schema: self.schema.clone(),
            predictions: PredictionSnapshot {
                ok: prediction("ok"),
                failed: prediction("error"),
            },
            parlays: ParlaySnapshot {
                ok: parlay("ok"),
                empty: parlay("empty"),
                failed: parlay("error"),
            },
        }
    }
}

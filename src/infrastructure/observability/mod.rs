//! Push-based observability for Propcast
//!
//! Counters are kept in a prometheus registry and periodically pushed as
//! structured JSON logs to stdout (for Loki, Fluentd, CloudWatch).

pub mod metrics;
pub mod reporter;

pub use metrics::Metrics;
pub use reporter::MetricsReporter;

pub mod aggregator;

pub use aggregator::PredictionAggregator;

use crate::domain::types::StatRecord;
use serde::Deserialize;
use serde_json::Value;

/// Body of a player-props prediction request.
///
/// Both sides are optional and kept as raw JSON; a side that is not an object
/// is treated as an empty stat line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    #[serde(default)]
    pub pitcher_stats: Option<Value>,
    #[serde(default)]
    pub hitter_stats: Option<Value>,
}

impl PredictionRequest {
    pub fn pitcher_record(&self) -> StatRecord {
        self.pitcher_stats
            .as_ref()
            .map(StatRecord::from_value)
            .unwrap_or_default()
    }

    pub fn hitter_record(&self) -> StatRecord {
        self.hitter_stats
            .as_ref()
            .map(StatRecord::from_value)
            .unwrap_or_default()
    }

    /// Lenient parse: an empty body, `null` or a non-object yields an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

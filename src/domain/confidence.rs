use crate::domain::types::{PlayerType, Target};
use serde::Serializer;

pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 10.0;

/// Produces the 0-10 confidence attached to a player group.
///
/// Receives the raw (unrounded) predictions so an uncertainty-aware
/// implementation can be dropped in without touching aggregation.
pub trait ConfidenceEstimator: Send + Sync {
    fn confidence(&self, player: PlayerType, predictions: &[(Target, f64)]) -> f64;
}

/// Fixed score per player type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticConfidence {
    pub pitcher: f64,
    pub hitter: f64,
}

impl StaticConfidence {
    pub fn new(pitcher: f64, hitter: f64) -> Self {
        Self {
            pitcher: clamp_confidence(pitcher),
            hitter: clamp_confidence(hitter),
        }
    }
}

impl Default for StaticConfidence {
    fn default() -> Self {
        Self::new(9.0, 8.0)
    }
}

impl ConfidenceEstimator for StaticConfidence {
    fn confidence(&self, player: PlayerType, _predictions: &[(Target, f64)]) -> f64 {
        match player {
            PlayerType::Pitcher => self.pitcher,
            PlayerType::Hitter => self.hitter,
        }
    }
}

/// Writes a whole score as an integer (`9`, not `9.0`).
pub fn serialize_score<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_CONFIDENCE;
    }
    value.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_defaults() {
        let c = StaticConfidence::default();
        assert_eq!(c.confidence(PlayerType::Pitcher, &[]), 9.0);
        assert_eq!(c.confidence(PlayerType::Hitter, &[]), 8.0);
    }

    #[test]
    fn test_static_ignores_predictions() {
        let c = StaticConfidence::new(7.5, 6.0);
        let preds = [(Target::Strikeouts, 11.0), (Target::Innings, 0.1)];
        assert_eq!(c.confidence(PlayerType::Pitcher, &preds), 7.5);
    }

    #[test]
    fn test_clamped_to_scale() {
        let c = StaticConfidence::new(14.0, -2.0);
        assert_eq!(c.pitcher, 10.0);
        assert_eq!(c.hitter, 0.0);
        assert_eq!(clamp_confidence(f64::NAN), 0.0);
    }
}

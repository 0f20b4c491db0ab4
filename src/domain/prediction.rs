use crate::domain::types::{PlayerType, Target};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionEntry {
    pub target: Target,
    pub key: &'static str,
    pub value: f64,
}

/// Rounded predictions for one player type.
///
/// Serializes as a flat object: one field per prediction in response order,
/// then `confidence`.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionGroup {
    pub player: PlayerType,
    pub entries: Vec<PredictionEntry>,
    pub confidence: f64,
}

impl PredictionGroup {
    pub fn get(&self, target: Target) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.target == target)
            .map(|e| e.value)
    }

    pub fn get_by_key(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.value)
    }
}

impl Serialize for PredictionGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for entry in &self.entries {
            map.serialize_entry(entry.key, &entry.value)?;
        }
        // Whole scores go out as integers (9, not 9.0).
        if self.confidence.fract() == 0.0 {
            map.serialize_entry("confidence", &(self.confidence as i64))?;
        } else {
            map.serialize_entry("confidence", &self.confidence)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub pitcher: PredictionGroup,
    pub hitter: PredictionGroup,
}

/// Rounds to `decimals` places. Exact ties on the scaled value go to the even
/// neighbour, so `1.125` becomes `1.12`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(5.46, 1), 5.5);
        assert_eq!(round_to(5.44, 1), 5.4);
        assert_eq!(round_to(0.126, 2), 0.13);
        assert_eq!(round_to(-1.26, 1), -1.3);
        assert_eq!(round_to(3.0, 2), 3.0);
    }

    #[test]
    fn test_round_to_ties_go_even() {
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(0.75, 1), 0.8);
        assert_eq!(round_to(1.125, 2), 1.12);
        assert_eq!(round_to(-1.25, 1), -1.2);
        // 2.675 is stored just below the tie
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_group_serialization_shape() {
        let group = PredictionGroup {
            player: PlayerType::Hitter,
            entries: vec![
                PredictionEntry {
                    target: Target::Hits,
                    key: "predicted_hits",
                    value: 1.2,
                },
                PredictionEntry {
                    target: Target::HomeRuns,
                    key: "predicted_hr",
                    value: 0.3,
                },
            ],
            confidence: 8.0,
        };
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(
            value,
            json!({"predicted_hits": 1.2, "predicted_hr": 0.3, "confidence": 8})
        );

        let text = serde_json::to_string(&group).unwrap();
        assert!(text.starts_with("{\"predicted_hits\""));
        assert!(text.ends_with("\"confidence\":8}"));
    }

    #[test]
    fn test_fractional_confidence_kept() {
        let group = PredictionGroup {
            player: PlayerType::Pitcher,
            entries: vec![],
            confidence: 8.5,
        };
        assert_eq!(serde_json::to_value(&group).unwrap(), json!({"confidence": 8.5}));
    }

    #[test]
    fn test_group_lookup() {
        let group = PredictionGroup {
            player: PlayerType::Pitcher,
            entries: vec![PredictionEntry {
                target: Target::Strikeouts,
                key: "predicted_strikeouts",
                value: 6.1,
            }],
            confidence: 9.0,
        };
        assert_eq!(group.get(Target::Strikeouts), Some(6.1));
        assert_eq!(group.get_by_key("predicted_strikeouts"), Some(6.1));
        assert_eq!(group.get(Target::Innings), None);
    }
}

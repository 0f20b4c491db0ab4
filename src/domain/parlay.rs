use crate::domain::confidence::serialize_score;
use crate::domain::types::PlayerType;
use serde::{Deserialize, Serialize};

/// A candidate parlay leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    #[serde(rename = "type")]
    pub pick_type: PlayerType,
    /// Matchup the pick belongs to. Older pool files call it `label`.
    #[serde(alias = "label")]
    pub game: String,
    pub prediction: String,
    #[serde(serialize_with = "serialize_score")]
    pub confidence: f64,
}

impl Pick {
    pub fn new(
        pick_type: PlayerType,
        game: impl Into<String>,
        prediction: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            pick_type,
            game: game.into(),
            prediction: prediction.into(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParlaySelection {
    pub parlay: Vec<Pick>,
}

impl ParlaySelection {
    pub fn len(&self) -> usize {
        self.parlay.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parlay.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pick_wire_format() {
        let picks = vec![
            Pick::new(PlayerType::Pitcher, "Sample Game A", "Strikeouts: 7.0", 9.0),
            Pick::new(PlayerType::Hitter, "Sample Game B", "Home Runs: 1.0", 8.6),
        ];
        let text = serde_json::to_string(&ParlaySelection { parlay: picks }).unwrap();
        assert_eq!(
            text,
            r#"{"parlay":[{"type":"pitcher","game":"Sample Game A","prediction":"Strikeouts: 7.0","confidence":9},{"type":"hitter","game":"Sample Game B","prediction":"Home Runs: 1.0","confidence":8.6}]}"#
        );
    }

    #[test]
    fn test_pick_deserializes_from_pool_json() {
        let pick: Pick = serde_json::from_value(json!({
            "type": "hitter",
            "label": "Juan Soto",
            "prediction": "1+ hits",
            "confidence": 8.3
        }))
        .unwrap();
        assert_eq!(pick.pick_type, PlayerType::Hitter);
        assert_eq!(pick.game, "Juan Soto");
        assert_eq!(pick.confidence, 8.3);

        let pick: Pick = serde_json::from_value(json!({
            "type": "pitcher",
            "game": "Sample Game A",
            "prediction": "Strikeouts: 7.0",
            "confidence": 9
        }))
        .unwrap();
        assert_eq!(pick.game, "Sample Game A");
        assert_eq!(pick.confidence, 9.0);
    }
}

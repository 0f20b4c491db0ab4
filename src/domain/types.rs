use crate::domain::ml::feature_schema::{SchemaId, SchemaVariant};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Pitcher,
    Hitter,
}

impl PlayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerType::Pitcher => "pitcher",
            PlayerType::Hitter => "hitter",
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statistic with its own trained regressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Strikeouts,
    Innings,
    HomeRuns,
    Hits,
    Rbi,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::Strikeouts,
        Target::Innings,
        Target::HomeRuns,
        Target::Hits,
        Target::Rbi,
    ];

    pub fn player(&self) -> PlayerType {
        match self {
            Target::Strikeouts | Target::Innings => PlayerType::Pitcher,
            Target::HomeRuns | Target::Hits | Target::Rbi => PlayerType::Hitter,
        }
    }

    /// Targets of a player type, in the order they appear in responses.
    pub fn for_player(player: PlayerType) -> &'static [Target] {
        match player {
            PlayerType::Pitcher => &[Target::Strikeouts, Target::Innings],
            PlayerType::Hitter => &[Target::Hits, Target::HomeRuns, Target::Rbi],
        }
    }

    /// Artifact file name without extension.
    pub fn artifact_stem(&self) -> &'static str {
        match self {
            Target::Strikeouts => "pitcher_k_model",
            Target::Innings => "pitcher_ip_model",
            Target::HomeRuns => "hitter_hr_model",
            Target::Hits => "hitter_hits_model",
            Target::Rbi => "hitter_rbi_model",
        }
    }

    /// Response field name. The home-run key differs between schema variants
    /// because clients of each deployment were built against different names.
    pub fn response_key(&self, variant: SchemaVariant) -> &'static str {
        match (self, variant) {
            (Target::Strikeouts, _) => "predicted_strikeouts",
            (Target::Innings, _) => "predicted_innings",
            (Target::HomeRuns, SchemaVariant::Counting) => "predicted_hr",
            (Target::HomeRuns, SchemaVariant::Rate) => "predicted_home_runs",
            (Target::Hits, _) => "predicted_hits",
            (Target::Rbi, _) => "predicted_rbi",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Strikeouts => "strikeouts",
            Target::Innings => "innings",
            Target::HomeRuns => "home_runs",
            Target::Hits => "hits",
            Target::Rbi => "rbi",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse, loosely typed stat line as received from a client.
///
/// Values are kept as raw JSON so that malformed entries survive
/// deserialization and can be replaced by schema defaults later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatRecord(Map<String, Value>);

impl StatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Exact key first, then the first key equal ignoring ASCII case.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.0.get(key).or_else(|| {
            self.0
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lenient conversion: anything that is not a JSON object becomes empty.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self(map.clone()),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for StatRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Float(f64),
    Int(i64),
}

impl FeatureValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            FeatureValue::Float(v) => *v,
            FeatureValue::Int(v) => *v as f64,
        }
    }
}

/// Model input in the canonical column order of `schema`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub schema: SchemaId,
    pub values: Vec<FeatureValue>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.values.iter().map(FeatureValue::as_f64).collect()
    }
}

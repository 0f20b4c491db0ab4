use crate::domain::types::PlayerType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric type a model was trained with for a given column.
///
/// Tree-based regressors split on raw thresholds, so feeding `2.9` where the
/// training data only ever held `2` changes which leaf is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Fractional,
    Integral,
}

/// One column of a feature schema: the request key, its fallback and its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub default: f64,
    pub kind: FeatureKind,
}

impl FieldSpec {
    const fn float(key: &'static str, default: f64) -> Self {
        Self {
            key,
            default,
            kind: FeatureKind::Fractional,
        }
    }

    const fn int(key: &'static str, default: f64) -> Self {
        Self {
            key,
            default,
            kind: FeatureKind::Integral,
        }
    }
}

/// Name + version of a feature layout.
///
/// Every regressor artifact declares the id it was trained against; the
/// registry refuses to bind a regressor to a player type whose configured
/// schema carries a different id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaId {
    pub name: SchemaName,
    pub version: u32,
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@v{}", self.name.as_str(), self.version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaName {
    PitcherCounting,
    HitterCounting,
    PitcherRate,
    HitterRate,
}

impl SchemaName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaName::PitcherCounting => "pitcher_counting",
            SchemaName::HitterCounting => "hitter_counting",
            SchemaName::PitcherRate => "pitcher_rate",
            SchemaName::HitterRate => "hitter_rate",
        }
    }
}

/// Ordered feature layout expected by a family of regressors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSchema {
    pub id: SchemaId,
    pub player: PlayerType,
    pub fields: &'static [FieldSpec],
}

impl FeatureSchema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }
}

// The column order below is the training contract of the shipped artifacts.
// Reordering or changing a default requires retraining and a version bump.

/// IP, H, BB, ER over the recent window.
pub const PITCHER_COUNTING: FeatureSchema = FeatureSchema {
    id: SchemaId {
        name: SchemaName::PitcherCounting,
        version: 1,
    },
    player: PlayerType::Pitcher,
    fields: &[
        FieldSpec::float("IP", 5.0),
        FieldSpec::float("H", 6.0),
        FieldSpec::float("BB", 2.0),
        FieldSpec::float("ER", 2.0),
    ],
};

/// AB, H, BB, RBI. Integral: the hitter models were fit on whole counts.
pub const HITTER_COUNTING: FeatureSchema = FeatureSchema {
    id: SchemaId {
        name: SchemaName::HitterCounting,
        version: 1,
    },
    player: PlayerType::Hitter,
    fields: &[
        FieldSpec::int("AB", 4.0),
        FieldSpec::int("H", 2.0),
        FieldSpec::int("BB", 1.0),
        FieldSpec::int("RBI", 2.0),
    ],
};

/// Season rates. An unreported rate counts as zero.
pub const PITCHER_RATE: FeatureSchema = FeatureSchema {
    id: SchemaId {
        name: SchemaName::PitcherRate,
        version: 1,
    },
    player: PlayerType::Pitcher,
    fields: &[
        FieldSpec::float("era", 0.0),
        FieldSpec::float("whip", 0.0),
        FieldSpec::float("k9", 0.0),
        FieldSpec::float("ip_per_game", 0.0),
    ],
};

pub const HITTER_RATE: FeatureSchema = FeatureSchema {
    id: SchemaId {
        name: SchemaName::HitterRate,
        version: 1,
    },
    player: PlayerType::Hitter,
    fields: &[
        FieldSpec::float("avg", 0.0),
        FieldSpec::float("obp", 0.0),
        FieldSpec::float("slg", 0.0),
        FieldSpec::float("hr", 0.0),
        FieldSpec::float("rbi", 0.0),
        FieldSpec::float("hits", 0.0),
    ],
};

/// Deployment-wide choice of feature layout. Selects both player schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaVariant {
    #[default]
    Counting,
    Rate,
}

impl SchemaVariant {
    pub fn schema_for(&self, player: PlayerType) -> &'static FeatureSchema {
        match (self, player) {
            (SchemaVariant::Counting, PlayerType::Pitcher) => &PITCHER_COUNTING,
            (SchemaVariant::Counting, PlayerType::Hitter) => &HITTER_COUNTING,
            (SchemaVariant::Rate, PlayerType::Pitcher) => &PITCHER_RATE,
            (SchemaVariant::Rate, PlayerType::Hitter) => &HITTER_RATE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Counting => "counting",
            SchemaVariant::Rate => "rate",
        }
    }
}

impl FromStr for SchemaVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "counting" => Ok(SchemaVariant::Counting),
            "rate" => Ok(SchemaVariant::Rate),
            _ => anyhow::bail!(
                "Invalid FEATURE_SCHEMA: {}. Must be 'counting' or 'rate'",
                s
            ),
        }
    }
}

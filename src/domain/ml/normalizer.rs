use crate::domain::ml::feature_schema::{FeatureKind, FeatureSchema, FieldSpec};
use crate::domain::types::{FeatureValue, FeatureVector, StatRecord};
use serde_json::Value;
use tracing::debug;

/// Why a field fell back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    Missing,
    Malformed,
}

/// Normalized vector plus the keys that were defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationReport {
    pub vector: FeatureVector,
    pub substituted: Vec<(&'static str, Substitution)>,
}

impl NormalizationReport {
    pub fn malformed_count(&self) -> usize {
        self.substituted
            .iter()
            .filter(|(_, s)| *s == Substitution::Malformed)
            .count()
    }
}

/// Builds the model input for `schema` from a partial stat record.
///
/// Never fails: absent or uncoercible fields take the schema default. Keys
/// match ignoring ASCII case, so `ERA` fills the `era` column.
pub fn normalize(record: &StatRecord, schema: &FeatureSchema) -> FeatureVector {
    normalize_with_report(record, schema).vector
}

pub fn normalize_with_report(record: &StatRecord, schema: &FeatureSchema) -> NormalizationReport {
    let mut values = Vec::with_capacity(schema.len());
    let mut substituted = Vec::new();

    for field in schema.fields {
        let raw = match record.lookup(field.key) {
            Some(value) => match coerce_number(value) {
                Some(v) => Some(v),
                None => {
                    debug!(
                        key = field.key,
                        schema = %schema.id,
                        "Malformed stat value {}, using default {}",
                        value,
                        field.default
                    );
                    substituted.push((field.key, Substitution::Malformed));
                    None
                }
            },
            None => {
                substituted.push((field.key, Substitution::Missing));
                None
            }
        };

        values.push(to_feature(field, raw.unwrap_or(field.default)));
    }

    NormalizationReport {
        vector: FeatureVector {
            schema: schema.id,
            values,
        },
        substituted,
    }
}

fn to_feature(field: &FieldSpec, value: f64) -> FeatureValue {
    match field.kind {
        FeatureKind::Fractional => FeatureValue::Float(value),
        FeatureKind::Integral => FeatureValue::Int(value.trunc() as i64),
    }
}

/// Numbers pass through, numeric strings are parsed, everything else is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

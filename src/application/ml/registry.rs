use crate::domain::errors::{PredictionError, RegistryError, RegressorError};
use crate::domain::ml::feature_schema::SchemaVariant;
use crate::domain::ports::Regressor;
use crate::domain::types::{FeatureVector, Target};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Immutable set of regressors, one per target.
///
/// Built once at startup and shared behind an `Arc`; lookups take no locks.
pub struct ModelRegistry {
    variant: SchemaVariant,
    models: HashMap<Target, Arc<dyn Regressor>>,
}

impl ModelRegistry {
    pub fn builder(variant: SchemaVariant) -> ModelRegistryBuilder {
        ModelRegistryBuilder {
            variant,
            models: HashMap::new(),
        }
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn get(&self, target: Target) -> Result<&Arc<dyn Regressor>, PredictionError> {
        self.models
            .get(&target)
            .ok_or(PredictionError::ModelUnavailable { target })
    }

    pub fn contains(&self, target: Target) -> bool {
        self.models.contains_key(&target)
    }

    pub fn predict(&self, target: Target, features: &FeatureVector) -> Result<f64, PredictionError> {
        let model = self.get(target)?;
        if features.schema != model.schema() {
            let mismatch = RegressorError::SchemaMismatch {
                expected: model.schema(),
                actual: features.schema,
            };
            return Err(PredictionError::Inference {
                target,
                reason: mismatch.to_string(),
            });
        }

        let value = model
            .predict(features)
            .map_err(|e| PredictionError::Inference {
                target,
                reason: e.to_string(),
            })?;

        if !value.is_finite() {
            return Err(PredictionError::Inference {
                target,
                reason: format!("non-finite output {}", value),
            });
        }
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

pub struct ModelRegistryBuilder {
    variant: SchemaVariant,
    models: HashMap<Target, Arc<dyn Regressor>>,
}

impl ModelRegistryBuilder {
    /// Binds `regressor` to `target` after checking it was trained on the
    /// schema this deployment feeds to that player type.
    pub fn register(
        mut self,
        target: Target,
        regressor: Arc<dyn Regressor>,
    ) -> Result<Self, RegistryError> {
        let expected = self.variant.schema_for(target.player()).id;
        let actual = regressor.schema();
        if expected != actual {
            return Err(RegistryError::SchemaMismatch {
                target,
                expected,
                actual,
            });
        }
        if self.models.contains_key(&target) {
            return Err(RegistryError::DuplicateTarget { target });
        }

        info!(
            "Registered {} {} for {} ({})",
            regressor.name(),
            regressor.version(),
            target,
            actual
        );
        self.models.insert(target, regressor);
        Ok(self)
    }

    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            variant: self.variant,
            models: self.models,
        }
    }

    /// Like `build`, but every known target must have a regressor.
    pub fn build_complete(self) -> Result<ModelRegistry, RegistryError> {
        let missing: Vec<Target> = Target::ALL
            .iter()
            .copied()
            .filter(|t| !self.models.contains_key(t))
            .collect();
        if !missing.is_empty() {
            return Err(RegistryError::MissingTargets { targets: missing });
        }
        Ok(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::feature_schema::{HITTER_RATE, PITCHER_COUNTING};
    use crate::domain::ml::normalizer::normalize;
    use crate::domain::types::StatRecord;
    use crate::infrastructure::mock::{ConstantRegressor, FailingRegressor};

    #[test]
    fn test_register_and_predict() {
        let registry = ModelRegistry::builder(SchemaVariant::Counting)
            .register(
                Target::Strikeouts,
                Arc::new(ConstantRegressor::new(PITCHER_COUNTING.id, 5.7)),
            )
            .unwrap()
            .build();

        let fv = normalize(&StatRecord::new(), &PITCHER_COUNTING);
        assert_eq!(registry.predict(Target::Strikeouts, &fv).unwrap(), 5.7);
        assert!(matches!(
            registry.predict(Target::Innings, &fv),
            Err(PredictionError::ModelUnavailable {
                target: Target::Innings
            })
        ));
    }

    #[test]
    fn test_schema_mismatch_rejected_at_registration() {
        let result = ModelRegistry::builder(SchemaVariant::Counting).register(
            Target::Hits,
            Arc::new(ConstantRegressor::new(HITTER_RATE.id, 1.0)),
        );
        assert!(matches!(
            result,
            Err(RegistryError::SchemaMismatch {
                target: Target::Hits,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let result = ModelRegistry::builder(SchemaVariant::Counting)
            .register(
                Target::Innings,
                Arc::new(ConstantRegressor::new(PITCHER_COUNTING.id, 5.0)),
            )
            .unwrap()
            .register(
                Target::Innings,
                Arc::new(ConstantRegressor::new(PITCHER_COUNTING.id, 6.0)),
            );
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateTarget {
                target: Target::Innings
            })
        ));
    }

    #[test]
    fn test_build_complete_lists_missing() {
        let err = ModelRegistry::builder(SchemaVariant::Counting)
            .register(
                Target::Strikeouts,
                Arc::new(ConstantRegressor::new(PITCHER_COUNTING.id, 5.0)),
            )
            .unwrap()
            .build_complete()
            .err()
            .expect("incomplete registry must be rejected");
        match err {
            RegistryError::MissingTargets { targets } => {
                assert_eq!(targets.len(), 4);
                assert!(!targets.contains(&Target::Strikeouts));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inference_failure_mapped() {
        let registry = ModelRegistry::builder(SchemaVariant::Counting)
            .register(
                Target::Strikeouts,
                Arc::new(FailingRegressor::new(PITCHER_COUNTING.id)),
            )
            .unwrap()
            .build();
        let fv = normalize(&StatRecord::new(), &PITCHER_COUNTING);
        assert!(matches!(
            registry.predict(Target::Strikeouts, &fv),
            Err(PredictionError::Inference { .. })
        ));
    }

    #[test]
    fn test_vector_from_other_schema_rejected() {
        let registry = ModelRegistry::builder(SchemaVariant::Counting)
            .register(
                Target::Strikeouts,
                Arc::new(ConstantRegressor::new(PITCHER_COUNTING.id, 5.0)),
            )
            .unwrap()
            .build();
        let fv = normalize(&StatRecord::new(), &HITTER_RATE);
        match registry.predict(Target::Strikeouts, &fv) {
            Err(PredictionError::Inference { reason, .. }) => {
                assert!(reason.contains("hitter_rate@v1"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_output_rejected() {
        let registry = ModelRegistry::builder(SchemaVariant::Counting)
            .register(
                Target::Innings,
                Arc::new(ConstantRegressor::new(PITCHER_COUNTING.id, f64::NAN)),
            )
            .unwrap()
            .build();
        let fv = normalize(&StatRecord::new(), &PITCHER_COUNTING);
        assert!(registry.predict(Target::Innings, &fv).is_err());
    }
}

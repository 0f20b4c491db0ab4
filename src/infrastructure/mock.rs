use crate::application::ml::registry::ModelRegistry;
use crate::domain::errors::RegressorError;
use crate::domain::ml::feature_schema::{SchemaId, SchemaVariant};
use crate::domain::parlay::Pick;
use crate::domain::ports::{CandidateSource, Regressor};
use crate::domain::types::{FeatureVector, Target};
use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Regressor that returns the same value for every input.
pub struct ConstantRegressor {
    schema: SchemaId,
    value: f64,
    calls: AtomicUsize,
}

impl ConstantRegressor {
    pub fn new(schema: SchemaId, value: f64) -> Self {
        Self {
            schema,
            value,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Regressor for ConstantRegressor {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, RegressorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.value)
    }

    fn schema(&self) -> SchemaId {
        self.schema
    }

    fn name(&self) -> &str {
        "Constant"
    }

    fn version(&self) -> &str {
        "mock"
    }
}

/// Regressor computing its output from the feature vector.
pub struct FnRegressor<F> {
    schema: SchemaId,
    f: F,
}

impl<F> FnRegressor<F>
where
    F: Fn(&FeatureVector) -> f64 + Send + Sync,
{
    pub fn new(schema: SchemaId, f: F) -> Self {
        Self { schema, f }
    }
}

impl<F> Regressor for FnRegressor<F>
where
    F: Fn(&FeatureVector) -> f64 + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64, RegressorError> {
        Ok((self.f)(features))
    }

    fn schema(&self) -> SchemaId {
        self.schema
    }

    fn name(&self) -> &str {
        "Fn"
    }

    fn version(&self) -> &str {
        "mock"
    }
}

/// Regressor whose inference always fails.
pub struct FailingRegressor {
    schema: SchemaId,
}

impl FailingRegressor {
    pub fn new(schema: SchemaId) -> Self {
        Self { schema }
    }
}

impl Regressor for FailingRegressor {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, RegressorError> {
        Err(RegressorError::Failed {
            reason: "mock inference failure".to_string(),
        })
    }

    fn schema(&self) -> SchemaId {
        self.schema
    }

    fn name(&self) -> &str {
        "Failing"
    }

    fn version(&self) -> &str {
        "mock"
    }
}

/// Complete registry of constant regressors, value chosen per target.
pub fn mock_registry(variant: SchemaVariant, value_for: impl Fn(Target) -> f64) -> ModelRegistry {
    let mut builder = ModelRegistry::builder(variant);
    for target in Target::ALL {
        let schema = variant.schema_for(target.player()).id;
        builder = builder
            .register(target, Arc::new(ConstantRegressor::new(schema, value_for(target))))
            .expect("mock regressors share the variant schema");
    }
    builder.build()
}

/// Candidate source backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct MockCandidateSource {
    picks: Vec<Pick>,
}

impl MockCandidateSource {
    pub fn new(picks: Vec<Pick>) -> Self {
        Self { picks }
    }
}

impl CandidateSource for MockCandidateSource {
    fn current_picks(&self) -> Result<Vec<Pick>> {
        Ok(self.picks.clone())
    }
}

/// Candidate source that is always down.
#[derive(Debug, Clone, Default)]
pub struct UnavailableCandidateSource;

impl CandidateSource for UnavailableCandidateSource {
    fn current_picks(&self) -> Result<Vec<Pick>> {
        anyhow::bail!("candidate feed offline")
    }
}

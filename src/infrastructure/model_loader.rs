use crate::application::ml::registry::ModelRegistry;
use crate::application::ml::smartcore_regressor::SmartCoreRegressor;
use crate::domain::errors::ArtifactError;
use crate::domain::ml::feature_schema::SchemaVariant;
use crate::domain::types::Target;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

pub fn artifact_path(model_dir: &Path, target: Target) -> PathBuf {
    model_dir.join(format!("{}.json", target.artifact_stem()))
}

/// Loads one artifact per target from `model_dir`.
///
/// Any missing, unreadable or mismatched artifact aborts the load; the
/// service must not start with a partial model set.
pub fn load_registry(
    model_dir: &Path,
    variant: SchemaVariant,
) -> Result<ModelRegistry, ArtifactError> {
    info!(
        "Loading models from {:?} (schema variant: {})",
        model_dir,
        variant.as_str()
    );

    let mut builder = ModelRegistry::builder(variant);
    for target in Target::ALL {
        let path = artifact_path(model_dir, target);
        let regressor = SmartCoreRegressor::load(&path, target)?;
        builder = builder.register(target, Arc::new(regressor))?;
    }

    let registry = builder.build_complete()?;
    info!("Model registry ready: {} regressors", registry.len());
    Ok(registry)
}

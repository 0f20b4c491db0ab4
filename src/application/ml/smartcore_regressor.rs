use crate::domain::errors::{ArtifactError, RegressorError};
use crate::domain::ml::feature_schema::SchemaId;
use crate::domain::ports::Regressor;
use crate::domain::types::{FeatureVector, Target};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// On-disk artifact: the fitted forest plus the contract it was trained under.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub target: Target,
    pub schema: SchemaId,
    pub model: ForestModel,
}

impl ModelArtifact {
    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let file = File::create(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer(file, self).map_err(|source| ArtifactError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Random-forest regressor loaded from a serialized smartcore model.
pub struct SmartCoreRegressor {
    model: ForestModel,
    schema: SchemaId,
    target: Target,
    version: String,
    source: Option<PathBuf>,
}

impl SmartCoreRegressor {
    pub fn new(target: Target, schema: SchemaId, model: ForestModel) -> Self {
        Self {
            model,
            schema,
            target,
            version: schema.to_string(),
            source: None,
        }
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self::new(artifact.target, artifact.schema, artifact.model)
    }

    /// Loads the artifact at `path` and checks it was trained for `target`.
    pub fn load(path: &Path, target: Target) -> Result<Self, ArtifactError> {
        let artifact = ModelArtifact::load(path)?;
        if artifact.target != target {
            return Err(ArtifactError::WrongTarget {
                path: path.to_path_buf(),
                expected: target,
                found: artifact.target,
            });
        }

        info!(
            "Successfully loaded {} model from {:?} (schema {})",
            target, path, artifact.schema
        );
        let mut regressor = Self::from_artifact(artifact);
        regressor.source = Some(path.to_path_buf());
        Ok(regressor)
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Regressor for SmartCoreRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, RegressorError> {
        if features.schema != self.schema {
            return Err(RegressorError::SchemaMismatch {
                expected: self.schema,
                actual: features.schema,
            });
        }

        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_f64_vec()]).map_err(|e| {
            RegressorError::Failed {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| RegressorError::Failed {
                reason: format!("Prediction failed: {}", e),
            })?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| RegressorError::Failed {
                reason: "No prediction returned".to_string(),
            })
    }

    fn schema(&self) -> SchemaId {
        self.schema
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        &self.version
    }
}

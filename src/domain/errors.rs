use crate::domain::ml::feature_schema::SchemaId;
use crate::domain::types::Target;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a single regressor call
#[derive(Debug, Error)]
pub enum RegressorError {
    #[error("Feature schema mismatch: model expects {expected}, got {actual}")]
    SchemaMismatch { expected: SchemaId, actual: SchemaId },

    #[error("Inference failed: {reason}")]
    Failed { reason: String },
}

/// Errors surfaced to callers of the prediction pipeline.
///
/// Both variants mean a required model could not produce a value; the request
/// fails as a whole and is not retried.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Model unavailable for target: {target}")]
    ModelUnavailable { target: Target },

    #[error("Model for {target} failed: {reason}")]
    Inference { target: Target, reason: String },
}

impl PredictionError {
    pub fn target(&self) -> Target {
        match self {
            PredictionError::ModelUnavailable { target } => *target,
            PredictionError::Inference { target, .. } => *target,
        }
    }
}

/// Errors related to building the model registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Schema mismatch for {target}: deployment uses {expected}, regressor trained on {actual}")]
    SchemaMismatch {
        target: Target,
        expected: SchemaId,
        actual: SchemaId,
    },

    #[error("Regressor already registered for {target}")]
    DuplicateTarget { target: Target },

    #[error("Missing regressors for: {}", join_targets(.targets))]
    MissingTargets { targets: Vec<Target> },
}

/// Errors related to loading model artifacts from disk
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Model artifact not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read model artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model artifact {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize model artifact {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Artifact {} holds a {found} model, expected {expected}", .path.display())]
    WrongTarget {
        path: PathBuf,
        expected: Target,
        found: Target,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to assembling a parlay
#[derive(Debug, Error)]
pub enum ParlayError {
    #[error("Candidate source unavailable: {reason}")]
    CandidateSource { reason: String },
}

fn join_targets(targets: &[Target]) -> String {
    targets
        .iter()
        .map(Target::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

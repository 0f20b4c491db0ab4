use crate::domain::errors::RegressorError;
use crate::domain::ml::feature_schema::SchemaId;
use crate::domain::parlay::Pick;
use crate::domain::types::FeatureVector;
use anyhow::Result;

/// A trained single-output regression model.
///
/// Implementations must be safe to call from many request handlers at once;
/// inference is read-only.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, RegressorError>;

    /// Feature layout the model was trained on.
    fn schema(&self) -> SchemaId;

    fn name(&self) -> &str;

    fn version(&self) -> &str;
}

/// Supplies the picks a parlay is assembled from.
pub trait CandidateSource: Send + Sync {
    fn current_picks(&self) -> Result<Vec<Pick>>;
}

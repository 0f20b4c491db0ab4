pub mod registry;
pub mod smartcore_regressor;

pub use registry::{ModelRegistry, ModelRegistryBuilder};
pub use smartcore_regressor::{ModelArtifact, SmartCoreRegressor};

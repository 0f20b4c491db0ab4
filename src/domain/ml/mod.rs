pub mod feature_schema;
pub mod normalizer;

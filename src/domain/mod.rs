// Player, target and stat-record types
pub mod types;

// Feature schemas and normalization
pub mod ml;

// Prediction response shapes
pub mod prediction;

// Parlay picks and selections
pub mod parlay;

// Confidence estimation
pub mod confidence;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;

// Model registry and regressor implementations
pub mod ml;

// Prediction request pipeline
pub mod prediction;

// Parlay selection
pub mod parlay;

// Service wiring
pub mod system;

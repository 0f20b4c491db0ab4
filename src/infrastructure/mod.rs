pub mod candidates;
pub mod mock;
pub mod model_loader;
pub mod observability;

pub use candidates::{JsonFilePool, SamplePool};
pub use model_loader::load_registry;

pub mod selector;
pub mod service;

pub use selector::{DEFAULT_LIMIT, DEFAULT_THRESHOLD, select};
pub use service::ParlayService;

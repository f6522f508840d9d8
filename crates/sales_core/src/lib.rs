pub mod config;
pub mod error;
pub mod logging;

pub use config::GeneratorConfig;
pub use error::{ErrorCategory, Result, SampleError};

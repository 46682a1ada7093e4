pub mod errors;
pub mod types;

pub use errors::{ConfigError, StardustError};
pub use types::Color;

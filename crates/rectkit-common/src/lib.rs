pub mod errors;
pub mod types;

pub use errors::{ConfigError, RectkitError};
pub use types::{Color, Rect};

pub type Result<T> = std::result::Result<T, RectkitError>;

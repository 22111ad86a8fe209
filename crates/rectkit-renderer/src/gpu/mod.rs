mod context;
mod types;

pub use context::*;
pub use types::*;

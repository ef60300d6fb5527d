//! Error handling for the kemlab ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Standard library error conversions
#[cfg(feature = "std")]
impl std::error::Error for Error {}

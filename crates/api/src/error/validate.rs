//! Validation utilities shared by all kemlab crates

use super::{Error, Result};

/// Validate that a buffer has exactly the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an arbitrary parameter condition
pub fn parameter(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context });
    }
    Ok(())
}

/// Validate key material
pub fn key(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { context });
    }
    Ok(())
}

/// Validate ciphertext material
pub fn ciphertext(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCiphertext { context });
    }
    Ok(())
}

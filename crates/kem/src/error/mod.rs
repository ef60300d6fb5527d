//! Error handling for KEM operations

use core::fmt;
use kemlab_api::error::types::Error as ApiError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// API-level error from a consumed primitive
    Api(ApiError),

    /// KEM-specific errors
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    Encapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    Decapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Encapsulation { algorithm, details } => {
                write!(f, "Encapsulation error for {}: {}", algorithm, details)
            }
            Error::Decapsulation { algorithm, details } => {
                write!(f, "Decapsulation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

// From ApiError to Error
impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

// From Error to ApiError, for surfacing through the `api::Kem` trait
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(e) => e,
            Error::KeyGeneration { algorithm, .. } => ApiError::Other { context: algorithm },
            Error::Encapsulation { algorithm, .. } => ApiError::Other { context: algorithm },
            Error::Decapsulation { algorithm, .. } => {
                ApiError::DecryptionFailed { context: algorithm }
            }
            Error::InvalidKey { key_type, .. } => ApiError::InvalidKey { context: key_type },
            Error::InvalidCiphertext { algorithm, .. } => {
                ApiError::InvalidCiphertext { context: algorithm }
            }
        }
    }
}

// Include validation submodule
pub mod validate;

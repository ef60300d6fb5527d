//! Error type definitions for cryptographic operations
//!
//! Every variant carries only `&'static str` context so the type stays
//! `no_std`-clean and never allocates on the error path.

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey { context: &'static str },

    /// Invalid ciphertext error
    InvalidCiphertext { context: &'static str },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter { context: &'static str },

    /// Decryption error
    DecryptionFailed { context: &'static str },

    /// Serialization error
    SerializationError { context: &'static str },

    /// Other error
    Other { context: &'static str },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidCiphertext { context } => {
                write!(f, "Invalid ciphertext: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            Self::DecryptionFailed { context } => {
                write!(f, "Decryption failed: {}", context)
            }
            Self::SerializationError { context } => {
                write!(f, "Serialization error: {}", context)
            }
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}

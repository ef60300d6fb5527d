//! Public API traits and types for the kemlab library
//!
//! This crate provides the public API surface for the kemlab workspace:
//! the KEM trait, the contract for the consumed CPA-secure encryption
//! primitive, serialization traits, error types, and secure byte types.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

// Re-export all traits from the traits module
pub use traits::{CpaPke, Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{cpa, kem, serialize};

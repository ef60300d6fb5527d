//! # kemlab
//!
//! A modular implementation of the Fujisaki-Okamoto key-encapsulation
//! transform with implicit rejection, plus instrumented variants for
//! fault-injection research against the decapsulation oracle.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kemlab = "0.2"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`kemlab-api`]: trait surface (KEM, CPA-PKE), error types, secure byte types
//! - [`kemlab-internal`]: constant-time primitives
//! - [`kemlab-params`]: parameter-profile constants
//! - [`kemlab-kem`]: the CCA2-secure transform and its research variants

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use kemlab_api as api;
pub use kemlab_internal as internal;
pub use kemlab_kem as kem;
pub use kemlab_params as params;

/// Common imports for kemlab users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{CpaPke, Kem, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::api::SecretBytes;

    // Re-export the KEM construction and its byte-level types
    pub use crate::kem::{
        EncapsulationTrace, FoCiphertext, FoKem, FoPublicKey, FoSecretKey, FoSharedSecret,
    };
}

//! CCA2-secure key encapsulation via the Fujisaki-Okamoto transform
//!
//! This crate turns any CPA-secure public-key encryption scheme (consumed
//! through [`kemlab_api::CpaPke`]) into an IND-CCA2 KEM with implicit
//! rejection. Alongside the three production operations it exposes the
//! instrumented variants used to study fault-injection and glitch attacks
//! against the decapsulation oracle.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

pub mod error;
pub mod fo;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-exports
pub use fo::{
    EncapsulationTrace, FoCiphertext, FoKem, FoPublicKey, FoSecretKey, FoSharedSecret, SS_BYTES,
    SYM_BYTES,
};

//! Parameter-profile constants for the kemlab library
//!
//! Every byte length the KEM transform handles is named here once and
//! referenced as a semantic quantity everywhere else. The crate carries
//! exactly one deployed profile; there is no multi-level variant logic.

#![no_std]

pub mod pqc;

// Re-export the deployed profile at the crate level for convenience
pub use pqc::kyber::{KYBER1024, KYBER_SS_BYTES, KYBER_SYM_BYTES};

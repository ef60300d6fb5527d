//! Trait definitions for the kemlab public surface

pub mod cpa;
pub mod kem;
pub mod serialize;

pub use cpa::CpaPke;
pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};

//! Capture types for the instrumented operation variants.

use super::SYM_BYTES;
use kemlab_api::CpaPke;

/// Intermediate values captured by an instrumented encapsulation.
///
/// The sink is filled by the same code path the production operation
/// runs; capturing changes no byte of the ciphertext or shared secret.
pub struct EncapsulationTrace<S: CpaPke> {
    /// The ephemeral message actually encrypted. This is the value
    /// *after* the in-place re-hash of the raw randomness, i.e. exactly
    /// what the CPA layer saw.
    pub nu: [u8; SYM_BYTES],
    /// Ephemeral secrets the CPA layer sampled from the derived coins.
    pub noise: S::EncryptNoise,
}

impl<S: CpaPke> Default for EncapsulationTrace<S> {
    fn default() -> Self {
        Self {
            nu: [0u8; SYM_BYTES],
            noise: Default::default(),
        }
    }
}

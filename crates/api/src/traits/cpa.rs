//! Trait definition for the consumed CPA-secure encryption primitive.
//!
//! The CCA2 transform in `kemlab-kem` wraps a public-key encryption
//! scheme that is only secure against chosen-plaintext attack. The
//! scheme itself (ring arithmetic, noise sampling, compression) is out
//! of scope for this workspace and is consumed through this trait.
//!
//! Instrumentation is part of the contract: key generation and
//! encryption accept an *optional* noise sink. A production caller
//! passes `None`; a research caller passes `Some` and receives the
//! internally sampled noise. Implementations must produce byte-identical
//! keys and ciphertexts in both cases: the sink observes, it never
//! participates.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

/// Contract for the underlying CPA-secure public-key encryption scheme.
///
/// All buffers are raw byte strings of the fixed lengths declared by the
/// associated constants; the message and coin buffers are `SYM_BYTES`
/// seeds as fixed by the deployed profile in `kemlab-params`.
pub trait CpaPke {
    /// Noise sampled during key generation (the error vector), captured
    /// for offline analysis when a sink is supplied.
    type KeygenNoise: Default;

    /// Ephemeral secrets sampled during encryption (the secret vector
    /// and both error terms), captured when a sink is supplied.
    type EncryptNoise: Default;

    /// Scheme name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the CPA secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Generates a key pair, writing sampled noise into `noise` if given.
    ///
    /// Randomness comes exclusively from `rng`; an exhausted randomness
    /// source is a fatal precondition violation, not a recoverable error.
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        noise: Option<&mut Self::KeygenNoise>,
    ) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Encrypts `message` under `public_key` using explicit `coins`.
    ///
    /// Must be a *deterministic* function of `(message, public_key,
    /// coins)`; the transform's re-encryption check depends on it.
    fn encrypt(
        message: &[u8],
        public_key: &[u8],
        coins: &[u8],
        noise: Option<&mut Self::EncryptNoise>,
    ) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext` with the CPA secret key.
    ///
    /// Never signals failure for well-formed inputs: an undecryptable
    /// ciphertext still yields *some* message, and the transform's
    /// re-encryption check is what decides its fate.
    fn decrypt(ciphertext: &[u8], secret_key: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}

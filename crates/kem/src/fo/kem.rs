//! Public KEM types and the `api::Kem` implementation.

use core::marker::PhantomData;

use kemlab_api::{
    CpaPke, Kem as KemTrait, Result as ApiResult, SecretBytes, Serialize, SerializeSecret,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use super::trace::EncapsulationTrace;
use super::{ind_cca, SS_BYTES, SYM_BYTES};
use crate::error::Result;

/// Public key of the wrapped scheme.
#[derive(Clone, Zeroize)]
pub struct FoPublicKey(Vec<u8>);

/// Full KEM secret key: CPA secret key, public key copy, public-key
/// hash, rejection seed.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct FoSecretKey(Vec<u8>);

/// Ciphertext of the wrapped scheme.
#[derive(Clone)]
pub struct FoCiphertext(Vec<u8>);

/// Derived shared secret with constant-time equality and a redacted
/// `Debug` representation.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct FoSharedSecret(SecretBytes<SS_BYTES>);

impl FoPublicKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl FoSecretKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl FoCiphertext {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for FoPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for FoPublicKey {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for FoSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for FoSecretKey {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for FoCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for FoCiphertext {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for FoSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Serialize for FoPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Serialize for FoCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for FoSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl SerializeSecret for FoSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

/// CCA2-secure KEM over the CPA scheme `S`, implementing `api::Kem`.
pub struct FoKem<S: CpaPke> {
    _scheme: PhantomData<S>,
}

impl<S: CpaPke> FoKem<S> {
    /// Public key length in bytes.
    pub const PUBLIC_KEY_BYTES: usize = S::PUBLIC_KEY_BYTES;
    /// Secret key length in bytes.
    pub const SECRET_KEY_BYTES: usize =
        S::SECRET_KEY_BYTES + S::PUBLIC_KEY_BYTES + 2 * SYM_BYTES;
    /// Ciphertext length in bytes.
    pub const CIPHERTEXT_BYTES: usize = S::CIPHERTEXT_BYTES;
    /// Shared secret length in bytes.
    pub const SHARED_SECRET_BYTES: usize = SS_BYTES;

    /// Key generation that additionally exports the noise the CPA layer
    /// sampled. Produces byte-identical keys to [`KemTrait::keypair`]
    /// for the same RNG stream.
    pub fn keypair_with_noise<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> Result<(FoPublicKey, FoSecretKey, S::KeygenNoise)> {
        let mut noise: S::KeygenNoise = Default::default();
        let (pk, sk) = ind_cca::keygen::<S, R>(rng, Some(&mut noise))?;
        Ok((FoPublicKey(pk), FoSecretKey(sk), noise))
    }

    /// Encapsulation that additionally exports the ephemeral message and
    /// the CPA layer's sampled vectors. Produces byte-identical outputs
    /// to [`KemTrait::encapsulate`] for the same RNG stream.
    pub fn encapsulate_with_noise<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &FoPublicKey,
    ) -> Result<(FoCiphertext, FoSharedSecret, EncapsulationTrace<S>)> {
        let mut trace = EncapsulationTrace::default();
        let (ct, ss) = ind_cca::encaps::<S, R>(public_key.as_ref(), rng, Some(&mut trace))?;
        Ok((FoCiphertext(ct), FoSharedSecret(ss), trace))
    }

    /// Decapsulation whose re-encryption check and ciphertext-hash
    /// binding run against `ct_verify` while `ciphertext` feeds the CPA
    /// decryption. This models a fault that corrupts the ciphertext
    /// after decryption but before verification. Invoked with the same
    /// ciphertext in both roles it degenerates to
    /// [`KemTrait::decapsulate`] exactly.
    pub fn decapsulate_with_faulted_verify(
        secret_key: &FoSecretKey,
        ciphertext: &FoCiphertext,
        ct_verify: &FoCiphertext,
    ) -> Result<FoSharedSecret> {
        let ss = ind_cca::decaps_split::<S>(
            secret_key.as_ref(),
            ciphertext.as_ref(),
            ct_verify.as_ref(),
        )?;
        Ok(FoSharedSecret(ss))
    }
}

impl<S: CpaPke + 'static> KemTrait for FoKem<S> {
    type PublicKey = FoPublicKey;
    type SecretKey = FoSecretKey;
    type SharedSecret = FoSharedSecret;
    type Ciphertext = FoCiphertext;
    type KeyPair = (FoPublicKey, FoSecretKey);

    fn name() -> &'static str {
        S::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk, sk) = ind_cca::keygen::<S, R>(rng, None)?;
        Ok((FoPublicKey(pk), FoSecretKey(sk)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ct, ss) = ind_cca::encaps::<S, R>(public_key.as_ref(), rng, None)?;
        Ok((FoCiphertext(ct), FoSharedSecret(ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        // Production decapsulation verifies the ciphertext it decrypted.
        let ss = ind_cca::decaps_split::<S>(
            secret_key.as_ref(),
            ciphertext.as_ref(),
            ciphertext.as_ref(),
        )?;
        Ok(FoSharedSecret(ss))
    }
}

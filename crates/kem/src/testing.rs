//! Deterministic CPA test double.
//!
//! [`XofPke`] is not an encryption scheme anyone should deploy: it has
//! no lattice, no noise, and no security reduction. It exists so the
//! transform's properties are executable without a polynomial backend.
//! It honours the deployed profile's exact byte lengths, it is a
//! deterministic function of `(message, public key, coins)`, decryption
//! inverts encryption, and every ciphertext byte is bound to the header
//! so any flipped bit surfaces in the re-encryption check.

use kemlab_api::error::validate;
use kemlab_api::{CpaPke, Result};
use kemlab_params::KYBER1024;
use rand::{CryptoRng, RngCore};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use zeroize::Zeroizing;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::fo::SYM_BYTES;

const SEED_BYTES: usize = 32;
const TAG_BYTES: usize = 32;

fn xof(domain: &'static [u8], parts: &[&[u8]], out: &mut [u8]) {
    let mut state = Shake256::default();
    state.update(domain);
    for part in parts {
        state.update(part);
    }
    state.finalize_xof().read(out);
}

/// Byte container standing in for the sampled noise polynomials a real
/// CPA layer would export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampledNoise {
    pub bytes: Vec<u8>,
}

impl SampledNoise {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Deterministic XOF-based PKE double over the deployed profile's byte
/// lengths.
pub struct XofPke;

impl XofPke {
    fn expand_public_key(seed: &[u8], public_key: &mut [u8]) {
        xof(b"kemlab-xofpke:pk", &[seed], public_key);
    }
}

impl CpaPke for XofPke {
    type KeygenNoise = SampledNoise;
    type EncryptNoise = SampledNoise;

    const NAME: &'static str = "XofPke";
    const PUBLIC_KEY_BYTES: usize = KYBER1024.public_key_size;
    const SECRET_KEY_BYTES: usize = KYBER1024.cpa_secret_key_size;
    const CIPHERTEXT_BYTES: usize = KYBER1024.ciphertext_size;

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
        noise: Option<&mut SampledNoise>,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let mut seed = Zeroizing::new([0u8; SEED_BYTES]);
        rng.fill_bytes(&mut *seed);

        let mut public_key = vec![0u8; Self::PUBLIC_KEY_BYTES];
        Self::expand_public_key(&seed[..], &mut public_key);

        // The seed is the whole secret; the remainder pads the key out
        // to the profile's CPA secret-key length.
        let mut secret_key = vec![0u8; Self::SECRET_KEY_BYTES];
        secret_key[..SEED_BYTES].copy_from_slice(&seed[..]);

        if let Some(noise) = noise {
            let mut bytes = vec![0u8; 2 * SYM_BYTES];
            xof(b"kemlab-xofpke:keygen-noise", &[&seed[..]], &mut bytes);
            noise.bytes = bytes;
        }

        Ok((public_key, secret_key))
    }

    fn encrypt(
        message: &[u8],
        public_key: &[u8],
        coins: &[u8],
        noise: Option<&mut SampledNoise>,
    ) -> Result<Vec<u8>> {
        validate::length("XofPke::encrypt message", message.len(), SYM_BYTES)?;
        validate::length(
            "XofPke::encrypt public key",
            public_key.len(),
            Self::PUBLIC_KEY_BYTES,
        )?;
        validate::length("XofPke::encrypt coins", coins.len(), SYM_BYTES)?;

        let mut ciphertext = vec![0u8; Self::CIPHERTEXT_BYTES];
        let (tag, rest) = ciphertext.split_at_mut(TAG_BYTES);
        let (body, filler) = rest.split_at_mut(SYM_BYTES);

        xof(b"kemlab-xofpke:tag", &[coins], tag);

        let mut pad = Zeroizing::new([0u8; SYM_BYTES]);
        xof(b"kemlab-xofpke:pad", &[public_key, &*tag], &mut pad[..]);
        for ((b, m), p) in body.iter_mut().zip(message).zip(pad.iter()) {
            *b = m ^ p;
        }

        // Every trailing byte depends on the header, so a flip anywhere
        // in the ciphertext diverges from the honest re-encryption.
        xof(b"kemlab-xofpke:fill", &[public_key, &*tag, &*body], filler);

        if let Some(noise) = noise {
            let mut bytes = vec![0u8; 3 * SYM_BYTES];
            xof(b"kemlab-xofpke:encrypt-noise", &[coins], &mut bytes);
            noise.bytes = bytes;
        }

        Ok(ciphertext)
    }

    fn decrypt(ciphertext: &[u8], secret_key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        validate::length(
            "XofPke::decrypt ciphertext",
            ciphertext.len(),
            Self::CIPHERTEXT_BYTES,
        )?;
        validate::length(
            "XofPke::decrypt secret key",
            secret_key.len(),
            Self::SECRET_KEY_BYTES,
        )?;

        let seed = &secret_key[..SEED_BYTES];
        let mut public_key = vec![0u8; Self::PUBLIC_KEY_BYTES];
        Self::expand_public_key(seed, &mut public_key);

        let tag = &ciphertext[..TAG_BYTES];
        let body = &ciphertext[TAG_BYTES..TAG_BYTES + SYM_BYTES];

        let mut pad = Zeroizing::new([0u8; SYM_BYTES]);
        xof(b"kemlab-xofpke:pad", &[&public_key[..], tag], &mut pad[..]);

        let mut message = Zeroizing::new(vec![0u8; SYM_BYTES]);
        for ((m, b), p) in message.iter_mut().zip(body).zip(pad.iter()) {
            *m = b ^ p;
        }
        Ok(message)
    }
}

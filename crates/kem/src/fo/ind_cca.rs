//! The IND-CCA2 transform with implicit rejection.
//!
//! Every function here is a pure transformation over caller-owned
//! buffers. The two ephemeral working buffers follow the construction's
//! half-buffer discipline: `buf` holds the ephemeral message next to the
//! public-key hash, `kr` holds the pre-key next to the encryption coins
//! (later the ciphertext hash). Secret-dependent control flow is
//! forbidden; the accept-or-reject decision runs through
//! [`ct_eq_choice`] and [`ct_assign`] and never becomes a branch.

use kemlab_api::{CpaPke, SecretBytes};
use kemlab_internal::{ct_assign, ct_eq_choice};
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::{Zeroize, Zeroizing};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use super::symmetric::{hash_g, hash_h, kdf};
use super::trace::EncapsulationTrace;
use super::{SS_BYTES, SYM_BYTES};
use crate::error::{validate, Result};

/// Full KEM secret key length for scheme `S`:
/// CPA secret key, public key copy, public-key hash, rejection seed.
pub(crate) const fn secret_key_bytes<S: CpaPke>() -> usize {
    S::SECRET_KEY_BYTES + S::PUBLIC_KEY_BYTES + 2 * SYM_BYTES
}

/// Borrowed view of the four secret-key segments.
pub(crate) struct SecretKeyView<'a> {
    pub cpa: &'a [u8],
    pub public_key: &'a [u8],
    pub pk_hash: &'a [u8],
    pub z: &'a [u8],
}

pub(crate) fn split_secret_key<S: CpaPke>(secret_key: &[u8]) -> Result<SecretKeyView<'_>> {
    validate::key(
        secret_key.len() == secret_key_bytes::<S>(),
        S::NAME,
        "secret key length does not match the scheme",
    )?;
    let (cpa, rest) = secret_key.split_at(S::SECRET_KEY_BYTES);
    let (public_key, rest) = rest.split_at(S::PUBLIC_KEY_BYTES);
    let (pk_hash, z) = rest.split_at(SYM_BYTES);
    Ok(SecretKeyView {
        cpa,
        public_key,
        pk_hash,
        z,
    })
}

/// IND-CCA2 key generation.
///
/// A supplied `noise` sink is passed straight through to the CPA layer
/// and must not change a single byte of either key.
pub(crate) fn keygen<S: CpaPke, R: RngCore + CryptoRng>(
    rng: &mut R,
    noise: Option<&mut S::KeygenNoise>,
) -> Result<(Vec<u8>, Vec<u8>)> {
    // 1. CPA key pair
    let (public_key, mut cpa_secret_key) = S::keypair(rng, noise)?;
    validate::key_generation(
        public_key.len() == S::PUBLIC_KEY_BYTES,
        S::NAME,
        "CPA public key has wrong length",
    )?;
    validate::key_generation(
        cpa_secret_key.len() == S::SECRET_KEY_BYTES,
        S::NAME,
        "CPA secret key has wrong length",
    )?;

    // 2. sk = sk_cpa || pk || H(pk) || z
    let mut secret_key = Vec::with_capacity(secret_key_bytes::<S>());
    secret_key.extend_from_slice(&cpa_secret_key);
    secret_key.extend_from_slice(&public_key);
    cpa_secret_key.zeroize();

    // Bind the secret key to its exact public key.
    let mut pk_hash = [0u8; SYM_BYTES];
    hash_h(&mut pk_hash, &public_key);
    secret_key.extend_from_slice(&pk_hash);

    // Rejection seed z, only ever used to derive the fallback secret.
    let mut z = Zeroizing::new([0u8; SYM_BYTES]);
    rng.fill_bytes(&mut *z);
    secret_key.extend_from_slice(&z[..]);

    Ok((public_key, secret_key))
}

/// IND-CCA2 encapsulation.
pub(crate) fn encaps<S: CpaPke, R: RngCore + CryptoRng>(
    public_key: &[u8],
    rng: &mut R,
    mut trace: Option<&mut EncapsulationTrace<S>>,
) -> Result<(Vec<u8>, SecretBytes<SS_BYTES>)> {
    validate::key(
        public_key.len() == S::PUBLIC_KEY_BYTES,
        S::NAME,
        "public key has wrong length",
    )?;

    let mut buf = Zeroizing::new([0u8; 2 * SYM_BYTES]);
    // Will contain the pre-key and the coins
    let mut kr = Zeroizing::new([0u8; 2 * SYM_BYTES]);

    // 1. Fresh ephemeral message; raw RNG output is re-hashed so it is
    //    never used directly as message material.
    rng.fill_bytes(&mut buf[..SYM_BYTES]);
    let mut rehash = [0u8; SYM_BYTES];
    hash_h(&mut rehash, &buf[..SYM_BYTES]);
    buf[..SYM_BYTES].copy_from_slice(&rehash);
    rehash.zeroize();

    // 2. Multitarget countermeasure: tie the derived coins to this
    //    specific public key.
    let mut pk_hash = [0u8; SYM_BYTES];
    hash_h(&mut pk_hash, public_key);
    buf[SYM_BYTES..].copy_from_slice(&pk_hash);

    // 3. (pre-key, coins) = G(message || H(pk))
    hash_g(&mut kr, &buf[..]);

    // 4. Encrypt under the derived coins. The trace, when present,
    //    records the post-rehash message and the CPA layer's noise.
    if let Some(t) = trace.as_mut() {
        t.nu.copy_from_slice(&buf[..SYM_BYTES]);
    }
    let ciphertext = S::encrypt(
        &buf[..SYM_BYTES],
        public_key,
        &kr[SYM_BYTES..],
        trace.map(|t| &mut t.noise),
    )?;
    validate::encapsulation(
        ciphertext.len() == S::CIPHERTEXT_BYTES,
        S::NAME,
        "CPA ciphertext has wrong length",
    )?;

    // 5. Overwrite the coins with H(ct): the key binds the bytes that
    //    actually go on the wire.
    let mut ct_hash = [0u8; SYM_BYTES];
    hash_h(&mut ct_hash, &ciphertext);
    kr[SYM_BYTES..].copy_from_slice(&ct_hash);

    // 6. ss = KDF(pre-key || H(ct))
    let mut ss = [0u8; SS_BYTES];
    kdf(&mut ss, &kr[..]);
    let shared_secret = SecretBytes::new(ss);
    ss.zeroize();

    Ok((ciphertext, shared_secret))
}

/// IND-CCA2 decapsulation, split into its decrypt and verify inputs.
///
/// `ct_decrypt` feeds the CPA decryption; `ct_verify` feeds the
/// re-encryption comparison and the ciphertext-hash binding. Production
/// decapsulation passes the same ciphertext for both; the fault-research
/// variant passes different ones to model a ciphertext corrupted after
/// decryption but before verification. Control flow and timing are
/// identical in every case: a mismatch is absorbed by substituting the
/// rejection seed, never by branching or returning early.
pub(crate) fn decaps_split<S: CpaPke>(
    secret_key: &[u8],
    ct_decrypt: &[u8],
    ct_verify: &[u8],
) -> Result<SecretBytes<SS_BYTES>> {
    let sk = split_secret_key::<S>(secret_key)?;
    validate::ciphertext(
        ct_decrypt.len() == S::CIPHERTEXT_BYTES,
        S::NAME,
        "ciphertext has wrong length",
    )?;
    validate::ciphertext(
        ct_verify.len() == S::CIPHERTEXT_BYTES,
        S::NAME,
        "verification ciphertext has wrong length",
    )?;

    let mut buf = Zeroizing::new([0u8; 2 * SYM_BYTES]);
    // Will contain the pre-key and the coins
    let mut kr = Zeroizing::new([0u8; 2 * SYM_BYTES]);

    // 1. Candidate message from the CPA layer.
    let message = S::decrypt(ct_decrypt, sk.cpa)?;
    validate::decapsulation(
        message.len() == SYM_BYTES,
        S::NAME,
        "CPA message has wrong length",
    )?;
    buf[..SYM_BYTES].copy_from_slice(&message);

    // 2. The stored H(pk) reconstructs the binding the encapsulator
    //    computed from the live public key.
    buf[SYM_BYTES..].copy_from_slice(sk.pk_hash);

    // 3. (pre-key, coins) = G(message' || H(pk))
    hash_g(&mut kr, &buf[..]);

    // 4. Deterministic re-encryption of the candidate message.
    let cmp = S::encrypt(&buf[..SYM_BYTES], sk.public_key, &kr[SYM_BYTES..], None)?;
    validate::decapsulation(
        cmp.len() == S::CIPHERTEXT_BYTES,
        S::NAME,
        "re-encrypted ciphertext has wrong length",
    )?;

    // 5. Constant-time comparison; the verdict stays a Choice and never
    //    becomes a branchable bool.
    let reject: Choice = !ct_eq_choice(ct_verify, &cmp);

    // 6. Overwrite the coins with H(ct) over the received bytes, not the
    //    recomputed ones.
    let mut ct_hash = [0u8; SYM_BYTES];
    hash_h(&mut ct_hash, ct_verify);
    kr[SYM_BYTES..].copy_from_slice(&ct_hash);

    // 7. Implicit rejection: on mismatch the pre-key becomes the
    //    rejection seed, branch-free.
    ct_assign(&mut kr[..SYM_BYTES], sk.z, reject);

    // 8. ss = KDF(pre-key || H(ct))
    let mut ss = [0u8; SS_BYTES];
    kdf(&mut ss, &kr[..]);
    let shared_secret = SecretBytes::new(ss);
    ss.zeroize();

    Ok(shared_secret)
}

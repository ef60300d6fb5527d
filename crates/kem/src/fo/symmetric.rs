//! Symmetric-function wrappers for the transform.
//!
//! The transform consumes three fixed-output functions: `H` for the
//! public-key and ciphertext bindings, `G` for deriving the pre-key and
//! encryption coins, and a KDF for the final shared secret. This module
//! binds those contracts to the SHA-3 family; the sponge itself is not
//! audited or re-implemented here.

use super::{SS_BYTES, SYM_BYTES};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake256};

/// `H`: 32-byte binding hash (SHA3-256).
pub(crate) fn hash_h(out: &mut [u8; SYM_BYTES], input: &[u8]) {
    out.copy_from_slice(&Sha3_256::digest(input));
}

/// `G`: double-width hash (SHA3-512), split by callers into
/// pre-key and coins halves.
pub(crate) fn hash_g(out: &mut [u8; 2 * SYM_BYTES], input: &[u8]) {
    out.copy_from_slice(&Sha3_512::digest(input));
}

/// KDF producing the final shared secret (SHAKE-256).
pub(crate) fn kdf(out: &mut [u8; SS_BYTES], input: &[u8]) {
    let mut xof = Shake256::default();
    xof.update(input);
    xof.finalize_xof().read(out);
}

//! The Fujisaki-Okamoto KEM construction with implicit rejection.
//!
//! Wraps a CPA-secure encryption scheme into an IND-CCA2 KEM. The
//! construction, not the lattice arithmetic, lives here: hashing the
//! public key into the derived coins, re-encrypting on decapsulation,
//! and substituting the rejection seed in constant time on mismatch.

mod ind_cca; // The transform itself
mod kem; // FoKem and its byte-level types
mod symmetric; // Hash and KDF wrappers
mod trace; // Instrumentation capture

pub use self::kem::{FoCiphertext, FoKem, FoPublicKey, FoSecretKey, FoSharedSecret};
pub use self::trace::EncapsulationTrace;

use kemlab_params::{KYBER_SS_BYTES, KYBER_SYM_BYTES};

/// Width of the ephemeral message, derived coins and binding hashes.
pub const SYM_BYTES: usize = KYBER_SYM_BYTES;

/// Width of the derived shared secret.
pub const SS_BYTES: usize = KYBER_SS_BYTES;

//! Constants for the deployed Kyber key encapsulation profile
//!
//! The transform in `kemlab-kem` is generic over the CPA primitive, so the
//! only quantities fixed here are byte lengths. They correspond to the
//! rank-4, degree-256 lattice profile.

/// Seed/hash width shared by the message, coins and binding hashes
pub const KYBER_SYM_BYTES: usize = 32;

/// Width of the derived shared secret
pub const KYBER_SS_BYTES: usize = 32;

/// Structure containing the byte lengths of one Kyber profile
pub struct Kyber1024Params {
    /// Number of polynomials (dimension)
    pub k: usize,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of the CPA-layer secret key in bytes
    pub cpa_secret_key_size: usize,

    /// Size of the full KEM secret key in bytes
    /// (CPA secret key, public key copy, public-key hash, rejection seed)
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

/// Kyber-1024 parameters
pub const KYBER1024: Kyber1024Params = Kyber1024Params {
    k: 4,
    public_key_size: 1568,
    cpa_secret_key_size: 1536,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: KYBER_SS_BYTES,
};

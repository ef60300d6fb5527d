//! Shared helpers for the kemlab integration tests.

use kemlab::prelude::*;
use kemlab_kem::testing::XofPke;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// The KEM under test: the transform over the deterministic CPA double.
pub type TestKem = FoKem<XofPke>;

/// Deterministic RNG so failures reproduce from the seed alone.
pub fn rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// A complete honest exchange: key pair, ciphertext and both parties'
/// view of the shared secret.
pub struct Exchange {
    pub public_key: FoPublicKey,
    pub secret_key: FoSecretKey,
    pub ciphertext: FoCiphertext,
    pub shared_secret: FoSharedSecret,
}

pub fn honest_exchange(seed: u64) -> Exchange {
    let mut rng = rng(seed);
    let (public_key, secret_key) = TestKem::keypair(&mut rng).expect("keypair");
    let (ciphertext, shared_secret) =
        TestKem::encapsulate(&mut rng, &public_key).expect("encapsulate");
    Exchange {
        public_key,
        secret_key,
        ciphertext,
        shared_secret,
    }
}

/// Flip a single bit of a ciphertext.
pub fn flip_bit(ciphertext: &FoCiphertext, bit: usize) -> FoCiphertext {
    let mut bytes = ciphertext.to_bytes();
    bytes[bit / 8] ^= 1 << (bit % 8);
    FoCiphertext::new(bytes)
}

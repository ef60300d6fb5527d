//! Integration tests for the KEM transform over the CPA test double

use kemlab::prelude::*;
use kemlab_params::KYBER1024;
use kemlab_tests::{flip_bit, honest_exchange, rng, TestKem};
use proptest::prelude::*;

#[test]
fn round_trip_produces_matching_secrets() {
    let ex = honest_exchange(1);
    let recipient_view = TestKem::decapsulate(&ex.secret_key, &ex.ciphertext).unwrap();
    assert_eq!(ex.shared_secret, recipient_view);
}

#[test]
fn profile_lengths_are_honoured() {
    let ex = honest_exchange(2);
    assert_eq!(ex.public_key.to_bytes().len(), KYBER1024.public_key_size);
    assert_eq!(
        ex.secret_key.to_bytes_zeroizing().len(),
        KYBER1024.secret_key_size
    );
    assert_eq!(ex.ciphertext.to_bytes().len(), KYBER1024.ciphertext_size);
    assert_eq!(
        ex.shared_secret.as_ref().len(),
        KYBER1024.shared_secret_size
    );
}

#[test]
fn distinct_exchanges_produce_distinct_secrets() {
    let a = honest_exchange(3);
    let b = honest_exchange(4);
    assert_ne!(a.shared_secret, b.shared_secret);
}

#[test]
fn rejection_is_deterministic_per_ciphertext() {
    let ex = honest_exchange(5);
    let garbage = flip_bit(&ex.ciphertext, 12345);

    let first = TestKem::decapsulate(&ex.secret_key, &garbage).unwrap();
    let second = TestKem::decapsulate(&ex.secret_key, &garbage).unwrap();
    assert_eq!(first, second);
    assert_ne!(first, ex.shared_secret);
}

#[test]
fn rejection_depends_on_the_ciphertext() {
    // Two different invalid ciphertexts must yield two different
    // fallback secrets: the fallback is a PRF of (z, ct), not a fixed
    // error value.
    let ex = honest_exchange(6);
    let garbage_a = flip_bit(&ex.ciphertext, 8);
    let garbage_b = flip_bit(&ex.ciphertext, 9);

    let ss_a = TestKem::decapsulate(&ex.secret_key, &garbage_a).unwrap();
    let ss_b = TestKem::decapsulate(&ex.secret_key, &garbage_b).unwrap();
    assert_ne!(ss_a, ss_b);
}

#[test]
fn stored_public_key_hash_binds_the_pair() {
    let ex = honest_exchange(7);

    // Tamper with the H(pk) segment of the secret key.
    let mut sk_bytes = ex.secret_key.to_bytes_zeroizing().to_vec();
    let hash_offset = KYBER1024.cpa_secret_key_size + KYBER1024.public_key_size;
    sk_bytes[hash_offset] ^= 0x01;
    let tampered = FoSecretKey::from_bytes(&sk_bytes).unwrap();

    // The flow never crashes, but correctness is gone: the derived coins
    // no longer match, so the re-encryption check rejects.
    let ss = TestKem::decapsulate(&tampered, &ex.ciphertext).unwrap();
    assert_ne!(ss, ex.shared_secret);
}

#[test]
fn wrong_length_buffers_are_fatal_preconditions() {
    let mut rng = rng(8);
    let ex = honest_exchange(8);

    let short_pk = FoPublicKey::from_bytes(&[0u8; 17]).unwrap();
    assert!(TestKem::encapsulate(&mut rng, &short_pk).is_err());

    let short_sk = FoSecretKey::from_bytes(&[0u8; 17]).unwrap();
    assert!(TestKem::decapsulate(&short_sk, &ex.ciphertext).is_err());

    let short_ct = FoCiphertext::from_bytes(&[0u8; 17]).unwrap();
    assert!(TestKem::decapsulate(&ex.secret_key, &short_ct).is_err());
}

proptest! {
    // Flipping any single bit of an honest ciphertext must yield a
    // well-formed shared secret unrelated to the original, without any
    // distinguishable error.
    #[test]
    fn any_single_bit_flip_rejects_cleanly(bit in 0usize..(KYBER1024.ciphertext_size * 8)) {
        let ex = honest_exchange(9);
        let mutated = flip_bit(&ex.ciphertext, bit);

        let ss = TestKem::decapsulate(&ex.secret_key, &mutated).unwrap();
        prop_assert_eq!(ss.as_ref().len(), KYBER1024.shared_secret_size);
        prop_assert_ne!(&ss, &ex.shared_secret);
    }

    // Fresh randomness must never collide: every encapsulation against
    // the same key yields a fresh ciphertext and secret.
    #[test]
    fn encapsulations_are_unique(seed in 0u64..64) {
        let ex = honest_exchange(10);
        let mut rng = rng(seed.wrapping_add(1000));
        let (ct, ss) = TestKem::encapsulate(&mut rng, &ex.public_key).unwrap();
        prop_assert_ne!(ct.to_bytes(), ex.ciphertext.to_bytes());
        prop_assert_ne!(&ss, &ex.shared_secret);
    }
}

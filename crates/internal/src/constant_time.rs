//! Constant-time operations to prevent timing attacks
//!
//! The comparison result is deliberately surfaced as a [`subtle::Choice`]
//! rather than a `bool`: a `Choice` cannot be branched on with ordinary
//! control flow, which is exactly the property the implicit-rejection
//! step of the KEM depends on.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. The comparison
/// itself runs in time independent of where (or whether) the slices
/// differ; only the lengths, which are public, short-circuit.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a `Choice` (0 or 1)
///
/// This is the form the KEM core uses: the result feeds [`ct_assign`]
/// without ever materializing as a branchable boolean.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time conditional assignment
///
/// Sets `dst` to `src` if `choice` is set, otherwise leaves `dst`
/// unchanged. Every byte of both slices is read and every byte of `dst`
/// is written back regardless of `choice`, so the memory-access pattern
/// does not depend on the condition.
///
/// # Panics
///
/// Panics if the slices have different lengths. Lengths are public
/// quantities; a mismatch is a caller bug, not a data-dependent event.
pub fn ct_assign(dst: &mut [u8], src: &[u8], choice: Choice) {
    assert_eq!(dst.len(), src.len());

    for i in 0..dst.len() {
        dst[i] = u8::conditional_select(&dst[i], &src[i], choice);
    }
}

/// Constant-time mask generation for a boolean condition
///
/// Returns an all-1s mask if the condition is set, all-0s if not.
pub fn ct_mask(choice: Choice) -> u8 {
    0u8.wrapping_sub(choice.unwrap_u8())
}

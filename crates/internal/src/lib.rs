//! Internal utilities shared across the kemlab crates
//!
//! Nothing here is cryptographic by itself; these are the branch-free
//! building blocks the KEM transform is required to express its
//! secret-dependent steps with.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_assign, ct_eq, ct_eq_choice, ct_mask};

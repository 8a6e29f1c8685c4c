//! SipHash-c-d keyed hashing.
//!
//! SipHash is a *keyed* 64-bit pseudorandom function, fast on short inputs,
//! designed to defend hash tables against hash-flooding attacks on untrusted
//! keys. It is not a general-purpose MAC.
//!
//! This crate is `no_std` compatible and has no library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Quick Start
//!
//! ```
//! use siphash::{Key, Rounds, SipHash};
//!
//! let sip = SipHash::new(Key::new(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908));
//! assert_eq!(sip.hash(b""), 0x726f_db47_dd0e_0e31);
//!
//! // Absent content is an error; empty content is not.
//! assert!(sip.compute(None).is_err());
//! assert_eq!(sip.compute(Some(b"".as_slice())), Ok(0x726f_db47_dd0e_0e31));
//!
//! // Other round profiles.
//! let fast = SipHash::with_rounds(sip.key(), Rounds::SIP_1_3);
//! assert_ne!(fast.hash(b""), sip.hash(b""));
//! ```
//!
//! # Modules
//!
//! - [`encode`] - Message to little-endian word encoding.
//! - [`constants`] - Initialization constants.
//! - [`diag`] - Constant inspection.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Implies `alloc` |
//! | `alloc` | Yes | Enables [`encode::encode`] and [`diag::constants_hex`] |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod constants;
pub mod diag;
pub mod encode;
mod engine;
mod hasher;
mod key;
mod state;

pub use engine::{Rounds, SipHash};
pub use hasher::SipHasher;
pub use key::Key;
pub use traits::{FastHash, MissingInput};

/// SipHash-1-3 with the seed as key.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash13;

/// SipHash-2-4 with the seed as key.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash24;

impl FastHash for SipHash13 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    SipHash::with_rounds(Key::from(seed), Rounds::SIP_1_3).hash(data)
  }
}

impl FastHash for SipHash24 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    SipHash::with_rounds(Key::from(seed), Rounds::SIP_2_4).hash(data)
  }
}

//! Fuzz target for streaming SipHash.
//!
//! Splits the input at fuzzer-chosen points and checks the streaming result
//! against the one-shot hash.

#![no_main]

use core::hash::Hasher as _;

use libfuzzer_sys::fuzz_target;
use siphash::{Key, SipHash, SipHasher};

fuzz_target!(|input: &[u8]| {
  let Some((&split, data)) = input.split_first() else {
    return;
  };

  let key = Key::new(0x0706_0504_0302_0100, u64::from(split));
  let step = usize::from(split % 17) + 1;

  let mut h = SipHasher::new(key);
  for piece in data.chunks(step) {
    h.write(piece);
  }

  assert_eq!(h.finish(), SipHash::new(key).hash(data));
  assert_eq!(h.len(), data.len() as u64);
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use siphash::{FastHash as _, Key, SipHash, SipHash13, SipHash24};

fuzz_target!(|input: &[u8]| {
  let key_bytes_len = core::cmp::min(16, input.len());
  let (key_bytes, data) = input.split_at(key_bytes_len);

  let mut raw = [0u8; 16];
  raw[..key_bytes.len()].copy_from_slice(key_bytes);
  let key = Key::from_bytes(raw);

  let ours13 = SipHash13::hash_with_seed(key.to_array(), data);
  let ours24 = SipHash24::hash_with_seed(key.to_array(), data);

  use core::hash::Hasher as _;
  let mut h13 = siphasher::sip::SipHasher13::new_with_keys(key.k0(), key.k1());
  h13.write(data);
  let exp13 = h13.finish();

  let mut h24 = siphasher::sip::SipHasher24::new_with_keys(key.k0(), key.k1());
  h24.write(data);
  let exp24 = h24.finish();

  assert_eq!(ours13, exp13);
  assert_eq!(ours24, exp24);
  assert_eq!(SipHash::new(key).compute(Some(data)), Ok(exp24));
});

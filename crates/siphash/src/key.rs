use core::fmt;

/// 128-bit SipHash key, held as two 64-bit halves.
///
/// `Debug` does not print the key material. Equality is a plain comparison and
/// is not constant-time; do not use it to check secrets from untrusted input.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Key {
  k0: u64,
  k1: u64,
}

impl Key {
  /// Key from its two halves.
  #[inline]
  #[must_use]
  pub const fn new(k0: u64, k1: u64) -> Self {
    Self { k0, k1 }
  }

  /// Key from 16 bytes, each half read little-endian.
  ///
  /// This is the layout of the reference test vectors, where the key bytes are
  /// `00 01 .. 0f`.
  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: [u8; 16]) -> Self {
    let [a0, a1, a2, a3, a4, a5, a6, a7, b0, b1, b2, b3, b4, b5, b6, b7] = bytes;
    Self {
      k0: u64::from_le_bytes([a0, a1, a2, a3, a4, a5, a6, a7]),
      k1: u64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
    }
  }

  #[inline]
  #[must_use]
  pub const fn k0(&self) -> u64 {
    self.k0
  }

  #[inline]
  #[must_use]
  pub const fn k1(&self) -> u64 {
    self.k1
  }

  #[inline]
  #[must_use]
  pub const fn to_array(self) -> [u64; 2] {
    [self.k0, self.k1]
  }
}

impl From<[u64; 2]> for Key {
  #[inline]
  fn from([k0, k1]: [u64; 2]) -> Self {
    Self::new(k0, k1)
  }
}

impl From<(u64, u64)> for Key {
  #[inline]
  fn from((k0, k1): (u64, u64)) -> Self {
    Self::new(k0, k1)
  }
}

impl From<[u8; 16]> for Key {
  #[inline]
  fn from(bytes: [u8; 16]) -> Self {
    Self::from_bytes(bytes)
  }
}

impl fmt::Debug for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Key(..)")
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  #[test]
  fn from_bytes_reads_halves_little_endian() {
    let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
    let key = Key::from_bytes(bytes);
    assert_eq!(key.k0(), 0x0706_0504_0302_0100);
    assert_eq!(key.k1(), 0x0f0e_0d0c_0b0a_0908);
    assert_eq!(Key::from(bytes), key);
  }

  #[test]
  fn conversions_agree() {
    let key = Key::new(1, 2);
    assert_eq!(Key::from([1, 2]), key);
    assert_eq!(Key::from((1, 2)), key);
    assert_eq!(key.to_array(), [1, 2]);
  }

  #[test]
  fn key_is_not_hashable() {
    // Key material must not leak into a hash table's own hashing.
    trait NotHash {
      const IS_HASH: bool = false;
    }
    impl<T> NotHash for T {}
    struct Check<T>(core::marker::PhantomData<T>);
    impl<T: core::hash::Hash> Check<T> {
      const IS_HASH: bool = true;
    }
    assert!(!<Check<Key>>::IS_HASH);
    assert!(<Check<u64>>::IS_HASH);
  }

  #[test]
  fn debug_redacts_key_material() {
    let key = Key::new(0xdead_beef, 0xcafe_babe);
    let dbg = format!("{key:?}");
    assert_eq!(dbg, "Key(..)");
    assert!(!dbg.contains("dead"));
  }
}

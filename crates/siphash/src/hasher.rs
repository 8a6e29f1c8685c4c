//! Streaming SipHash.

use core::{fmt, hash::Hasher};

use crate::{Key, Rounds, encode, state::State};

/// Incremental SipHash-c-d over a byte stream.
///
/// Feeding a message in any number of [`write`](Hasher::write) calls gives the
/// same result as [`SipHash::hash`](crate::SipHash::hash) over the
/// concatenation. At most seven bytes are held back between writes.
///
/// [`finish`](Hasher::finish) works on a copy of the state, so it can be called
/// repeatedly and more input may follow.
///
/// # Examples
///
/// ```
/// use core::hash::Hasher as _;
///
/// use siphash::{Key, SipHash, SipHasher};
///
/// let key = Key::new(1, 2);
/// let mut h = SipHasher::new(key);
/// h.write(b"hello ");
/// h.write(b"world");
/// assert_eq!(h.finish(), SipHash::new(key).hash(b"hello world"));
/// ```
#[derive(Clone)]
pub struct SipHasher {
  key: Key,
  rounds: Rounds,
  state: State,
  tail: [u8; 8],
  ntail: usize,
  length: u64,
}

impl SipHasher {
  /// SipHash-2-4 hasher under `key`.
  #[inline]
  #[must_use]
  pub const fn new(key: Key) -> Self {
    Self::with_rounds(key, Rounds::SIP_2_4)
  }

  #[inline]
  #[must_use]
  pub const fn with_rounds(key: Key, rounds: Rounds) -> Self {
    Self {
      key,
      rounds,
      state: State::new(key),
      tail: [0u8; 8],
      ntail: 0,
      length: 0,
    }
  }

  /// Total bytes written so far.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> u64 {
    self.length
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.length == 0
  }

  /// Discard all input, keeping the key and rounds.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_rounds(self.key, self.rounds);
  }

  fn absorb(&mut self, mut data: &[u8]) {
    self.length = self.length.wrapping_add(data.len() as u64);

    if self.ntail != 0 {
      let take = core::cmp::min(8 - self.ntail, data.len());
      let (head, rest) = data.split_at(take);
      for (dst, &src) in self.tail.iter_mut().skip(self.ntail).zip(head) {
        *dst = src;
      }
      self.ntail += take;
      data = rest;

      if self.ntail < 8 {
        return;
      }
      self.state.compress(u64::from_le_bytes(self.tail), self.rounds.c);
      self.ntail = 0;
    }

    let (words, rest) = data.as_chunks::<8>();
    for word in words {
      self.state.compress(u64::from_le_bytes(*word), self.rounds.c);
    }

    for (dst, &src) in self.tail.iter_mut().zip(rest) {
      *dst = src;
    }
    self.ntail = rest.len();
  }

  fn digest(&self) -> u64 {
    let mut state = self.state;
    let tail = self.tail.get(..self.ntail).unwrap_or(&[]);
    state.compress(encode::tag_tail(tail, self.length), self.rounds.c);
    state.finalize(self.rounds.d)
  }
}

impl Hasher for SipHasher {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.absorb(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.digest()
  }

  // Integers are absorbed little-endian, and `usize` as 8 bytes, so a key hashes
  // the same on every target.
  #[inline]
  fn write_u16(&mut self, i: u16) {
    self.absorb(&i.to_le_bytes());
  }

  #[inline]
  fn write_u32(&mut self, i: u32) {
    self.absorb(&i.to_le_bytes());
  }

  #[inline]
  fn write_u64(&mut self, i: u64) {
    self.absorb(&i.to_le_bytes());
  }

  #[inline]
  fn write_u128(&mut self, i: u128) {
    self.absorb(&i.to_le_bytes());
  }

  #[inline]
  fn write_usize(&mut self, i: usize) {
    self.write_u64(i as u64);
  }
}

impl fmt::Debug for SipHasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SipHasher")
      .field("rounds", &self.rounds)
      .field("length", &self.length)
      .finish_non_exhaustive()
  }
}

//! Message encoding: bytes to little-endian 64-bit words.
//!
//! A message of `L` bytes becomes `L / 8 + 1` words (that is,
//! `ceil((L + 1) / 8)`). Every word but the last packs eight consecutive bytes,
//! least significant byte first. The last word holds the `L mod 8` trailing
//! bytes in its low bytes and `L mod 256` in its most significant byte.
//!
//! Words are always assembled as little-endian, independent of the host.
//!
//! ```
//! use siphash::encode;
//!
//! assert_eq!(encode::blocks(b"").collect::<Vec<_>>(), [0]);
//! assert_eq!(encode::blocks(b"\x01\x02").collect::<Vec<_>>(), [0x0200_0000_0000_0201]);
//! ```

use core::iter::FusedIterator;

/// Number of words a message of `len` bytes encodes to.
#[inline]
#[must_use]
pub const fn word_count(len: usize) -> usize {
  len / 8 + 1
}

/// The final, length-tagged word of `input`.
///
/// Holds the trailing `input.len() mod 8` bytes and `input.len() mod 256` in
/// the top byte. Only the low 8 bits of the length survive; longer messages
/// wrap, as in the reference design.
#[inline]
#[must_use]
pub fn final_block(input: &[u8]) -> u64 {
  let (_, tail) = input.as_chunks::<8>();
  tag_tail(tail, input.len() as u64)
}

/// Pack a partial word (`tail.len() < 8`) with the length tag of a
/// `total_len`-byte message.
#[inline]
pub(crate) fn tag_tail(tail: &[u8], total_len: u64) -> u64 {
  debug_assert!(tail.len() < 8);
  let tag = u64::from(total_len as u8) << 56;
  tail
    .iter()
    .take(7)
    .enumerate()
    .fold(tag, |word, (i, &b)| word | (u64::from(b) << (8 * i)))
}

/// Iterator over the encoded words of a message.
///
/// Created by [`blocks`].
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
  words: core::slice::Iter<'a, [u8; 8]>,
  last: Option<u64>,
}

/// Encode `input` lazily, without allocating.
#[inline]
#[must_use]
pub fn blocks(input: &[u8]) -> Blocks<'_> {
  let (words, tail) = input.as_chunks::<8>();
  Blocks {
    words: words.iter(),
    last: Some(tag_tail(tail, input.len() as u64)),
  }
}

/// Encode `input` into an owned word vector.
#[cfg(feature = "alloc")]
#[must_use]
pub fn encode(input: &[u8]) -> alloc::vec::Vec<u64> {
  blocks(input).collect()
}

impl Iterator for Blocks<'_> {
  type Item = u64;

  #[inline]
  fn next(&mut self) -> Option<u64> {
    match self.words.next() {
      Some(word) => Some(u64::from_le_bytes(*word)),
      None => self.last.take(),
    }
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.words.len() + usize::from(self.last.is_some());
    (n, Some(n))
  }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}

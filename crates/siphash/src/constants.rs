//! Initialization constants.
//!
//! The four words are the ASCII string `"somepseudorandomlygeneratedbytes"`
//! cut into 8-byte chunks, each read big-endian. Chunk `i` seeds `v_i`.

#![allow(clippy::indexing_slicing)] // Const-evaluated, fixed-size source

/// Source string the constants are derived from.
pub const SOURCE: &[u8; 32] = b"somepseudorandomlygeneratedbytes";

/// `v0` seed, `"somepseu"`.
pub const C0: u64 = be_word(SOURCE, 0);
/// `v1` seed, `"dorandom"`.
pub const C1: u64 = be_word(SOURCE, 1);
/// `v2` seed, `"lygenera"`.
pub const C2: u64 = be_word(SOURCE, 2);
/// `v3` seed, `"tedbytes"`.
pub const C3: u64 = be_word(SOURCE, 3);

/// All four constants in state order.
pub const INITIAL_STATE: [u64; 4] = [C0, C1, C2, C3];

/// XOR'd into `v2` before the finalization rounds.
pub(crate) const FINALIZATION_XOR: u64 = 0xff;

const fn be_word(src: &[u8; 32], chunk: usize) -> u64 {
  let base = chunk * 8;
  let mut word = 0u64;
  let mut i = 0;
  while i < 8 {
    word = (word << 8) | src[base + i] as u64;
    i += 1;
  }
  word
}

//! The keyed SipHash-c-d engine.

use core::{fmt, hash::BuildHasher};

use traits::MissingInput;

use crate::{Key, SipHasher, encode, state::State};

/// Round counts: `c` per message word, `d` at finalization.
///
/// Counts are not validated. Zero applies no rounds; large counts only cost
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rounds {
  /// Rounds per message word.
  pub c: u32,
  /// Rounds at finalization.
  pub d: u32,
}

impl Rounds {
  /// SipHash-1-3, the profile Rust's standard library hashes with.
  pub const SIP_1_3: Self = Self::new(1, 3);
  /// SipHash-2-4, the reference profile.
  pub const SIP_2_4: Self = Self::new(2, 4);

  #[inline]
  #[must_use]
  pub const fn new(c: u32, d: u32) -> Self {
    Self { c, d }
  }
}

impl Default for Rounds {
  #[inline]
  fn default() -> Self {
    Self::SIP_2_4
  }
}

/// A SipHash engine: a key and a round configuration.
///
/// The engine holds no mutable state. Every call builds its own internal state,
/// so one engine can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use siphash::{Key, SipHash};
///
/// let key = Key::new(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);
/// let msg: Vec<u8> = (0..15).collect();
///
/// let sip = SipHash::new(key);
/// assert_eq!(sip.hash(&msg), 0xa129_ca61_49be_45e5);
/// assert_eq!(sip.compute(Some(msg.as_slice())), Ok(0xa129_ca61_49be_45e5));
/// assert!(sip.compute(None).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SipHash {
  key: Key,
  rounds: Rounds,
}

impl SipHash {
  /// SipHash-2-4 under `key`.
  #[inline]
  #[must_use]
  pub const fn new(key: Key) -> Self {
    Self::with_rounds(key, Rounds::SIP_2_4)
  }

  #[inline]
  #[must_use]
  pub const fn with_rounds(key: Key, rounds: Rounds) -> Self {
    Self { key, rounds }
  }

  #[inline]
  #[must_use]
  pub const fn key(&self) -> Key {
    self.key
  }

  #[inline]
  #[must_use]
  pub const fn rounds(&self) -> Rounds {
    self.rounds
  }

  /// Hash `content`, failing if it was not supplied.
  ///
  /// # Errors
  ///
  /// Returns [`MissingInput`] when `content` is `None`. An empty slice is a
  /// valid message.
  #[inline]
  pub fn compute(&self, content: Option<&[u8]>) -> Result<u64, MissingInput> {
    let data = content.ok_or(MissingInput::new())?;
    Ok(self.hash(data))
  }

  /// Hash `data`.
  #[inline]
  #[must_use]
  pub fn hash(&self, data: &[u8]) -> u64 {
    let mut state = State::new(self.key);
    state.compress_all(encode::blocks(data), self.rounds.c);
    state.finalize(self.rounds.d)
  }

  /// A streaming hasher for this key and round configuration.
  #[inline]
  #[must_use]
  pub fn hasher(&self) -> SipHasher {
    SipHasher::with_rounds(self.key, self.rounds)
  }
}

impl BuildHasher for SipHash {
  type Hasher = SipHasher;

  #[inline]
  fn build_hasher(&self) -> SipHasher {
    self.hasher()
  }
}

impl fmt::Debug for SipHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SipHash")
      .field("c", &self.rounds.c)
      .field("d", &self.rounds.d)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, vec::Vec};

  use super::*;

  const KEY: Key = Key::new(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);

  fn seq(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
  }

  #[test]
  fn defaults_to_sip_2_4() {
    let sip = SipHash::new(KEY);
    assert_eq!(sip.rounds(), Rounds::new(2, 4));
    assert_eq!(Rounds::default(), Rounds::SIP_2_4);
    assert_eq!(sip.key(), KEY);
  }

  #[test]
  fn known_answer_fifteen_bytes() {
    assert_eq!(SipHash::new(KEY).hash(&seq(15)), 0xa129_ca61_49be_45e5);
  }

  #[test]
  fn known_answers_around_first_block_boundary() {
    let sip = SipHash::new(KEY);
    assert_eq!(sip.hash(&[]), 0x726f_db47_dd0e_0e31);
    assert_eq!(sip.hash(&seq(7)), 0xab02_00f5_8b01_d137);
    assert_eq!(sip.hash(&seq(8)), 0x93f5_f579_9a93_2462);
    assert_eq!(sip.hash(&seq(9)), 0x9e00_82df_0ba9_e4b0);
    assert_eq!(sip.hash(&seq(16)), 0x3f2a_cc7f_57c2_9bdb);
  }

  #[test]
  fn compute_rejects_missing_input() {
    let sip = SipHash::new(KEY);
    assert_eq!(sip.compute(None), Err(MissingInput::new()));
  }

  #[test]
  fn compute_accepts_empty_input() {
    let sip = SipHash::new(KEY);
    assert_eq!(sip.compute(Some(b"".as_slice())), Ok(sip.hash(&[])));
  }

  #[test]
  fn deterministic() {
    let sip = SipHash::new(KEY);
    let data = seq(100);
    assert_eq!(sip.hash(&data), sip.hash(&data));
    assert_eq!(SipHash::new(KEY).hash(&data), sip.hash(&data));
  }

  #[test]
  fn key_sensitive() {
    let data = seq(32);
    let a = SipHash::new(KEY).hash(&data);
    let b = SipHash::new(Key::new(KEY.k0() ^ 1, KEY.k1())).hash(&data);
    let c = SipHash::new(Key::new(KEY.k0(), KEY.k1() ^ (1 << 63))).hash(&data);
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
  }

  #[test]
  fn round_counts_are_wired_in() {
    let data = seq(15);
    let base = SipHash::new(KEY).hash(&data);
    assert_ne!(SipHash::with_rounds(KEY, Rounds::new(1, 4)).hash(&data), base);
    assert_ne!(SipHash::with_rounds(KEY, Rounds::new(2, 3)).hash(&data), base);
    assert_ne!(SipHash::with_rounds(KEY, Rounds::new(3, 4)).hash(&data), base);
    assert_ne!(SipHash::with_rounds(KEY, Rounds::new(2, 5)).hash(&data), base);
  }

  #[test]
  fn zero_rounds_are_accepted() {
    let sip = SipHash::with_rounds(KEY, Rounds::new(0, 0));
    // With no rounds the output is the state folded after XORs alone.
    let m = 0u64; // empty message, single zero word
    let s = State::new(KEY);
    let [v0, v1, v2, v3] = s.words();
    assert_eq!(sip.hash(&[]), (v0 ^ m) ^ v1 ^ (v2 ^ 0xff) ^ (v3 ^ m));
  }

  #[test]
  fn engine_is_shareable() {
    fn assert_send_sync_copy<T: Send + Sync + Copy>() {}
    assert_send_sync_copy::<SipHash>();
    assert_send_sync_copy::<Key>();
  }

  #[test]
  fn debug_hides_key() {
    let dbg = format!("{:?}", SipHash::new(KEY));
    assert_eq!(dbg, "SipHash { c: 2, d: 4, .. }");
  }
}

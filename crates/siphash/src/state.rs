//! Internal state and the SipRound permutation.

use crate::{
  Key,
  constants::{C0, C1, C2, C3, FINALIZATION_XOR},
};

/// The four-word SipHash state.
///
/// Created fresh for every message, mutated in place by compression, and
/// consumed by [`finalize`](Self::finalize).
#[derive(Clone, Copy)]
pub(crate) struct State {
  v0: u64,
  v1: u64,
  v2: u64,
  v3: u64,
}

impl State {
  #[inline(always)]
  pub(crate) const fn new(key: Key) -> Self {
    let k0 = key.k0();
    let k1 = key.k1();
    Self {
      v0: k0 ^ C0,
      v1: k1 ^ C1,
      v2: k0 ^ C2,
      v3: k1 ^ C3,
    }
  }

  /// One ARX round. All additions wrap.
  #[inline(always)]
  pub(crate) fn round(&mut self) {
    self.v0 = self.v0.wrapping_add(self.v1);
    self.v2 = self.v2.wrapping_add(self.v3);
    self.v1 = self.v1.rotate_left(13);
    self.v3 = self.v3.rotate_left(16);
    self.v1 ^= self.v0;
    self.v3 ^= self.v2;
    self.v0 = self.v0.rotate_left(32);

    self.v2 = self.v2.wrapping_add(self.v1);
    self.v0 = self.v0.wrapping_add(self.v3);
    self.v1 = self.v1.rotate_left(17);
    self.v3 = self.v3.rotate_left(21);
    self.v1 ^= self.v2;
    self.v3 ^= self.v0;
    self.v2 = self.v2.rotate_left(32);
  }

  #[inline(always)]
  pub(crate) fn rounds(&mut self, n: u32) {
    for _ in 0..n {
      self.round();
    }
  }

  /// Absorb one message word with `c` rounds.
  #[inline(always)]
  pub(crate) fn compress(&mut self, m: u64, c: u32) {
    self.v3 ^= m;
    self.rounds(c);
    self.v0 ^= m;
  }

  /// Absorb every word of `blocks`, in order.
  #[inline]
  pub(crate) fn compress_all(&mut self, blocks: impl IntoIterator<Item = u64>, c: u32) {
    for m in blocks {
      self.compress(m, c);
    }
  }

  #[inline(always)]
  #[must_use]
  pub(crate) fn finalize(mut self, d: u32) -> u64 {
    self.v2 ^= FINALIZATION_XOR;
    self.rounds(d);
    self.v0 ^ self.v1 ^ self.v2 ^ self.v3
  }

  #[cfg(test)]
  pub(crate) const fn words(&self) -> [u64; 4] {
    [self.v0, self.v1, self.v2, self.v3]
  }
}

//! Seeded one-shot hash traits.

use core::fmt::Debug;

/// A seeded one-shot hash.
///
/// Implementors are fixed-parameter hash functions such as SipHash-2-4, where
/// the seed is the secret key. They are meant for hash tables, sharding and
/// fingerprints over attacker-influenced keys. They are **not** general MACs
/// and must not be used for signatures, password hashing, or key derivation.
///
/// This trait is intentionally one-shot. Streaming APIs are algorithm-specific
/// and exposed as concrete types.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (for keyed hashes, the key).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  ///
  /// A default (all-zero) key gives no flooding resistance; prefer
  /// [`hash_with_seed`](Self::hash_with_seed) with a secret seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

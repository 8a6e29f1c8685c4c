//! Inspection of the initialization constants.
//!
//! Not part of the hashing contract; useful when checking an implementation
//! against another by hand.
//!
//! ```
//! use siphash::diag::InitialState;
//!
//! let rendered = InitialState::CONSTANTS.to_string();
//! assert!(rendered.starts_with("v0 = 0x736f6d6570736575\n"));
//! ```

use core::fmt;

use crate::constants::INITIAL_STATE;

/// The four initial-state constants, before any key is mixed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitialState {
  words: [u64; 4],
}

impl InitialState {
  pub const CONSTANTS: Self = Self { words: INITIAL_STATE };

  /// Constants in `v0..v3` order.
  #[inline]
  #[must_use]
  pub const fn words(&self) -> [u64; 4] {
    self.words
  }
}

impl fmt::Display for InitialState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, word) in self.words.iter().enumerate() {
      writeln!(f, "v{i} = {word:#x}")?;
    }
    Ok(())
  }
}

/// Constants as `0x`-prefixed lowercase hex strings, `v0..v3`.
#[cfg(feature = "alloc")]
#[must_use]
pub fn constants_hex() -> [alloc::string::String; 4] {
  INITIAL_STATE.map(|word| alloc::format!("{word:#x}"))
}

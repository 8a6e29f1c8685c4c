//! Error types for hashing operations.
//!
//! Hashing itself cannot fail. The only failure is a caller-side precondition:
//! a required input was not supplied. Individual crates may define additional
//! errors as needed.

use core::fmt;

/// A required input was absent.
///
/// Returned by checked entry points that accept an optional input (for example
/// `Option<&[u8]>`) when the caller passed `None`. An empty input is *not*
/// missing: it is a valid zero-length message.
///
/// # Examples
///
/// ```
/// use traits::MissingInput;
///
/// fn length(content: Option<&[u8]>) -> Result<usize, MissingInput> {
///   content.map(<[u8]>::len).ok_or(MissingInput::new())
/// }
///
/// assert_eq!(length(Some(b"")), Ok(0));
/// assert!(length(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct MissingInput;

impl MissingInput {
  /// Create a new missing-input error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for MissingInput {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for MissingInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("missing input")
  }
}

impl core::error::Error for MissingInput {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(MissingInput::new().to_string(), "missing input");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", MissingInput::new());
    assert_eq!(dbg, "MissingInput");
  }

  #[test]
  fn default_impl() {
    let err: MissingInput = Default::default();
    assert_eq!(err, MissingInput::new());
  }

  #[test]
  fn option_conversion() {
    fn require(content: Option<&[u8]>) -> Result<&[u8], MissingInput> {
      content.ok_or(MissingInput::new())
    }

    assert_eq!(require(Some(b"abc")), Ok(&b"abc"[..]));
    assert_eq!(require(Some(b"")), Ok(&b""[..]));
    assert_eq!(require(None), Err(MissingInput::new()));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_unpin<T: Unpin>() {}

    assert_send::<MissingInput>();
    assert_sync::<MissingInput>();
    assert_unpin::<MissingInput>();
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = MissingInput::new();
    assert!(err.source().is_none());
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<MissingInput>(), 0);
  }
}

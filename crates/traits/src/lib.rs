//! Core traits for the SipHash workspace.
//!
//! This crate provides the trait surface and error types that the hashing
//! crates conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Traits
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot seeded 64-bit hashing | SipHash-1-3, SipHash-2-4 |
//!
//! # Error Types
//!
//! - [`MissingInput`] - Opaque error for a required input that was not supplied
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;

pub use error::MissingInput;
pub use fast_hash::FastHash;

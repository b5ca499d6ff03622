//! Mastermind arrangement representation
//!
//! An `Arrangement` is the canonical integer form of a peg sequence. Decoding it
//! into colors requires the `BoardConfig` that produced it.

use super::board::MAX_PEGS;
use std::ops::Deref;
use thiserror::Error;

/// A code on the board, stored as its mixed-radix index
///
/// The index is only meaningful relative to a `BoardConfig`; use
/// `BoardConfig::arrangement`, `BoardConfig::encode` or `BoardConfig::parse`
/// to obtain one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arrangement(u32);

impl Arrangement {
    /// Wrap a raw index without range checking
    #[inline]
    #[must_use]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the integer form of this arrangement
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<Arrangement> for u32 {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.0
    }
}

/// Per-position color digits of an arrangement
///
/// Fixed capacity so the scorer never allocates; only the first `len` digits
/// are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pegs {
    digits: [u8; MAX_PEGS],
    len: u8,
}

impl Pegs {
    #[inline]
    pub(crate) const fn new(digits: [u8; MAX_PEGS], len: usize) -> Self {
        debug_assert!(len <= MAX_PEGS, "peg count exceeds MAX_PEGS");
        Self {
            digits,
            len: len as u8,
        }
    }

    /// Digits in peg order (first peg first)
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..usize::from(self.len)]
    }
}

impl Deref for Pegs {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Error type for text or integer input outside the arrangement domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("arrangement must have exactly {expected} pegs, got {got}")]
    InvalidLength { expected: usize, got: usize },
    #[error("'{symbol}' is not a palette color (palette: {palette})")]
    UnknownColor { symbol: char, palette: String },
    #[error("arrangement index {value} is outside [0, {size})")]
    OutOfRange { value: u32, size: u32 },
}

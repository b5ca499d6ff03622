//! Core domain types for Mastermind
//!
//! The board configuration with its arrangement codec, and the feedback scorer.
//! All types here are pure values with no shared state.

mod arrangement;
mod board;
mod feedback;

pub use arrangement::{Arrangement, CodecError, Pegs};
pub use board::{BoardConfig, BoardError, DEFAULT_PALETTE, DEFAULT_PEGS, MAX_COLORS, MAX_PEGS};
pub use feedback::{MatchResult, score};

pub(crate) use feedback::score_pegs;

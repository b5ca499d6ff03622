//! Mastermind Solver
//!
//! Exhaustive Mastermind analysis: narrows the set of secret codes consistent
//! with a game history and picks next guesses by the worst-case (minmax) rule.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::BoardConfig;
//! use mastermind_solver::solver::{MinMax, Session};
//!
//! // Classic board: colors WROYGP, four pegs
//! let mut session = Session::new(BoardConfig::default());
//! session.record_text("OOGP", 0, 1).unwrap();
//! session.record_text("RYWW", 1, 2).unwrap();
//! assert_eq!(session.count_candidates(), 44);
//!
//! // Guesses that leave the smallest worst-case bucket
//! let best = session.suggest(&MinMax).unwrap();
//! println!("{} guesses tie at {}", best.guesses.len(), best.value);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

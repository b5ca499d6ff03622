//! Simulated game command
//!
//! Plays against a known secret, taking the suggested guess every turn, and
//! records the path to the solution.

use super::suggest::pick_guess;
use crate::core::{Arrangement, BoardConfig, CodecError, MatchResult, score};
use crate::solver::{Metric, Round, Session, partition};
use thiserror::Error;
use tracing::debug;

/// Configuration for a simulated game
pub struct SolveConfig {
    pub secret: Arrangement,
    pub max_guesses: usize,
    /// Forced first guess; skips the opening search
    pub opening: Option<Arrangement>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Arrangement) -> Self {
        Self {
            secret,
            max_guesses: 10,
            opening: None,
        }
    }
}

/// Error type for simulated games
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("no guess available after {0} rounds")]
    NoGuess(usize),
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: String,
    pub result: MatchResult,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest bucket this guess could have left
    pub worst_case: usize,
}

/// Result of a simulated game
pub struct SolveResult {
    pub secret: String,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// Play against `config.secret`, guessing with `metric` and `pick_guess`
///
/// When a single candidate remains it is guessed directly.
///
/// # Errors
///
/// Returns an error if:
/// - The secret or forced opening is not on `board`
/// - No guess can be produced (only for an empty board)
pub fn solve_secret<M: Metric>(
    board: &BoardConfig,
    config: &SolveConfig,
    metric: &M,
) -> Result<SolveResult, SolveError> {
    for arrangement in std::iter::once(config.secret).chain(config.opening) {
        board.arrangement(arrangement.index())?;
    }

    let mut session = Session::new(board.clone());
    let mut steps: Vec<GuessStep> = Vec::new();

    for turn in 0..config.max_guesses {
        let remaining = session.query_candidates();

        let guess = match (turn, config.opening) {
            (0, Some(opening)) => opening,
            _ if remaining.len() == 1 => remaining[0],
            _ => session
                .suggest(metric)
                .and_then(|best| pick_guess(&best, &remaining))
                .ok_or(SolveError::NoGuess(turn))?,
        };

        let worst_case = partition(board, &remaining, guess).largest_bucket();
        let result = score(board, guess, config.secret);
        session.record(Round::new(guess, result));

        let candidates_after = session.count_candidates();
        debug!(
            turn = turn + 1,
            guess = %board.render(guess),
            %result,
            candidates_before = remaining.len(),
            candidates_after,
            "turn played"
        );

        steps.push(GuessStep {
            guess: board.render(guess),
            result,
            candidates_before: remaining.len(),
            candidates_after,
            worst_case,
        });

        if result.is_win(board.pegs()) {
            return Ok(SolveResult {
                secret: board.render(config.secret),
                success: true,
                steps,
            });
        }
    }

    // Ran out of guesses
    Ok(SolveResult {
        secret: board.render(config.secret),
        success: false,
        steps,
    })
}

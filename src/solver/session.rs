//! Game session driver
//!
//! Owns a growing history for one board and forwards every query to the filter
//! and selector.

use super::filter::{History, Round, candidates, count_candidates};
use super::metric::Metric;
use super::selector::{BestGuesses, best_guesses};
use crate::core::{Arrangement, BoardConfig, CodecError, MatchResult};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument};

/// A round as supplied by a caller: guess text plus red and white counts
///
/// Text form is `GUESS:RED:WHITE`, e.g. `OOGP:0:1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInput {
    pub guess: String,
    pub red: u8,
    pub white: u8,
}

impl RoundInput {
    #[must_use]
    pub fn new(guess: impl Into<String>, red: u8, white: u8) -> Self {
        Self {
            guess: guess.into(),
            red,
            white,
        }
    }

    #[must_use]
    pub const fn result(&self) -> MatchResult {
        MatchResult::new(self.red, self.white)
    }
}

/// Error type for malformed `GUESS:RED:WHITE` text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundInputError {
    #[error("expected GUESS:RED:WHITE, got '{0}'")]
    Malformed(String),
    #[error("invalid peg count '{0}'")]
    InvalidCount(String),
}

impl FromStr for RoundInput {
    type Err = RoundInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().rsplitn(3, ':');
        let (Some(white), Some(red), Some(guess)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(RoundInputError::Malformed(s.to_string()));
        };

        let count = |text: &str| {
            text.trim()
                .parse::<u8>()
                .map_err(|_| RoundInputError::InvalidCount(text.to_string()))
        };

        Ok(Self::new(guess.trim(), count(red)?, count(white)?))
    }
}

/// One game's worth of observations on a fixed board
///
/// # Examples
/// ```
/// use mastermind_solver::core::BoardConfig;
/// use mastermind_solver::solver::Session;
///
/// let mut session = Session::new(BoardConfig::default());
/// assert_eq!(session.count_candidates(), 1296);
///
/// session.record_text("OOGP", 0, 1).unwrap();
/// assert_eq!(session.count_candidates(), 276);
/// assert!(session.record_text("OOGX", 0, 1).is_err());
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: BoardConfig,
    history: History,
}

impl Session {
    #[must_use]
    pub const fn new(board: BoardConfig) -> Self {
        Self {
            board,
            history: History::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &BoardConfig {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Append an observed round
    pub fn record(&mut self, round: Round) {
        debug!(
            guess = %self.board.render(round.guess),
            result = %round.result,
            "recording round"
        );
        self.history.push(round);
    }

    /// Append a round given as guess text and peg counts
    ///
    /// The history is unchanged if the guess text is not a valid arrangement.
    ///
    /// # Errors
    /// Returns `CodecError` if the guess has the wrong length or an unknown color.
    pub fn record_text(&mut self, guess: &str, red: u8, white: u8) -> Result<Round, CodecError> {
        let round = Round::new(self.board.parse(guess)?, MatchResult::new(red, white));
        self.record(round);
        Ok(round)
    }

    /// Append a round from its caller-supplied form
    ///
    /// # Errors
    /// Returns `CodecError` if the guess text is not a valid arrangement.
    pub fn record_input(&mut self, input: &RoundInput) -> Result<Round, CodecError> {
        self.record_text(&input.guess, input.red, input.white)
    }

    /// Every arrangement consistent with the history, ascending
    #[instrument(level = "debug", skip(self), fields(rounds = self.history.len()))]
    #[must_use]
    pub fn query_candidates(&self) -> Vec<Arrangement> {
        candidates(&self.board, self.history.rounds()).collect()
    }

    #[must_use]
    pub fn count_candidates(&self) -> usize {
        count_candidates(&self.board, self.history.rounds())
    }

    /// True when no arrangement fits the recorded feedback
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        candidates(&self.board, self.history.rounds()).next().is_none()
    }

    /// Best next guesses under `metric`, with all ties
    #[must_use]
    pub fn suggest<M: Metric>(&self, metric: &M) -> Option<BestGuesses<M::Score>> {
        best_guesses(&self.board, self.history.rounds(), metric)
    }
}

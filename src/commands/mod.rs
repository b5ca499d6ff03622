//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, AnalysisStep, SAMPLE_GAME, analyze_history, sample_game};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_secret};
pub use suggest::{Suggestion, pick_guess, suggest_next};

use crate::core::{BoardConfig, CodecError};
use crate::solver::{RoundInput, Session};
use tracing::warn;

/// Build a session from caller-supplied rounds
///
/// Feedback that no pair of arrangements can produce is kept (it empties the
/// candidate set) but logged, since it usually means a typo.
///
/// # Errors
/// Returns `CodecError` for the first guess that is not a valid arrangement.
pub fn session_from_rounds(board: &BoardConfig, inputs: &[RoundInput]) -> Result<Session, CodecError> {
    let mut session = Session::new(board.clone());
    for input in inputs {
        if !input.result().is_achievable(board.pegs()) {
            warn!(round = %input.guess, result = %input.result(), "feedback is not achievable on this board");
        }
        session.record_input(input)?;
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_from_rounds_records_in_order() {
        let board = BoardConfig::default();
        let session = session_from_rounds(&board, &sample_game()).unwrap();
        assert_eq!(session.history().len(), SAMPLE_GAME.len());
        assert_eq!(session.count_candidates(), 1);
    }

    #[test]
    fn session_from_rounds_keeps_unachievable_feedback() {
        let board = BoardConfig::default();
        let inputs = [RoundInput::new("WROY", 3, 1)];
        let session = session_from_rounds(&board, &inputs).unwrap();
        assert!(session.is_contradictory());
    }

    #[test]
    fn session_from_rounds_surfaces_codec_errors() {
        let board = BoardConfig::default();
        let inputs = [RoundInput::new("WROY", 1, 0), RoundInput::new("WRO", 1, 0)];
        assert!(session_from_rounds(&board, &inputs).is_err());
    }
}

//! History analysis command
//!
//! Replays a history one round at a time and reports how the candidate set
//! shrinks after each prefix.

use super::session_from_rounds;
use crate::core::{BoardConfig, CodecError};
use crate::output::formatters::round_label;
use crate::solver::RoundInput;

/// A recorded game on the classic board, used when no rounds are given
pub const SAMPLE_GAME: [(&str, u8, u8); 6] = [
    ("OOGP", 0, 1),
    ("RYWW", 1, 2),
    ("PRPR", 1, 0),
    ("GRYW", 1, 1),
    ("WRWO", 0, 2),
    ("YWPW", 4, 0),
];

/// The sample game as caller-supplied rounds
#[must_use]
pub fn sample_game() -> Vec<RoundInput> {
    SAMPLE_GAME
        .iter()
        .map(|&(guess, red, white)| RoundInput::new(guess, red, white))
        .collect()
}

/// Candidate count after one history prefix
pub struct AnalysisStep {
    /// Rounds in the prefix, rendered as `GUESS(red,white)`
    pub rounds: Vec<String>,
    pub possible: usize,
    /// Present when `possible` is below the listing threshold
    pub candidates: Option<Vec<String>>,
}

/// Result of analyzing a history
pub struct AnalysisResult {
    pub space_size: u32,
    pub steps: Vec<AnalysisStep>,
}

/// Report the candidate count after every prefix of `inputs`
///
/// Candidates are listed for a prefix when fewer than `list_threshold` remain.
/// An empty history yields a single step covering the whole board.
///
/// # Errors
///
/// Returns an error if any guess is not a valid arrangement on `board`.
pub fn analyze_history(
    board: &BoardConfig,
    inputs: &[RoundInput],
    list_threshold: usize,
) -> Result<AnalysisResult, CodecError> {
    let prefix_lengths: Vec<usize> = if inputs.is_empty() {
        vec![0]
    } else {
        (1..=inputs.len()).collect()
    };

    let mut steps = Vec::with_capacity(prefix_lengths.len());
    for length in prefix_lengths {
        let session = session_from_rounds(board, &inputs[..length])?;
        let possible = session.count_candidates();

        let candidates = (possible < list_threshold).then(|| {
            session
                .query_candidates()
                .into_iter()
                .map(|candidate| board.render(candidate))
                .collect()
        });

        steps.push(AnalysisStep {
            rounds: session
                .history()
                .iter()
                .map(|round| round_label(board, round))
                .collect(),
            possible,
            candidates,
        });
    }

    Ok(AnalysisResult {
        space_size: board.space_size(),
        steps,
    })
}

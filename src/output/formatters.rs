//! Formatting utilities for terminal output

use crate::core::{BoardConfig, MatchResult};
use crate::solver::Round;

/// Format a round as `GUESS(red,white)`
#[must_use]
pub fn round_label(board: &BoardConfig, round: &Round) -> String {
    format!("{}{}", board.render(round.guess), round.result)
}

/// Format a result as key pegs: `●` exact, `○` color only, `·` miss
#[must_use]
pub fn feedback_pegs(result: MatchResult, pegs: usize) -> String {
    let red = usize::from(result.red);
    let white = usize::from(result.white);
    let misses = pegs.saturating_sub(red + white);

    format!("{}{}{}", "●".repeat(red), "○".repeat(white), "·".repeat(misses))
}

/// Lay out items in rows of `columns`, separated by two spaces
#[must_use]
pub fn columnize(items: &[String], columns: usize) -> String {
    let columns = columns.max(1);
    items
        .chunks(columns)
        .map(|row| row.join("  "))
        .collect::<Vec<_>>()
        .join("\n")
}

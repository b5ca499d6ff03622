//! Mastermind feedback calculation and representation
//!
//! Feedback is a `(red, white)` pair:
//! - red = pegs matching in both color and position
//! - white = further color matches ignoring position, capped per color by how
//!   often that color occurs among the unmatched pegs of each side

use super::arrangement::Arrangement;
use super::board::{BoardConfig, MAX_COLORS};
use std::fmt;

/// Feedback pegs for a guess compared against a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchResult {
    pub red: u8,
    pub white: u8,
}

impl MatchResult {
    #[inline]
    #[must_use]
    pub const fn new(red: u8, white: u8) -> Self {
        Self { red, white }
    }

    /// All pegs red (the code was guessed)
    #[inline]
    #[must_use]
    pub const fn win(pegs: usize) -> Self {
        Self::new(pegs as u8, 0)
    }

    /// Check if this is the winning feedback on a board with `pegs` pegs
    #[inline]
    #[must_use]
    pub const fn is_win(self, pegs: usize) -> bool {
        self.red as usize == pegs && self.white == 0
    }

    /// Check whether two arrangements of `pegs` pegs can produce this feedback
    ///
    /// `red + white` can never exceed the peg count, and `(pegs - 1, 1)` is
    /// impossible: if every peg but one is red, the odd peg's color has nothing
    /// left to match except its own position.
    #[must_use]
    pub const fn is_achievable(self, pegs: usize) -> bool {
        let red = self.red as usize;
        let white = self.white as usize;
        red + white <= pegs && !(red + 1 == pegs && white == 1)
    }

    /// Enumerate every achievable feedback for `pegs` pegs
    ///
    /// Ordered by red, then white. Assumes at least two colors; the classic
    /// board has 14 results.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::MatchResult;
    ///
    /// let results = MatchResult::all(4);
    /// assert_eq!(results.len(), 14);
    /// assert!(!results.contains(&MatchResult::new(3, 1)));
    /// ```
    #[must_use]
    pub fn all(pegs: usize) -> Vec<Self> {
        let pegs = pegs as u8;
        (0..=pegs)
            .flat_map(|red| (0..=pegs - red).map(move |white| Self::new(red, white)))
            .filter(|result| result.is_achievable(usize::from(pegs)))
            .collect()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.red, self.white)
    }
}

/// Calculate the feedback between two arrangements
///
/// Symmetric: `score(board, a, b) == score(board, b, a)`.
///
/// # Algorithm
/// 1. First pass: count exact position matches (red); tally the colors of
///    every other position separately for each side
/// 2. Second pass: white = Σ min(tally_a, tally_b) over all colors
///
/// # Examples
/// ```
/// use mastermind_solver::core::{BoardConfig, MatchResult, score};
///
/// let board = BoardConfig::default();
/// let guess = board.parse("WRGY").unwrap();
/// let code = board.parse("WOYR").unwrap();
///
/// // W/W is red; of R,G,Y vs O,Y,R only R and Y are shared
/// assert_eq!(score(&board, guess, code), MatchResult::new(1, 2));
/// ```
#[must_use]
pub fn score(board: &BoardConfig, a: Arrangement, b: Arrangement) -> MatchResult {
    score_pegs(&board.pegs_of(a), &board.pegs_of(b))
}

/// Feedback between two digit sequences of equal length
pub(crate) fn score_pegs(a: &[u8], b: &[u8]) -> MatchResult {
    debug_assert_eq!(a.len(), b.len(), "arrangements must have equal peg counts");

    let mut red = 0u8;
    // Counts only of the positions that are not exact matches
    let mut a_tally = [0u8; MAX_COLORS];
    let mut b_tally = [0u8; MAX_COLORS];

    for (&a_color, &b_color) in a.iter().zip(b) {
        if a_color == b_color {
            red += 1;
        } else {
            a_tally[usize::from(a_color)] += 1;
            b_tally[usize::from(b_color)] += 1;
        }
    }

    let white = a_tally
        .iter()
        .zip(&b_tally)
        .map(|(&x, &y)| x.min(y))
        .sum();

    MatchResult::new(red, white)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(board: &BoardConfig, a: &str, b: &str) -> MatchResult {
        score(board, board.parse(a).unwrap(), board.parse(b).unwrap())
    }

    #[test]
    fn identical_arrangements_are_a_win() {
        let board = BoardConfig::default();
        for code in board.arrangements() {
            let result = score(&board, code, code);
            assert_eq!(result, MatchResult::new(4, 0));
            assert!(result.is_win(4));
        }
    }

    #[test]
    fn disjoint_colors_score_nothing() {
        let board = BoardConfig::default();
        assert_eq!(scored(&board, "WWRR", "OOYY"), MatchResult::new(0, 0));
    }

    #[test]
    fn white_is_capped_by_color_overlap() {
        let board = BoardConfig::default();
        // Only one W in the code, so the extra W in the guess earns nothing
        assert_eq!(scored(&board, "WWOO", "RWYY"), MatchResult::new(1, 0));
        assert_eq!(scored(&board, "WWOO", "RYYW"), MatchResult::new(0, 1));
        assert_eq!(scored(&board, "WWRR", "RRWW"), MatchResult::new(0, 4));
    }

    #[test]
    fn reds_are_not_double_counted_as_whites() {
        let board = BoardConfig::default();
        // Position 0 W/W red; the guess's second W must not match it again
        assert_eq!(scored(&board, "WWYY", "WRRR"), MatchResult::new(1, 0));
    }

    #[test]
    fn sample_game_feedback() {
        let board = BoardConfig::default();
        assert_eq!(scored(&board, "OOGP", "YWPW"), MatchResult::new(0, 1));
        assert_eq!(scored(&board, "RYWW", "YWPW"), MatchResult::new(1, 2));
        assert_eq!(scored(&board, "PRPR", "YWPW"), MatchResult::new(1, 0));
        assert_eq!(scored(&board, "GRYW", "YWPW"), MatchResult::new(1, 1));
        assert_eq!(scored(&board, "WRWO", "YWPW"), MatchResult::new(0, 2));
    }

    #[test]
    fn score_is_symmetric_and_bounded() {
        let board = BoardConfig::default();
        for a in board.arrangements() {
            for b in board.arrangements().step_by(5) {
                let forward = score(&board, a, b);
                assert_eq!(forward, score(&board, b, a));
                assert!(forward.red + forward.white <= 4);
                assert_ne!(forward, MatchResult::new(3, 1));
                assert!(forward.is_achievable(4));
            }
        }
    }

    #[test]
    fn observed_results_cover_the_result_space() {
        let board = BoardConfig::default();
        let guess = board.parse("WRWO").unwrap();
        let mut seen: Vec<MatchResult> = Vec::new();
        for a in board.arrangements() {
            for b in [guess, board.parse("WWRR").unwrap(), board.parse("WROY").unwrap()] {
                let result = score(&board, a, b);
                if !seen.contains(&result) {
                    seen.push(result);
                }
            }
        }
        seen.sort();
        assert_eq!(seen, MatchResult::all(4));
    }

    #[test]
    fn result_space_sizes() {
        assert_eq!(MatchResult::all(4).len(), 14);
        assert_eq!(MatchResult::all(3).len(), 9);
        assert_eq!(MatchResult::all(1), vec![MatchResult::new(0, 0), MatchResult::new(1, 0)]);
    }

    #[test]
    fn achievability_rules() {
        assert!(!MatchResult::new(3, 1).is_achievable(4));
        assert!(!MatchResult::new(2, 3).is_achievable(4));
        assert!(MatchResult::new(0, 4).is_achievable(4));
        assert!(MatchResult::new(2, 2).is_achievable(4));
        assert!(!MatchResult::new(4, 0).is_win(5));
    }

    #[test]
    fn display_format() {
        assert_eq!(MatchResult::new(1, 2).to_string(), "(1,2)");
    }

    #[test]
    fn scoring_on_a_smaller_board() {
        let board = BoardConfig::new("xyz", 3).unwrap();
        assert_eq!(scored(&board, "xyz", "zxy"), MatchResult::new(0, 3));
        assert_eq!(scored(&board, "xxy", "xyx"), MatchResult::new(1, 2));
        assert_eq!(scored(&board, "xxx", "xyz"), MatchResult::new(1, 0));
    }
}

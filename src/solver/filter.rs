//! Candidate filtering against a guess history
//!
//! A candidate is any arrangement that reproduces the recorded feedback of every
//! round when scored against that round's guess.

use crate::core::{Arrangement, BoardConfig, MatchResult, Pegs, score_pegs};

/// One observed guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Round {
    pub guess: Arrangement,
    pub result: MatchResult,
}

impl Round {
    #[must_use]
    pub const fn new(guess: Arrangement, result: MatchResult) -> Self {
        Self { guess, result }
    }
}

/// Ordered sequence of rounds, only ever appended to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Round> {
        self.rounds.iter()
    }
}

impl From<Vec<Round>> for History {
    fn from(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }
}

impl FromIterator<Round> for History {
    fn from_iter<I: IntoIterator<Item = Round>>(iter: I) -> Self {
        Self {
            rounds: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}

/// Check whether `candidate` could be the secret given one round
#[must_use]
pub fn consistent(board: &BoardConfig, candidate: Arrangement, round: &Round) -> bool {
    score_pegs(&board.pegs_of(candidate), &board.pegs_of(round.guess)) == round.result
}

/// Enumerate every arrangement consistent with all rounds, in ascending order
///
/// Each call scans the whole board afresh, so the sequence can be restarted by
/// calling again. An empty history yields every arrangement.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{BoardConfig, MatchResult};
/// use mastermind_solver::solver::filter::{Round, candidates};
///
/// let board = BoardConfig::default();
/// let history = [Round::new(board.parse("YWPW").unwrap(), MatchResult::new(4, 0))];
///
/// let remaining: Vec<_> = candidates(&board, &history).collect();
/// assert_eq!(remaining, vec![board.parse("YWPW").unwrap()]);
/// ```
pub fn candidates<'a>(
    board: &'a BoardConfig,
    history: &[Round],
) -> impl Iterator<Item = Arrangement> + use<'a> {
    let observed: Vec<(Pegs, MatchResult)> = history
        .iter()
        .map(|round| (board.pegs_of(round.guess), round.result))
        .collect();

    board.arrangements().filter(move |&candidate| {
        let pegs = board.pegs_of(candidate);
        observed
            .iter()
            .all(|(guess, result)| score_pegs(&pegs, guess) == *result)
    })
}

/// Count the candidates without collecting them
#[must_use]
pub fn count_candidates(board: &BoardConfig, history: &[Round]) -> usize {
    candidates(board, history).count()
}

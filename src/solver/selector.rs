//! Best-guess search over the arrangement space
//!
//! Every guess in the pool is scored by partitioning the candidates and applying a
//! metric. All guesses sharing the highest score are kept; ties are never broken
//! here.

use super::filter::{Round, candidates};
use super::metric::Metric;
use super::partition::partition_decoded;
use crate::core::{Arrangement, BoardConfig, Pegs};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Highest metric score and every guess achieving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestGuesses<S> {
    pub value: S,
    /// Ascending, without duplicates
    pub guesses: Vec<Arrangement>,
}

impl<S: Ord> BestGuesses<S> {
    fn single(value: S, guess: Arrangement) -> Self {
        Self {
            value,
            guesses: vec![guess],
        }
    }

    /// Combine two partial results: a strictly better value wins, equal values
    /// pool their guesses
    fn merge(mut self, mut other: Self) -> Self {
        match self.value.cmp(&other.value) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                self.guesses.append(&mut other.guesses);
                self
            }
        }
    }

    #[must_use]
    pub fn contains(&self, guess: Arrangement) -> bool {
        self.guesses.binary_search(&guess).is_ok()
    }

    /// Number of tied guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

fn merge_partial<S: Ord>(
    left: Option<BestGuesses<S>>,
    right: Option<BestGuesses<S>>,
) -> Option<BestGuesses<S>> {
    match (left, right) {
        (Some(left), Some(right)) => Some(left.merge(right)),
        (left, None) => left,
        (None, right) => right,
    }
}

/// Find every guess on the board that maximizes `metric` for this history
///
/// The search covers the whole arrangement space, not just the remaining
/// candidates: a guess known to be wrong can still split the candidates more
/// evenly than any candidate can.
///
/// Returns `None` only for a board with no arrangements, which `BoardConfig`
/// never produces. A contradictory history still yields a result: every guess
/// ties on the empty partition.
///
/// # Examples
/// ```
/// use mastermind_solver::core::BoardConfig;
/// use mastermind_solver::solver::metric::MinMax;
/// use mastermind_solver::solver::selector::best_guesses;
///
/// let board = BoardConfig::new("ABC", 3).unwrap();
/// let best = best_guesses(&board, &[], &MinMax).unwrap();
///
/// assert!(best.value < 0);
/// assert!(!best.guesses.is_empty());
/// ```
#[instrument(level = "debug", skip_all, fields(rounds = history.len()))]
pub fn best_guesses<M: Metric>(
    board: &BoardConfig,
    history: &[Round],
    metric: &M,
) -> Option<BestGuesses<M::Score>> {
    let remaining: Vec<Arrangement> = candidates(board, history).collect();
    debug!(candidates = remaining.len(), "searching full guess space");

    let pool: Vec<Arrangement> = board.arrangements().collect();
    select_best_guesses(board, &pool, &remaining, metric)
}

/// Find every guess in `guess_pool` that maximizes `metric` over `candidates`
///
/// Guesses are sharded across the rayon pool; partial results merge with the
/// same tie-keeping rule as a sequential scan, and the returned guesses are
/// sorted, so the result does not depend on scheduling.
///
/// Returns `None` if the guess pool is empty.
#[must_use]
pub fn select_best_guesses<M: Metric>(
    board: &BoardConfig,
    guess_pool: &[Arrangement],
    candidates: &[Arrangement],
    metric: &M,
) -> Option<BestGuesses<M::Score>> {
    let decoded: Vec<(Arrangement, Pegs)> = candidates
        .iter()
        .map(|&candidate| (candidate, board.pegs_of(candidate)))
        .collect();

    let best = guess_pool
        .par_iter()
        .map(|&guess| {
            let split = partition_decoded(&board.pegs_of(guess), &decoded);
            BestGuesses::single(metric.evaluate(&split), guess)
        })
        .fold(|| None, |acc, next| merge_partial(acc, Some(next)))
        .reduce(|| None, merge_partial);

    best.map(|mut best| {
        best.guesses.sort_unstable();
        best.guesses.dedup();
        debug!(value = ?best.value, ties = best.guesses.len(), "best guesses selected");
        best
    })
}

//! Guess quality metrics
//!
//! A metric maps a partition to a totally ordered score; the selector keeps every
//! guess with the highest score. Metrics that minimize something return its
//! negation so that "higher is better" holds everywhere.

use super::partition::Partition;
use std::fmt;

/// Scores the partition a guess produces; higher is better
pub trait Metric: Sync {
    type Score: Ord + Clone + Send + fmt::Debug;

    fn evaluate(&self, partition: &Partition) -> Self::Score;
}

/// Minimize the worst case: score is the negated largest bucket size
///
/// # Examples
/// ```
/// use mastermind_solver::core::BoardConfig;
/// use mastermind_solver::solver::metric::{Metric, MinMax};
/// use mastermind_solver::solver::partition::partition;
///
/// let board = BoardConfig::default();
/// let all: Vec<_> = board.arrangements().collect();
/// let split = partition(&board, &all, board.parse("WWRR").unwrap());
///
/// assert_eq!(MinMax.evaluate(&split), -256);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMax;

impl Metric for MinMax {
    type Score = i64;

    fn evaluate(&self, partition: &Partition) -> i64 {
        -(partition.largest_bucket() as i64)
    }
}

/// Maximize the number of distinct feedback outcomes
#[derive(Debug, Clone, Copy, Default)]
pub struct MostParts;

impl Metric for MostParts {
    type Score = i64;

    fn evaluate(&self, partition: &Partition) -> i64 {
        partition.len() as i64
    }
}

/// Minimize the expected number of remaining candidates
///
/// With `n` candidates the expected remainder is `Σ size² / n`; `n` is the same
/// for every guess, so the score is the negated sum of squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedSize;

impl Metric for ExpectedSize {
    type Score = i64;

    fn evaluate(&self, partition: &Partition) -> i64 {
        -partition
            .bucket_sizes()
            .into_iter()
            .map(|size| (size * size) as i64)
            .sum::<i64>()
    }
}

/// Adapter turning a closure into a metric
///
/// # Examples
/// ```
/// use mastermind_solver::core::BoardConfig;
/// use mastermind_solver::solver::metric::FnMetric;
/// use mastermind_solver::solver::selector::best_guesses;
/// use mastermind_solver::solver::Partition;
///
/// // Every guess on a 2×2 board splits the four codes three ways
/// let board = BoardConfig::new("ab", 2).unwrap();
/// let fewest_buckets = FnMetric(|p: &Partition| -(p.len() as i32));
/// let best = best_guesses(&board, &[], &fewest_buckets).unwrap();
/// assert_eq!(best.value, -3);
/// assert_eq!(best.guesses.len(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnMetric<F>(pub F);

impl<F, S> Metric for FnMetric<F>
where
    F: Fn(&Partition) -> S + Sync,
    S: Ord + Clone + Send + fmt::Debug,
{
    type Score = S;

    fn evaluate(&self, partition: &Partition) -> S {
        (self.0)(partition)
    }
}

/// Runtime choice of metric
///
/// Keeps static dispatch while letting callers pick by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricKind {
    /// Smallest worst-case bucket (default)
    #[default]
    MinMax,
    /// Most distinct outcomes
    MostParts,
    /// Smallest expected bucket
    ExpectedSize,
}

impl MetricKind {
    /// Look up a metric by name
    ///
    /// Supported names: "minmax" (or "minimax"), "most-parts", "expected-size"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minmax" | "minimax" => Some(Self::MinMax),
            "most-parts" | "parts" => Some(Self::MostParts),
            "expected-size" | "expected" => Some(Self::ExpectedSize),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinMax => "minmax",
            Self::MostParts => "most-parts",
            Self::ExpectedSize => "expected-size",
        }
    }
}

impl Metric for MetricKind {
    type Score = i64;

    fn evaluate(&self, partition: &Partition) -> i64 {
        match self {
            Self::MinMax => MinMax.evaluate(partition),
            Self::MostParts => MostParts.evaluate(partition),
            Self::ExpectedSize => ExpectedSize.evaluate(partition),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

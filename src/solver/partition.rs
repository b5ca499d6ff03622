//! Partitioning candidates by hypothetical feedback
//!
//! For a proposed guess, every candidate lands in exactly one bucket: the one
//! keyed by the feedback that guess would receive if the candidate were the
//! secret.

use crate::core::{Arrangement, BoardConfig, MatchResult, Pegs, score_pegs};
use rustc_hash::FxHashMap;

/// Candidates grouped by the feedback a guess would produce
///
/// Buckets are created on demand, so a feedback with no candidates is absent
/// rather than present and empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    buckets: FxHashMap<MatchResult, Vec<Arrangement>>,
}

impl Partition {
    /// Candidates that would produce `result`, if any
    #[must_use]
    pub fn get(&self, result: MatchResult) -> Option<&[Arrangement]> {
        self.buckets.get(&result).map(Vec::as_slice)
    }

    /// All non-empty buckets, ordered by feedback
    #[must_use]
    pub fn buckets(&self) -> Vec<(MatchResult, &[Arrangement])> {
        let mut buckets: Vec<(MatchResult, &[Arrangement])> = self
            .buckets
            .iter()
            .map(|(&result, members)| (result, members.as_slice()))
            .collect();
        buckets.sort_unstable_by_key(|&(result, _)| result);
        buckets
    }

    /// Number of non-empty buckets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of candidates across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Size of the largest bucket (0 when there are no candidates)
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.buckets.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Bucket sizes, largest first
    #[must_use]
    pub fn bucket_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.buckets.values().map(Vec::len).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    fn insert(&mut self, result: MatchResult, candidate: Arrangement) {
        self.buckets.entry(result).or_default().push(candidate);
    }
}

/// Bucket `candidates` by the feedback `guess` would receive against each
///
/// `guess` may be any arrangement on the board, including ones already known
/// not to be the secret.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{BoardConfig, MatchResult};
/// use mastermind_solver::solver::partition::partition;
///
/// let board = BoardConfig::default();
/// let candidates = vec![board.parse("WRWO").unwrap(), board.parse("YWPW").unwrap()];
///
/// let split = partition(&board, &candidates, board.parse("WRWO").unwrap());
/// assert_eq!(split.len(), 2);
/// assert_eq!(split.largest_bucket(), 1);
/// assert_eq!(split.get(MatchResult::new(4, 0)), Some(&candidates[..1]));
/// ```
#[must_use]
pub fn partition(board: &BoardConfig, candidates: &[Arrangement], guess: Arrangement) -> Partition {
    let guess_pegs = board.pegs_of(guess);
    let mut split = Partition::default();

    for &candidate in candidates {
        let result = score_pegs(&guess_pegs, &board.pegs_of(candidate));
        split.insert(result, candidate);
    }

    split
}

/// Partition against candidates whose digits were decoded up front
pub(crate) fn partition_decoded(guess: &Pegs, candidates: &[(Arrangement, Pegs)]) -> Partition {
    let mut split = Partition::default();

    for (candidate, pegs) in candidates {
        split.insert(score_pegs(guess, pegs), *candidate);
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;
    use crate::solver::filter::{Round, candidates};

    fn assert_disjoint_cover(split: &Partition, candidates: &[Arrangement]) {
        let mut members: Vec<Arrangement> = split
            .buckets()
            .into_iter()
            .flat_map(|(_, bucket)| bucket.iter().copied())
            .collect();
        members.sort_unstable();
        assert_eq!(members, candidates, "buckets must be disjoint and covering");
        assert_eq!(split.total(), candidates.len());
    }

    #[test]
    fn full_board_partition_is_disjoint_and_covering() {
        let board = BoardConfig::default();
        let all: Vec<Arrangement> = board.arrangements().collect();

        for guess in ["WWWW", "WWRR", "WROY", "PPGW"] {
            let split = partition(&board, &all, board.parse(guess).unwrap());
            assert_disjoint_cover(&split, &all);
        }
    }

    #[test]
    fn filtered_partition_is_disjoint_and_covering() {
        let board = BoardConfig::default();
        let history = [Round::new(board.parse("OOGP").unwrap(), MatchResult::new(0, 1))];
        let remaining: Vec<Arrangement> = candidates(&board, &history).collect();

        // Every guess on the board, candidates or not
        for guess in board.arrangements().step_by(37) {
            let split = partition(&board, &remaining, guess);
            assert_disjoint_cover(&split, &remaining);
        }
    }

    #[test]
    fn buckets_hold_matching_feedback() {
        let board = BoardConfig::default();
        let all: Vec<Arrangement> = board.arrangements().collect();
        let guess = board.parse("WRGY").unwrap();
        let split = partition(&board, &all, guess);

        for (result, bucket) in split.buckets() {
            assert!(!bucket.is_empty());
            for &candidate in bucket {
                assert_eq!(score(&board, guess, candidate), result);
            }
        }
    }

    #[test]
    fn classic_opening_bucket_sizes() {
        let board = BoardConfig::default();
        let all: Vec<Arrangement> = board.arrangements().collect();

        let pairs = partition(&board, &all, board.parse("WWRR").unwrap());
        assert_eq!(pairs.largest_bucket(), 256);

        let mono = partition(&board, &all, board.parse("WWWW").unwrap());
        // Only red feedback is possible with a single color
        assert_eq!(mono.len(), 5);
        assert_eq!(mono.largest_bucket(), 625);
        assert_eq!(mono.get(MatchResult::new(0, 0)).map(<[Arrangement]>::len), Some(625));
        assert!(mono.get(MatchResult::new(0, 1)).is_none());
    }

    #[test]
    fn empty_candidates_give_empty_partition() {
        let board = BoardConfig::default();
        let split = partition(&board, &[], board.parse("WROY").unwrap());
        assert!(split.is_empty());
        assert_eq!(split.len(), 0);
        assert_eq!(split.total(), 0);
        assert_eq!(split.largest_bucket(), 0);
        assert!(split.bucket_sizes().is_empty());
    }

    #[test]
    fn bucket_sizes_sorted_descending() {
        let board = BoardConfig::default();
        let all: Vec<Arrangement> = board.arrangements().collect();
        let sizes = partition(&board, &all, board.parse("WROY").unwrap()).bucket_sizes();

        assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(sizes.iter().sum::<usize>(), 1296);
        assert_eq!(sizes.len(), 14);
    }

    #[test]
    fn decoded_partition_matches_direct_partition() {
        let board = BoardConfig::default();
        let all: Vec<Arrangement> = board.arrangements().step_by(3).collect();
        let decoded: Vec<(Arrangement, Pegs)> =
            all.iter().map(|&a| (a, board.pegs_of(a))).collect();
        let guess = board.parse("GRYW").unwrap();

        assert_eq!(
            partition_decoded(&board.pegs_of(guess), &decoded),
            partition(&board, &all, guess)
        );
    }
}

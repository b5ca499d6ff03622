//! Next-guess suggestion command

use crate::core::Arrangement;
use crate::solver::{BestGuesses, MetricKind, Session, partition};

/// Best next guesses for a session
pub struct Suggestion {
    pub metric: MetricKind,
    pub candidate_count: usize,
    /// Remaining candidates, listed only when fewer than the threshold
    pub candidates: Option<Vec<String>>,
    pub value: i64,
    /// Every guess tied on `value`
    pub guesses: Vec<String>,
    /// The tied guesses that could themselves be the secret
    pub candidate_guesses: Vec<String>,
    /// The guess picked by `pick_guess`
    pub recommended: String,
    /// Largest bucket the recommended guess can leave
    pub worst_case: usize,
}

/// Choose one guess among ties
///
/// Prefers a tied guess that is itself a candidate (it might win outright),
/// then the lowest index. `candidates` must be sorted ascending.
#[must_use]
pub fn pick_guess<S>(best: &BestGuesses<S>, candidates: &[Arrangement]) -> Option<Arrangement> {
    best.guesses
        .iter()
        .copied()
        .find(|guess| candidates.binary_search(guess).is_ok())
        .or_else(|| best.guesses.first().copied())
}

/// Compute the best next guesses for `session` under `metric`
#[must_use]
pub fn suggest_next(session: &Session, metric: MetricKind, list_threshold: usize) -> Option<Suggestion> {
    let board = session.board();
    let remaining = session.query_candidates();
    let best = session.suggest(&metric)?;
    let recommended = pick_guess(&best, &remaining)?;

    let render_all =
        |arrangements: &[Arrangement]| -> Vec<String> { arrangements.iter().map(|&a| board.render(a)).collect() };

    let candidate_guesses: Vec<Arrangement> = best
        .guesses
        .iter()
        .copied()
        .filter(|guess| remaining.binary_search(guess).is_ok())
        .collect();

    Some(Suggestion {
        metric,
        candidate_count: remaining.len(),
        candidates: (remaining.len() < list_threshold).then(|| render_all(&remaining)),
        value: best.value,
        guesses: render_all(&best.guesses),
        candidate_guesses: render_all(&candidate_guesses),
        recommended: board.render(recommended),
        worst_case: partition(board, &remaining, recommended).largest_bucket(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{sample_game, session_from_rounds};
    use crate::core::BoardConfig;

    #[test]
    fn opening_suggestion() {
        let session = Session::new(BoardConfig::default());
        let suggestion = suggest_next(&session, MetricKind::MinMax, 20).unwrap();

        assert_eq!(suggestion.candidate_count, 1296);
        assert!(suggestion.candidates.is_none());
        assert_eq!(suggestion.value, -256);
        assert_eq!(suggestion.worst_case, 256);
        assert_eq!(suggestion.guesses.len(), 90);
        // Every arrangement is a candidate before the first round
        assert_eq!(suggestion.candidate_guesses, suggestion.guesses);
        assert_eq!(suggestion.recommended, "WWRR");
    }

    #[test]
    fn recommendation_prefers_candidates() {
        let board = BoardConfig::default();
        let session = session_from_rounds(&board, &sample_game()[..4]).unwrap();
        let suggestion = suggest_next(&session, MetricKind::MinMax, 20).unwrap();

        assert_eq!(suggestion.value, -1);
        assert_eq!(suggestion.candidates, Some(vec!["WRWO".to_string(), "YWPW".to_string()]));
        assert_eq!(suggestion.candidate_guesses, vec!["WRWO", "YWPW"]);
        assert_eq!(suggestion.recommended, "WRWO");
        assert_eq!(suggestion.worst_case, 1);
    }

    #[test]
    fn pick_guess_falls_back_to_lowest() {
        let board = BoardConfig::default();
        let best = BestGuesses {
            value: 0,
            guesses: vec![board.parse("WWRR").unwrap(), board.parse("WWOO").unwrap()],
        };
        assert_eq!(pick_guess(&best, &[]), Some(board.parse("WWRR").unwrap()));

        let candidates = [board.parse("WWOO").unwrap()];
        assert_eq!(pick_guess(&best, &candidates), Some(candidates[0]));

        let none: BestGuesses<i64> = BestGuesses {
            value: 0,
            guesses: Vec::new(),
        };
        assert_eq!(pick_guess(&none, &candidates), None);
    }
}

//! Benchmark command
//!
//! Plays a simulated game against many secrets and aggregates the guess counts.

use super::solve::{SolveConfig, SolveError, solve_secret};
use super::suggest::pick_guess;
use crate::core::{Arrangement, BoardConfig};
use crate::solver::{Metric, best_guesses};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub opening: String,
    pub total_games: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Games that ran out of guesses
    pub failures: usize,
    /// Guess count → number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run a simulated game for every secret
///
/// The opening guess depends only on the board and metric, so it is searched
/// once and forced for every game.
///
/// # Errors
///
/// Returns an error if a secret is not on `board` or no guess can be produced.
pub fn run_benchmark<M: Metric>(
    board: &BoardConfig,
    secrets: &[Arrangement],
    metric: &M,
    max_guesses: usize,
) -> Result<BenchmarkResult, SolveError> {
    let start = Instant::now();

    let everything: Vec<Arrangement> = board.arrangements().collect();
    let opening = best_guesses(board, &[], metric)
        .and_then(|best| pick_guess(&best, &everything))
        .ok_or(SolveError::NoGuess(0))?;
    info!(opening = %board.render(opening), games = secrets.len(), "starting benchmark");

    // Progress bar
    let pb = ProgressBar::new(secrets.len() as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut failures = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for &secret in secrets {
        let config = SolveConfig {
            secret,
            max_guesses,
            opening: Some(opening),
        };
        let result = solve_secret(board, &config, metric)?;
        let guesses = result.steps.len();

        if !result.success {
            failures += 1;
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses_seen = max_guesses_seen.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;

        pb.set_message(result.secret);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_games = secrets.len();
    let (average_guesses, games_per_second) = if total_games == 0 {
        (0.0, 0.0)
    } else {
        (
            total_guesses as f64 / total_games as f64,
            total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    Ok(BenchmarkResult {
        opening: board.render(opening),
        total_games,
        total_guesses,
        average_guesses,
        min_guesses: if total_games == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        failures,
        distribution,
        duration,
        games_per_second,
    })
}

//! Display functions for command results

use super::formatters::columnize;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, Suggestion};
use crate::core::MatchResult;
use colored::Colorize;

const LIST_COLUMNS: usize = 8;

/// Print the candidate count after each history prefix
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HISTORY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for step in &result.steps {
        let possible = format!("{}/{}", step.possible, result.space_size);
        let possible = match step.possible {
            0 => possible.red().bold(),
            1 => possible.green().bold(),
            _ => possible.bright_yellow(),
        };
        println!("\nAfter [{}], {possible} possible", step.rounds.join(", "));

        if let Some(candidates) = &step.candidates {
            for line in columnize(candidates, LIST_COLUMNS).lines() {
                println!("   {line}");
            }
        }
    }

    if result.steps.last().is_some_and(|step| step.possible == 0) {
        println!("\n{}", "⚠ The history is contradictory: no code fits every round".red());
    }
}

/// Print the best next guesses
pub fn print_suggestion(suggestion: &Suggestion, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        "Suggestion".bright_cyan().bold(),
        format!("({})", suggestion.metric).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n   Candidates left:  {}", suggestion.candidate_count);
    if let Some(candidates) = &suggestion.candidates {
        for line in columnize(candidates, LIST_COLUMNS).lines() {
            println!("      {line}");
        }
    }

    println!(
        "   Recommended:      {}",
        suggestion.recommended.bright_yellow().bold()
    );
    println!("   Worst case:       {} left", suggestion.worst_case);
    println!("   Score:            {}", suggestion.value);
    println!(
        "   Tied guesses:     {} ({} could win)",
        suggestion.guesses.len(),
        suggestion.candidate_guesses.len()
    );

    if verbose {
        println!();
        for line in columnize(&suggestion.guesses, LIST_COLUMNS).lines() {
            println!("      {line}");
        }
    }
}

/// Print the path taken in a simulated game
pub fn print_solve_result(result: &SolveResult, pegs: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess,
            colored_pegs(step.result, pegs),
            step.result.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {}", step.worst_case);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Opening:          {}", result.opening.bright_yellow());
    println!("   Codes tested:     {}", result.total_games);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if result.failures > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", result.failures).red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        // Clamped to [0, 40]
        let bar_width = ((pct / 2.5) as usize).min(40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40 - bar_width).bright_black()
        );
        println!("   {guess_count:2}: {bar} {count:5} ({pct:5.1}%)");
    }
}

fn colored_pegs(result: MatchResult, pegs: usize) -> String {
    let red = usize::from(result.red);
    let white = usize::from(result.white);
    let misses = pegs.saturating_sub(red + white);

    format!(
        "{}{}{}",
        "●".repeat(red).red(),
        "○".repeat(white).white(),
        "·".repeat(misses).bright_black()
    )
}

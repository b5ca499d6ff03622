//! Mastermind Solver - CLI
//!
//! Replays Mastermind histories, suggests minmax guesses and plays simulated games.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_history, run_benchmark, sample_game, session_from_rounds, solve_secret,
        suggest_next,
    },
    core::{BoardConfig, DEFAULT_PALETTE, DEFAULT_PEGS, score},
    output::{
        formatters::feedback_pegs, print_analysis_result, print_benchmark_result, print_solve_result,
        print_suggestion,
    },
    solver::{MetricKind, RoundInput},
};
use rand::Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind analyzer: candidate filtering and minmax guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Color symbols, one character per color
    #[arg(short, long, global = true, default_value = DEFAULT_PALETTE)]
    palette: String,

    /// Pegs per arrangement
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_PEGS)]
    pegs: usize,

    /// Metric: minmax (default), most-parts, expected-size
    #[arg(short, long, global = true, default_value = "minmax")]
    metric: String,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a history and count the codes left after each round (default)
    Analyze {
        /// Rounds as GUESS:RED:WHITE (default: built-in sample game)
        rounds: Vec<RoundInput>,

        /// List candidates when fewer than this many remain
        #[arg(short, long, default_value_t = 20)]
        list_threshold: usize,

        /// Also print the best next guesses
        #[arg(short, long)]
        suggest: bool,
    },

    /// Score two arrangements against each other
    Score {
        /// First arrangement
        a: String,

        /// Second arrangement
        b: String,
    },

    /// Suggest the next guess for a history
    Suggest {
        /// Rounds as GUESS:RED:WHITE
        rounds: Vec<RoundInput>,
    },

    /// Play a simulated game against a secret
    Solve {
        /// The secret code (random when omitted)
        secret: Option<String>,

        /// Give up after this many guesses
        #[arg(long, default_value_t = 10)]
        max_guesses: usize,
    },

    /// Play every code on the board
    Benchmark {
        /// Only play the first N codes
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let board = BoardConfig::new(&cli.palette, cli.pegs).context("invalid board")?;
    let Some(metric) = MetricKind::from_name(&cli.metric) else {
        bail!(
            "unknown metric '{}' (expected minmax, most-parts or expected-size)",
            cli.metric
        );
    };
    let verbose = cli.verbose > 0;

    let command = cli.command.unwrap_or(Commands::Analyze {
        rounds: Vec::new(),
        list_threshold: 20,
        suggest: false,
    });

    match command {
        Commands::Analyze {
            rounds,
            list_threshold,
            suggest,
        } => run_analyze_command(&board, rounds, list_threshold, suggest.then_some(metric)),
        Commands::Score { a, b } => run_score_command(&board, &a, &b),
        Commands::Suggest { rounds } => run_suggest_command(&board, &rounds, metric, verbose),
        Commands::Solve {
            secret,
            max_guesses,
        } => run_solve_command(&board, secret.as_deref(), max_guesses, metric, verbose),
        Commands::Benchmark { limit } => run_benchmark_command(&board, limit, metric),
    }
}

/// Send logs to stderr, filtered by `RUST_LOG` or the verbosity flag
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_analyze_command(
    board: &BoardConfig,
    rounds: Vec<RoundInput>,
    list_threshold: usize,
    suggest: Option<MetricKind>,
) -> Result<()> {
    let rounds = if rounds.is_empty() {
        if board != &BoardConfig::default() {
            bail!("the sample game needs the classic board; pass rounds explicitly");
        }
        sample_game()
    } else {
        rounds
    };

    let result = analyze_history(board, &rounds, list_threshold)?;
    print_analysis_result(&result);

    if let Some(metric) = suggest {
        let session = session_from_rounds(board, &rounds)?;
        let suggestion = suggest_next(&session, metric, list_threshold).context("no guess available")?;
        print_suggestion(&suggestion, false);
    }
    Ok(())
}

fn run_score_command(board: &BoardConfig, a: &str, b: &str) -> Result<()> {
    let first = board.parse(a).with_context(|| format!("invalid arrangement '{a}'"))?;
    let second = board.parse(b).with_context(|| format!("invalid arrangement '{b}'"))?;
    let result = score(board, first, second);

    println!(
        "{} vs {}: {} {}",
        board.render(first),
        board.render(second),
        result,
        feedback_pegs(result, board.pegs())
    );
    Ok(())
}

fn run_suggest_command(
    board: &BoardConfig,
    rounds: &[RoundInput],
    metric: MetricKind,
    verbose: bool,
) -> Result<()> {
    let session = session_from_rounds(board, rounds)?;
    if session.is_contradictory() {
        bail!("no code is consistent with every round");
    }

    let suggestion = suggest_next(&session, metric, 20).context("no guess available")?;
    print_suggestion(&suggestion, verbose);
    Ok(())
}

fn run_solve_command(
    board: &BoardConfig,
    secret: Option<&str>,
    max_guesses: usize,
    metric: MetricKind,
    verbose: bool,
) -> Result<()> {
    let secret = match secret {
        Some(text) => board
            .parse(text)
            .with_context(|| format!("invalid secret '{text}'"))?,
        None => board.arrangement(rand::rng().random_range(0..board.space_size()))?,
    };

    let mut config = SolveConfig::new(secret);
    config.max_guesses = max_guesses;

    let result = solve_secret(board, &config, &metric)?;
    print_solve_result(&result, board.pegs(), verbose);
    Ok(())
}

fn run_benchmark_command(board: &BoardConfig, limit: Option<usize>, metric: MetricKind) -> Result<()> {
    let secrets: Vec<_> = board
        .arrangements()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!(
        "Running benchmark on {} codes with the {metric} metric...",
        secrets.len()
    );

    let result = run_benchmark(board, &secrets, &metric, 10)?;
    print_benchmark_result(&result);
    Ok(())
}

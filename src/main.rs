//! Wordle Assistant CLI
//!
//! Proposes guesses, reads feedback lines (`g` green, `y` yellow, anything
//! else a miss) and narrows the candidate words until the answer is found.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;
use wordle_assistant::{
    load_dictionary, read_dictionary, CandidateSet, Result, Session, Solver, Word,
    DEFAULT_REVEAL_BELOW,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Parser)]
#[clap(name = "wordle-assistant")]
#[clap(about = "an interactive wordle solving assistant", long_about = None)]
#[clap(author, version)]
struct Cli {
    /// Word list to use instead of the built-in one
    ///
    /// A .json file is read as an array of words, anything else as one word per line.
    #[clap(short, long)]
    dictionary: Option<PathBuf>,

    /// List the remaining candidates when fewer than this many are left
    #[clap(long, default_value_t = DEFAULT_REVEAL_BELOW)]
    reveal_below: usize,

    /// Log more detail to stderr (-v info, -vv debug)
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses and narrow them down from your feedback (default)
    Play,
    /// Watch the assistant crack a known answer
    Solve {
        /// the answer to the puzzle
        answer: String,
    },
    /// Rank the best opening guesses
    Suggest {
        /// how many guesses to list
        #[clap(short, long, default_value_t = 5)]
        top: usize,
    },
    /// Play against every dictionary word and report the guess distribution
    Bench,
}

fn init_logging(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn dictionary(args: &Cli) -> Result<CandidateSet> {
    match &args.dictionary {
        Some(path) => read_dictionary(path),
        None => load_dictionary(),
    }
}

fn play(solver: Solver) -> Result<()> {
    print!("{}", BANNER_TEXT);
    println!("Loaded {} words.", solver.remaining_count());
    println!();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(solver, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}

fn solve(mut solver: Solver, answer: &str) -> Result<()> {
    let answer = Word::parse(&answer.to_lowercase())?;
    println!("Solving for: {}", answer.to_string().to_uppercase());
    println!();

    let guesses = solver.solve_for_target(&answer)?;
    for (i, (guess, feedback)) in guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            guess.to_string().to_uppercase(),
            feedback
        );
    }

    println!();
    println!("Solved in {} guesses.", guesses.len());
    Ok(())
}

fn suggest(solver: &Solver, top: usize) {
    let ranked = solver.index().ranked_guesses(top);
    println!("{:>4} {:>8} {:>8} {:>8} {:>8}", "#", "Word", "Letters", "Places", "Score");
    println!("{}", "-".repeat(40));
    for (i, score) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8} {:>8} {:>8}",
            i + 1,
            score.word.to_string().to_uppercase(),
            score.inexact,
            score.exact,
            score.combined()
        );
    }
}

fn bench(solver: &Solver) {
    println!("Running benchmark on all {} words...", solver.dictionary().len());

    let start = Instant::now();
    let (distribution, failures) = solver.benchmark_guess_distribution();
    let elapsed = start.elapsed();

    let solved: usize = distribution.iter().map(|(_, c)| c).sum();
    let total_guesses: usize = distribution.iter().map(|(g, c)| g * c).sum();
    let total = solved + failures;

    println!();
    println!("Guess distribution:");
    for (guesses, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {:>2} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    if solved > 0 {
        println!("Average guesses: {:.3}", total_guesses as f64 / solved as f64);
    }
    println!("Contradictory games: {}", failures);
    println!("Time elapsed: {:.2?}", elapsed);
}

fn run(args: &Cli) -> Result<()> {
    let solver = Solver::new(dictionary(args)?).with_reveal_below(args.reveal_below);

    match &args.command {
        None | Some(Commands::Play) => play(solver)?,
        Some(Commands::Solve { answer }) => solve(solver, answer)?,
        Some(Commands::Suggest { top }) => suggest(&solver, *top),
        Some(Commands::Bench) => bench(&solver),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//! Wordle Decision Tree Solver - CLI
//!
//! Reads a valid guess list and a solution list, builds the decision tree,
//! and either dumps the full per-solution guess lines with statistics or
//! prints the line for a single target solution.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use wordle_tree::output::{print_stats, target_line, tree_lines, TreeStats};
use wordle_tree::solver::Solver;
use wordle_tree::wordlists;

#[derive(Parser)]
#[command(
    name = "wordle-tree",
    about = "Computes a near-optimal Wordle decision tree from a single opening word",
    version
)]
struct Cli {
    /// Path to the valid guess list (one word per line)
    valid_guesses: PathBuf,

    /// Path to the solution list (one word per line)
    solutions: PathBuf,

    /// Print only the guess line for this solution
    target: Option<String>,

    /// Candidate guesses explored at each node of the decision tree.
    /// 8 keeps excellent results at a fraction of the search cost.
    #[arg(short, long, default_value_t = 8)]
    prune_limit: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut valid_guesses = wordlists::load_from_file(&cli.valid_guesses)
        .with_context(|| format!("unable to read {}", cli.valid_guesses.display()))?;
    let solutions = wordlists::load_from_file(&cli.solutions)
        .with_context(|| format!("unable to read {}", cli.solutions.display()))?;

    // Any solution word can also be played as a guess.
    wordlists::merge_words(&mut valid_guesses, &solutions);

    let mut solver = Solver::new(&valid_guesses, &solutions)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!(
        "exploring guess trees over {} solutions (prune limit {})...",
        solver.matrix().solution_count(),
        cli.prune_limit
    ));

    let started = Instant::now();
    let tree = solver.solve(cli.prune_limit);
    let elapsed = started.elapsed();
    spinner.finish_and_clear();

    if let Some(target) = &cli.target {
        println!("{}", target_line(&tree, solver.matrix(), target)?);
        return Ok(());
    }

    for line in tree_lines(&tree, solver.matrix()) {
        println!("{line}");
    }

    let stats = TreeStats::gather(&tree, solver.matrix().solution_count());
    println!();
    print_stats(&stats);
    println!();
    println!("Took {} ms", elapsed.as_millis());

    Ok(())
}

//! Candidate guess ranking
//!
//! At every tree node the engine only explores a handful of guesses. This
//! module picks them: each guess is scored by the average number of feasible
//! solutions left per distinct feedback pattern, the lower the better. A
//! guess that resolves every feasible solution to its own pattern scores
//! below 1 and short-circuits the whole ranking.

use rayon::prelude::*;

use super::matrix::MatchMatrix;
use crate::core::Pattern;

/// Rank every guess against the feasible set and keep the best
///
/// Returns `(score, guess_index)` pairs in ascending score order, at most
/// `min(prune_limit, guesses - 1)` of them. Ties break towards the lower
/// guess index. If any guess scores below 1 the scan stops at the first such
/// guess and returns it alone: one more guess suffices from there.
pub(crate) fn rank_guesses(
    matrix: &MatchMatrix,
    feasible: &[u32],
    prune_limit: usize,
) -> Vec<(f64, u32)> {
    let averages: Vec<f64> = (0..matrix.guess_count() as u32)
        .into_par_iter()
        .map(|guess_index| score_guess(matrix, feasible, guess_index))
        .collect();

    for (guess_index, &average) in averages.iter().enumerate() {
        if average < 1.0 {
            return vec![(average, guess_index as u32)];
        }
    }

    let mut ranked: Vec<(f64, u32)> = averages
        .into_iter()
        .enumerate()
        .map(|(guess_index, average)| (average, guess_index as u32))
        .collect();

    ranked.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let limit = prune_limit
        .min(matrix.guess_count().saturating_sub(1))
        .max(1);
    ranked.truncate(limit);
    ranked
}

/// Average feasible solutions per distinct pattern for one guess
fn score_guess(matrix: &MatchMatrix, feasible: &[u32], guess_index: u32) -> f64 {
    let (unique_patterns, has_exact) = unique_pattern_count(matrix, feasible, guess_index);

    // Count the guess itself out when it is one of the feasible solutions:
    // that branch ends the game immediately, and the discount prefers such
    // guesses over otherwise equal non-solutions.
    let solutions = if has_exact {
        feasible.len() - 1
    } else {
        feasible.len()
    };

    solutions as f64 / unique_patterns as f64
}

/// Number of distinct patterns a guess produces over the feasible set, and
/// whether one of them is all-greens
fn unique_pattern_count(matrix: &MatchMatrix, feasible: &[u32], guess_index: u32) -> (usize, bool) {
    let mut seen = [false; Pattern::COUNT];
    let mut unique = 0usize;

    for &solution in feasible {
        let value = matrix.pattern(guess_index, solution).value() as usize;
        if !seen[value] {
            seen[value] = true;
            unique += 1;
        }
    }

    (unique, seen[Pattern::ALL_GREENS.value() as usize])
}

//! Guess count statistics for a solved tree

use colored::Colorize;

use crate::solver::{DecisionNode, DecisionTree, MAX_GUESSES};

/// How many solutions the tree reaches at each guess count
#[derive(Debug, Clone)]
pub struct TreeStats {
    /// `counts[i]` solutions are found on guess `i + 1`
    pub counts: [usize; MAX_GUESSES as usize],
    pub total_solutions: usize,
}

impl TreeStats {
    /// Walk the tree and tally guess counts
    ///
    /// Leaf nodes count at their own depth; deferred leaves cost one guess
    /// more. Solutions beyond the guess budget are not counted and show up
    /// in [`TreeStats::unsolved`].
    #[must_use]
    pub fn gather(tree: &DecisionTree, total_solutions: usize) -> Self {
        let mut counts = [0; MAX_GUESSES as usize];
        tally(&tree.root, 0, &mut counts);
        Self {
            counts,
            total_solutions,
        }
    }

    /// Solutions reachable within the guess budget
    #[must_use]
    pub fn solved(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Solutions the tree failed to reach within the guess budget
    #[must_use]
    pub fn unsolved(&self) -> usize {
        self.total_solutions - self.solved()
    }

    /// Mean guesses over the solved solutions
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let total: usize = self
            .counts
            .iter()
            .enumerate()
            .map(|(index, &count)| (index + 1) * count)
            .sum();
        total as f64 / solved as f64
    }
}

fn tally(node: &DecisionNode, depth: usize, counts: &mut [usize; MAX_GUESSES as usize]) {
    if depth >= counts.len() {
        return;
    }

    if node.is_leaf {
        counts[depth] += 1;
    }

    for child in &node.children {
        tally(child, depth + 1, counts);
    }

    if depth + 1 < counts.len() {
        counts[depth + 1] += node.leaves.len();
    }
}

/// Print the statistics block in the dump format: one row per guess count,
/// the unsolved shortfall, and the average
pub fn print_stats(stats: &TreeStats) {
    println!("{}", "--- stats ---".cyan().bold());
    for (index, &count) in stats.counts.iter().enumerate() {
        println!("{} : {count}", index + 1);
    }

    let unsolved = stats.unsolved();
    if unsolved > 0 {
        println!("{} : {}", "x".red().bold(), unsolved);
    } else {
        println!("x : 0");
    }

    println!(
        "av: {}",
        format!("{:.4}", stats.average_guesses()).bright_yellow().bold()
    );
    println!("{}", "-------------".cyan().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_owned()).collect()
    }

    fn solve(list: &[&str]) -> TreeStats {
        let mut solver = Solver::new(&words(list), &words(list)).unwrap();
        let tree = solver.solve(8);
        TreeStats::gather(&tree, list.len())
    }

    #[test]
    fn single_solution_stats() {
        let stats = solve(&["apple"]);
        assert_eq!(stats.counts, [1, 0, 0, 0, 0, 0]);
        assert_eq!(stats.solved(), 1);
        assert_eq!(stats.unsolved(), 0);
        assert!((stats.average_guesses() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_solution_stats() {
        // One solution falls on the opener, the other one guess later.
        let stats = solve(&["abcde", "abcdf"]);
        assert_eq!(stats.counts, [1, 1, 0, 0, 0, 0]);
        assert!((stats.average_guesses() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_accounts_for_every_solution() {
        let list = ["crate", "trace", "brace", "grace", "space", "place"];
        let stats = solve(&list);
        assert_eq!(stats.solved(), list.len());
        assert_eq!(stats.unsolved(), 0);
        assert!(stats.average_guesses() >= 1.0);
    }

    #[test]
    fn unsolved_counts_the_shortfall() {
        let stats = TreeStats {
            counts: [1, 2, 0, 0, 0, 0],
            total_solutions: 5,
        };
        assert_eq!(stats.solved(), 3);
        assert_eq!(stats.unsolved(), 2);
    }

    #[test]
    fn empty_tree_average_is_zero() {
        let stats = TreeStats {
            counts: [0; 6],
            total_solutions: 0,
        };
        assert!((stats.average_guesses() - 0.0).abs() < f64::EPSILON);
    }
}

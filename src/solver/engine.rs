//! The recursive decision tree search
//!
//! `search` builds the tree for one feasible solution set: rank the guesses,
//! explore the top candidates (each on its own worker thread while capacity
//! lasts), then keep the candidate with the lowest average depth to a
//! solution. Results are memoized by feasible set, so identical subproblems
//! reached through different guess sequences are solved once.

use std::cmp;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use rustc_hash::FxHashMap;

use super::matrix::MatchMatrix;
use super::ranker;
use super::tree::{DecisionNode, DecisionTree};
use super::SolverError;

/// Builds near-optimal Wordle decision trees for a fixed pair of word lists
pub struct Solver {
    matrix: MatchMatrix,
    /// Candidate guesses explored per node, set by `solve`
    prune_limit: usize,
    max_workers: usize,
    active_workers: AtomicUsize,
    memo: Mutex<FxHashMap<Vec<u32>, Arc<DecisionNode>>>,
}

impl Solver {
    /// Validate the word lists and precompute the match matrix
    ///
    /// # Errors
    /// See [`MatchMatrix::build`]: empty lists, wrong-length words, and
    /// solutions missing from the guess list are all rejected here.
    pub fn new(valid_guesses: &[String], solutions: &[String]) -> Result<Self, SolverError> {
        let matrix = MatchMatrix::build(valid_guesses, solutions)?;

        // Oversubscribing the cores covers workers idling in joins.
        let max_workers = 2 * thread::available_parallelism().map_or(1, usize::from);

        Ok(Self {
            matrix,
            prune_limit: 0,
            max_workers,
            active_workers: AtomicUsize::new(0),
            memo: Mutex::new(FxHashMap::default()),
        })
    }

    /// The precomputed match matrix backing this solver
    #[must_use]
    pub fn matrix(&self) -> &MatchMatrix {
        &self.matrix
    }

    /// Build the decision tree, exploring at most `prune_limit` candidate
    /// guesses per node
    ///
    /// The limit is clamped to `[1, guesses - 1]`. Taking `&mut self` makes
    /// the per-run state exclusive: a solver runs one search at a time.
    pub fn solve(&mut self, prune_limit: usize) -> DecisionTree {
        self.prune_limit = cmp::min(
            prune_limit.max(1),
            cmp::max(self.matrix.guess_count() - 1, 1),
        );
        self.memo.lock().expect("memo mutex poisoned").clear();

        let feasible: Vec<u32> = (0..self.matrix.solution_count() as u32).collect();
        DecisionTree {
            root: self.search(&feasible, 0),
        }
    }

    /// Solve one feasible set, `depth` guesses into the game
    fn search(&self, feasible: &[u32], depth: u32) -> Arc<DecisionNode> {
        // A memoized subtree is only reusable if it still fits the remaining
        // guess budget from this depth.
        if let Some(cached) = self.lookup_memo(feasible) {
            if cached.within_budget(depth) {
                return cached;
            }
        }

        let ranked = ranker::rank_guesses(&self.matrix, feasible, self.prune_limit);
        let mut candidates: Vec<DecisionNode> = ranked
            .iter()
            .map(|&(_, guess_index)| DecisionNode::new(guess_index))
            .collect();

        // Explore the candidates, spreading the work over worker threads
        // while the global cap allows. The final candidate always runs on
        // the current thread so the spawner never just waits.
        if let Some((last, rest)) = candidates.split_last_mut() {
            thread::scope(|scope| {
                for node in rest {
                    if self.active_workers.load(Ordering::Relaxed) >= self.max_workers {
                        self.traverse_matches(node, feasible, depth);
                    } else {
                        self.active_workers.fetch_add(1, Ordering::Relaxed);
                        scope.spawn(move || {
                            self.traverse_matches(node, feasible, depth);
                            self.active_workers.fetch_sub(1, Ordering::Relaxed);
                        });
                    }
                }
                self.traverse_matches(last, feasible, depth);
            });
        }

        // Second heuristic: among candidates that fit the budget, keep the
        // one with the fewest average guesses to a solution. Ties keep the
        // earlier (better-ranked) candidate. If nothing fits, fall back to
        // the top-ranked candidate; the shortfall shows up in statistics
        // rather than aborting the run.
        let mut chosen: Option<(usize, f64)> = None;
        for (index, node) in candidates.iter().enumerate() {
            if !node.within_budget(depth) {
                continue;
            }
            let average = node.average_depth();
            match chosen {
                Some((_, best)) if average >= best => {}
                _ => chosen = Some((index, average)),
            }
        }
        let index = chosen.map_or(0, |(index, _)| index);

        let node = Arc::new(candidates.swap_remove(index));
        self.store_memo(feasible.to_vec(), Arc::clone(&node));
        node
    }

    /// Explore every feedback pattern a candidate guess can produce
    fn traverse_matches(&self, node: &mut DecisionNode, feasible: &[u32], depth: u32) {
        let buckets = self.matrix.partition_by_pattern(node.guess_index, feasible);

        // Ascending pattern order is part of the contract; the all-greens
        // bucket therefore always comes last.
        for bucket in &buckets {
            if !self.traverse_match(node, depth, bucket) {
                break;
            }
        }
    }

    /// Handle one pattern bucket; returns false once the subtree can no
    /// longer fit the guess budget, which stops the pattern loop
    fn traverse_match(&self, node: &mut DecisionNode, depth: u32, bucket: &[u32]) -> bool {
        match bucket {
            [] => true,
            &[solution] => {
                // A lone survivor is either this very guess or one guess away.
                let exact = self
                    .matrix
                    .pattern(node.guess_index, solution)
                    .is_all_greens();
                node.record_solved(solution, exact);
                true
            }
            _ => {
                let child = self.search(bucket, depth + 1);
                node.attach_child(child);
                depth + node.min_depth <= super::MAX_GUESSES
            }
        }
    }

    fn lookup_memo(&self, feasible: &[u32]) -> Option<Arc<DecisionNode>> {
        self.memo
            .lock()
            .expect("memo mutex poisoned")
            .get(feasible)
            .cloned()
    }

    /// Two workers may race to solve the same feasible set; the second write
    /// wins and the earlier node lives on under whichever parent spawned it.
    fn store_memo(&self, feasible: Vec<u32>, node: Arc<DecisionNode>) {
        self.memo
            .lock()
            .expect("memo mutex poisoned")
            .insert(feasible, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_owned()).collect()
    }

    fn solve(guesses: &[&str], solutions: &[&str], prune_limit: usize) -> (Solver, DecisionTree) {
        let mut solver = Solver::new(&words(guesses), &words(solutions)).unwrap();
        let tree = solver.solve(prune_limit);
        (solver, tree)
    }

    #[test]
    fn single_solution_tree() {
        let (_, tree) = solve(&["apple"], &["apple"], 8);
        let root = &tree.root;

        assert_eq!(root.guess_index, 0);
        assert!(root.is_leaf);
        assert_eq!(root.solved_count, 1);
        assert_eq!(root.total_depth, 1);
        assert_eq!(root.min_depth, 1);
        assert!(root.children.is_empty());
        assert!(root.leaves.is_empty());
    }

    #[test]
    fn two_solution_tree() {
        let (_, tree) = solve(&["abcde", "abcdf"], &["abcde", "abcdf"], 8);
        let root = &tree.root;

        // The chosen guess solves itself immediately and defers the other.
        assert!(root.is_leaf);
        assert_eq!(root.leaves.len(), 1);
        assert_eq!(root.solved_count, 2);
        assert_eq!(root.total_depth, 3);
        // The deferred leaf sets min_depth to 2 before the all-greens bucket
        // is reached, and the exact match never lowers it.
        assert_eq!(root.min_depth, 2);
    }

    #[test]
    fn every_solution_is_reachable() {
        let list = ["crate", "trace", "brace", "grace", "space", "place"];
        let (solver, tree) = solve(&list, &list, 3);

        assert_eq!(tree.root.solved_count as usize, list.len());
        let lines = render::tree_lines(&tree, solver.matrix());
        assert_eq!(lines.len(), list.len());
        for word in list {
            assert!(
                lines.iter().any(|line| line.ends_with(word)),
                "missing {word}"
            );
        }
    }

    #[test]
    fn every_line_starts_with_the_root_guess() {
        let list = ["crate", "trace", "brace", "grace", "space"];
        let (solver, tree) = solve(&list, &list, 4);

        let opener = solver.matrix().guess_word(tree.root.guess_index);
        for line in render::tree_lines(&tree, solver.matrix()) {
            assert!(line.starts_with(opener), "{line}");
        }
    }

    #[test]
    fn repeated_solves_are_deterministic() {
        let guesses = [
            "crate", "trace", "brace", "grace", "space", "place", "plant", "slant", "shard",
            "chard",
        ];
        let solutions = ["crate", "trace", "brace", "grace", "space", "place"];

        let mut solver = Solver::new(&words(&guesses), &words(&solutions)).unwrap();
        let first = render::tree_lines(&solver.solve(3), solver.matrix());
        let second = render::tree_lines(&solver.solve(3), solver.matrix());
        assert_eq!(first, second);
    }

    #[test]
    fn prune_limit_is_clamped() {
        // A prune limit beyond the guess universe must not explore phantom
        // candidates; a limit of zero still explores one.
        let list = ["crate", "trace", "brace"];
        let (_, wide) = solve(&list, &list, 1000);
        assert_eq!(wide.root.solved_count, 3);

        let (_, narrow) = solve(&list, &list, 0);
        assert_eq!(narrow.root.solved_count, 3);
    }

    #[test]
    fn solved_count_never_exceeds_solutions() {
        let list = ["abcde", "abcdf", "abcdg", "abcdh", "xxxxe"];
        let (_, tree) = solve(&list, &list[..4], 2);
        assert!(tree.root.solved_count <= 4);
    }
}

//! Wordle Decision Tree Solver
//!
//! Given a list of valid guesses and a list of solutions, computes a tree of
//! guesses that drives play from a single opening word to every solution in
//! as few guesses on average as possible.
//!
//! The search is a memoized, depth-bounded beam search: at every node the
//! candidate guesses are ranked by how finely they partition the remaining
//! feasible solutions, the most promising candidates are explored (in
//! parallel, up to a worker cap), and the subtree with the lowest average
//! depth to a solution wins.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_tree::solver::Solver;
//!
//! let guesses = vec!["crate".to_string(), "trace".to_string()];
//! let solutions = vec!["trace".to_string()];
//!
//! let mut solver = Solver::new(&guesses, &solutions).unwrap();
//! let tree = solver.solve(8);
//! assert_eq!(tree.root.solved_count, 1);
//! ```

// Core domain types
pub mod core;

// The decision tree search engine
pub mod solver;

// Word list loading
pub mod wordlists;

// Tree rendering and statistics
pub mod output;

//! The decision tree search engine
//!
//! Four cooperating pieces: the match matrix (every guess/solution feedback
//! pattern, computed once), the guess ranker (which candidates are worth
//! exploring at a node), the decision tree itself, and the recursive,
//! memoized, depth-bounded search that ties them together.

use std::fmt;

use crate::core::WordError;

mod engine;
mod matrix;
mod ranker;
mod tree;

pub use engine::Solver;
pub use matrix::MatchMatrix;
pub use tree::{DecisionNode, DecisionTree};

/// A game is lost once this many guesses have been played.
pub const MAX_GUESSES: u32 = 6;

/// Errors surfaced while building a solver or rendering its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The valid guess list was empty
    EmptyGuesses,
    /// The solution list was empty
    EmptySolutions,
    /// A word had the wrong length
    InvalidWord(WordError),
    /// A solution was missing from the valid guess list
    SolutionNotGuessable(String),
    /// The renderer was asked for a word that is not a solution
    UnknownTargetSolution(String),
    /// Solutions were elided because no subtree fit the guess budget
    DepthBudgetExceeded { unsolved: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGuesses => write!(f, "the valid guess list is empty"),
            Self::EmptySolutions => write!(f, "the solution list is empty"),
            Self::InvalidWord(err) => err.fmt(f),
            Self::SolutionNotGuessable(word) => {
                write!(
                    f,
                    "solution '{word}' is missing from the valid guess list; \
                     every solution must also be a valid guess"
                )
            }
            Self::UnknownTargetSolution(word) => {
                write!(f, "the solution list does not contain '{word}'")
            }
            Self::DepthBudgetExceeded { unsolved } => {
                write!(
                    f,
                    "{unsolved} solution(s) cannot be reached within {MAX_GUESSES} guesses"
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

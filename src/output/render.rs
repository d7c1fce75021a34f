//! Decision tree rendering
//!
//! Flattens the tree into one line per solution: the guesses played in
//! order, each followed by the feedback it earns against that solution, and
//! finally the solution itself. A leaf's own guess is part of its stack, so
//! a solution found on the very first guess renders as
//! `apple GGGGG apple`.

use rustc_hash::FxHashMap;

use crate::solver::{DecisionNode, DecisionTree, MatchMatrix, SolverError};

/// Render the whole tree, one line per solved solution
///
/// Lines are ordered by guess count first, then by the per-level composite
/// of guess index and feedback pattern, so related branches group together.
#[must_use]
pub fn tree_lines(tree: &DecisionTree, matrix: &MatchMatrix) -> Vec<String> {
    let stacks = guess_stacks(tree, matrix);

    let mut entries: Vec<(u32, Vec<u32>)> = stacks.into_iter().collect();
    entries.sort_by_cached_key(|(solution, stack)| line_sort_key(matrix, *solution, stack));

    entries
        .iter()
        .map(|(solution, stack)| line_for(matrix, *solution, stack))
        .collect()
}

/// Render the line for a single target solution
///
/// # Errors
/// `UnknownTargetSolution` if `target` is not in the solution list;
/// `DepthBudgetExceeded` if the tree had to elide it.
pub fn target_line(
    tree: &DecisionTree,
    matrix: &MatchMatrix,
    target: &str,
) -> Result<String, SolverError> {
    let solution = matrix
        .solution_index(target)
        .ok_or_else(|| SolverError::UnknownTargetSolution(target.to_owned()))?;

    let stacks = guess_stacks(tree, matrix);
    let stack = stacks
        .get(&solution)
        .ok_or(SolverError::DepthBudgetExceeded { unsolved: 1 })?;

    Ok(line_for(matrix, solution, stack))
}

/// The sequence of guesses the tree plays for each solution
fn guess_stacks(tree: &DecisionTree, matrix: &MatchMatrix) -> FxHashMap<u32, Vec<u32>> {
    let mut stacks = FxHashMap::default();
    let mut path = Vec::new();
    collect_stacks(&tree.root, matrix, &mut path, &mut stacks);
    stacks
}

fn collect_stacks(
    node: &DecisionNode,
    matrix: &MatchMatrix,
    path: &mut Vec<u32>,
    stacks: &mut FxHashMap<u32, Vec<u32>>,
) {
    path.push(node.guess_index);

    if node.is_leaf {
        // A leaf's guess is itself a solution; all-greens guarantees the
        // words are identical, so the reverse lookup succeeds.
        if let Some(solution) = matrix.solution_index(matrix.guess_word(node.guess_index)) {
            stacks.insert(solution, path.clone());
        }
    }

    for &solution in &node.leaves {
        stacks.insert(solution, path.clone());
    }

    for child in &node.children {
        collect_stacks(child, matrix, path, stacks);
    }

    path.pop();
}

fn line_for(matrix: &MatchMatrix, solution: u32, stack: &[u32]) -> String {
    let mut line = String::new();
    for &guess in stack {
        line.push_str(matrix.guess_word(guess));
        line.push(' ');
        line.push_str(matrix.pattern_string(matrix.pattern(guess, solution)));
        line.push(' ');
    }
    line.push_str(matrix.solution_word(solution));
    line
}

/// Composite ordering key: stack length dominates, then each level packs
/// its guess index and feedback pattern
fn line_sort_key(matrix: &MatchMatrix, solution: u32, stack: &[u32]) -> Vec<u64> {
    let length = stack.len() as u64;
    stack
        .iter()
        .map(|&guess| {
            (length << 32)
                | (u64::from(guess) << 11)
                | u64::from(matrix.pattern(guess, solution).value())
        })
        .collect()
}

//! The guess/solution match matrix
//!
//! Every feedback pattern the game can ever produce is computed once, up
//! front, into a dense `guesses × solutions` table of byte-sized pattern
//! values. The search engine then never touches a word again; it works
//! purely on indices and table lookups.

use rustc_hash::{FxHashMap, FxHashSet};

use super::SolverError;
use crate::core::{feedback_verdicts, verdicts_string, Pattern, Word};

/// Precomputed feedback patterns for every (guess, solution) pair
#[derive(Debug)]
pub struct MatchMatrix {
    /// Flat `guess × solution` table of pattern values, immutable once built
    matches: Vec<u8>,
    /// Human-readable rendering for each pattern value that actually occurs,
    /// filled in as a side effect of computing the table
    pattern_strings: Vec<String>,
    guesses: Vec<Word>,
    solutions: Vec<Word>,
    solution_ids: FxHashMap<String, u32>,
}

impl MatchMatrix {
    /// Validate the word lists and compute the full match table
    ///
    /// # Errors
    /// - `EmptyGuesses` / `EmptySolutions` if either list is empty
    /// - `InvalidWord` if any word is not exactly five letters
    /// - `SolutionNotGuessable` if a solution is absent from the guess list
    pub fn build(valid_guesses: &[String], solutions: &[String]) -> Result<Self, SolverError> {
        if valid_guesses.is_empty() {
            return Err(SolverError::EmptyGuesses);
        }
        if solutions.is_empty() {
            return Err(SolverError::EmptySolutions);
        }

        let guesses: Vec<Word> = valid_guesses
            .iter()
            .map(|word| Word::new(word.as_str()))
            .collect::<Result<_, _>>()?;
        let solutions: Vec<Word> = solutions
            .iter()
            .map(|word| Word::new(word.as_str()))
            .collect::<Result<_, _>>()?;

        let guess_set: FxHashSet<&str> = guesses.iter().map(Word::text).collect();
        for solution in &solutions {
            if !guess_set.contains(solution.text()) {
                return Err(SolverError::SolutionNotGuessable(solution.text().to_owned()));
            }
        }

        let mut solution_ids = FxHashMap::default();
        for (index, solution) in solutions.iter().enumerate() {
            solution_ids
                .entry(solution.text().to_owned())
                .or_insert(index as u32);
        }

        let mut matches = Vec::with_capacity(guesses.len() * solutions.len());
        let mut pattern_strings = vec![String::new(); Pattern::COUNT];
        for guess in &guesses {
            for solution in &solutions {
                let verdicts = feedback_verdicts(guess, solution);
                let pattern = Pattern::from_verdicts(&verdicts);
                matches.push(pattern.value());

                // Idempotent: every (guess, solution) pair producing this
                // value renders to the same string.
                let slot = &mut pattern_strings[pattern.value() as usize];
                if slot.is_empty() {
                    *slot = verdicts_string(&verdicts);
                }
            }
        }

        Ok(Self {
            matches,
            pattern_strings,
            guesses,
            solutions,
            solution_ids,
        })
    }

    /// Look up the feedback pattern for a (guess, solution) pair
    #[inline]
    #[must_use]
    pub fn pattern(&self, guess_index: u32, solution_index: u32) -> Pattern {
        let index = guess_index as usize * self.solutions.len() + solution_index as usize;
        Pattern::new(self.matches[index])
    }

    /// The five-character rendering recorded for a pattern value
    #[must_use]
    pub fn pattern_string(&self, pattern: Pattern) -> &str {
        &self.pattern_strings[pattern.value() as usize]
    }

    #[must_use]
    pub fn guess_word(&self, guess_index: u32) -> &str {
        self.guesses[guess_index as usize].text()
    }

    #[must_use]
    pub fn solution_word(&self, solution_index: u32) -> &str {
        self.solutions[solution_index as usize].text()
    }

    /// The solution index for a word, if it is a solution
    #[must_use]
    pub fn solution_index(&self, word: &str) -> Option<u32> {
        self.solution_ids.get(word).copied()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Partition a feasible solution set by the pattern a guess produces
    ///
    /// Returns one bucket per pattern value, most of them empty. Each bucket
    /// preserves the (ascending) order of `feasible`, which keeps feasible
    /// sets canonical for memoization.
    pub(crate) fn partition_by_pattern(&self, guess_index: u32, feasible: &[u32]) -> Vec<Vec<u32>> {
        let mut buckets = vec![Vec::new(); Pattern::COUNT];
        for &solution in feasible {
            buckets[self.pattern(guess_index, solution).value() as usize].push(solution);
        }
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_owned()).collect()
    }

    #[test]
    fn build_rejects_empty_lists() {
        assert_eq!(
            MatchMatrix::build(&[], &words(&["crate"])).unwrap_err(),
            SolverError::EmptyGuesses
        );
        assert_eq!(
            MatchMatrix::build(&words(&["crate"]), &[]).unwrap_err(),
            SolverError::EmptySolutions
        );
    }

    #[test]
    fn build_rejects_invalid_word() {
        let err = MatchMatrix::build(&words(&["crate", "abcdef"]), &words(&["crate"])).unwrap_err();
        assert!(matches!(err, SolverError::InvalidWord(_)));
        let message = err.to_string();
        assert!(message.contains("abcdef"));
        assert!(message.contains('6'));
    }

    #[test]
    fn build_rejects_unguessable_solution() {
        let err = MatchMatrix::build(&words(&["crate"]), &words(&["trace"])).unwrap_err();
        assert_eq!(err, SolverError::SolutionNotGuessable("trace".to_owned()));
    }

    #[test]
    fn self_match_is_all_greens() {
        let list = words(&["crate", "trace", "brace"]);
        let matrix = MatchMatrix::build(&list, &list).unwrap();
        for index in 0..list.len() as u32 {
            assert_eq!(matrix.pattern(index, index), Pattern::ALL_GREENS);
        }
    }

    #[test]
    fn pattern_strings_match_the_pure_decode() {
        let list = words(&["crate", "trace", "speed", "erase", "allee", "later"]);
        let matrix = MatchMatrix::build(&list, &list).unwrap();
        for guess in 0..list.len() as u32 {
            for solution in 0..list.len() as u32 {
                let pattern = matrix.pattern(guess, solution);
                assert_eq!(matrix.pattern_string(pattern), pattern.render());
            }
        }
    }

    #[test]
    fn known_pattern_value() {
        let matrix = MatchMatrix::build(&words(&["crate", "trace"]), &words(&["trace"])).unwrap();
        assert_eq!(matrix.pattern(0, 0).value(), 214);
        assert_eq!(matrix.pattern_string(matrix.pattern(0, 0)), "yGGyG");
    }

    #[test]
    fn solution_index_lookup() {
        let matrix =
            MatchMatrix::build(&words(&["crate", "trace"]), &words(&["trace", "crate"])).unwrap();
        assert_eq!(matrix.solution_index("trace"), Some(0));
        assert_eq!(matrix.solution_index("crate"), Some(1));
        assert_eq!(matrix.solution_index("slate"), None);
    }

    #[test]
    fn partition_preserves_order_and_size() {
        let list = words(&["abcde", "abcdf", "abcdg", "xxxxe"]);
        let matrix = MatchMatrix::build(&list, &words(&["abcde", "abcdf", "abcdg"])).unwrap();
        let feasible = [0, 1, 2];
        let buckets = matrix.partition_by_pattern(3, &feasible);

        let total: usize = buckets.iter().map(Vec::len).sum();
        assert_eq!(total, feasible.len());
        for bucket in &buckets {
            assert!(bucket.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

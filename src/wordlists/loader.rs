//! Word list loading utilities
//!
//! Word files carry one word per line. Lines are trimmed and blank lines
//! skipped; everything else is handed to the solver untouched, so length
//! validation happens in one place with a proper error.

use std::fs;
use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;

/// Load the words from a file, preserving their order
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_tree::wordlists::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect();

    Ok(words)
}

/// Append the words of `source` that `destination` does not already contain
///
/// Used to fold the solution list into the guess list: any solution word can
/// also be played as a guess.
pub fn merge_words(destination: &mut Vec<String>, source: &[String]) {
    let mut existing: FxHashSet<String> = destination.iter().cloned().collect();

    for word in source {
        if existing.insert(word.clone()) {
            destination.push(word.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_owned()).collect()
    }

    #[test]
    fn merge_appends_missing_words() {
        let mut destination = words(&["crate", "trace"]);
        merge_words(&mut destination, &words(&["trace", "brace"]));
        assert_eq!(destination, words(&["crate", "trace", "brace"]));
    }

    #[test]
    fn merge_keeps_destination_order() {
        let mut destination = words(&["slate", "crate"]);
        merge_words(&mut destination, &words(&["crate", "slate"]));
        assert_eq!(destination, words(&["slate", "crate"]));
    }

    #[test]
    fn merge_skips_duplicates_within_source() {
        let mut destination = words(&["crate"]);
        merge_words(&mut destination, &words(&["brace", "brace"]));
        assert_eq!(destination, words(&["crate", "brace"]));
    }

    #[test]
    fn merge_into_empty_destination() {
        let mut destination = Vec::new();
        merge_words(&mut destination, &words(&["crate", "trace"]));
        assert_eq!(destination, words(&["crate", "trace"]));
    }
}

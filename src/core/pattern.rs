//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = grey (letter absent, or every occurrence already consumed)
//! - 1 = yellow (letter present elsewhere, first unconsumed occurrence)
//! - 2 = green (letter in the correct position)
//!
//! Position `i` contributes `verdict × 3^i` to the total, so the pattern for
//! a five-letter word fits in a single `u8` (0-242).

use super::word::{Word, WORD_LETTERS};

const GREY: u8 = 0;
const YELLOW: u8 = 1;
const GREEN: u8 = 2;

/// Feedback pattern for a Wordle guess, stored as a single byte value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

// The base-3 encoding must fit the backing byte.
const _: () = assert!(Pattern::COUNT <= u8::MAX as usize + 1);

impl Pattern {
    /// Number of distinct patterns (`3^WORD_LETTERS`, 243 for five letters)
    pub const COUNT: usize = 3usize.pow(WORD_LETTERS as u32);

    /// The all-greens pattern: the guess equals the solution
    pub const ALL_GREENS: Self = Self((Self::COUNT - 1) as u8);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if `value >= Pattern::COUNT`
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!((value as usize) < Self::COUNT);
        Self(value)
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether this is the all-greens pattern
    #[inline]
    #[must_use]
    pub const fn is_all_greens(self) -> bool {
        self.0 == Self::ALL_GREENS.0
    }

    /// Calculate the pattern when `guess` is played against `solution`
    ///
    /// Implements Wordle's exact feedback rules, including duplicate-letter
    /// consumption: greens claim their solution letter first, then each
    /// remaining guess letter claims at most one unconsumed occurrence for a
    /// yellow, left to right.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// // c(grey) r(grey) a(green) n(grey) e(green)
    /// // 2×9 + 2×81 = 180
    /// assert_eq!(Pattern::calculate(&guess, &answer).value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        Self::from_verdicts(&feedback_verdicts(guess, solution))
    }

    /// Pack per-position verdicts into the base-3 value
    pub(crate) fn from_verdicts(verdicts: &[u8; WORD_LETTERS]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &verdict in verdicts {
            value += verdict * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Decode the pattern back into its five-character rendering over
    /// `{'.', 'y', 'G'}`
    #[must_use]
    pub fn render(self) -> String {
        let mut result = String::with_capacity(WORD_LETTERS);
        let mut value = self.0;
        for _ in 0..WORD_LETTERS {
            result.push(verdict_char(value % 3));
            value /= 3;
        }
        result
    }
}

/// Per-position feedback for `guess` against `solution`
///
/// First pass marks greens and consumes the matched solution letters; second
/// pass awards each remaining guess letter the leftmost unconsumed occurrence
/// as a yellow. Everything else stays grey.
pub(crate) fn feedback_verdicts(guess: &Word, solution: &Word) -> [u8; WORD_LETTERS] {
    let mut verdicts = [GREY; WORD_LETTERS];
    let mut consumed = [false; WORD_LETTERS];
    let guess = guess.chars();
    let solution = solution.chars();

    for i in 0..WORD_LETTERS {
        if guess[i] == solution[i] {
            verdicts[i] = GREEN;
            consumed[i] = true;
        }
    }

    for i in 0..WORD_LETTERS {
        if verdicts[i] == GREEN {
            continue;
        }
        for j in 0..WORD_LETTERS {
            if !consumed[j] && solution[j] == guess[i] {
                verdicts[i] = YELLOW;
                consumed[j] = true;
                break;
            }
        }
    }

    verdicts
}

/// Render the string form of a verdict array
pub(crate) fn verdicts_string(verdicts: &[u8; WORD_LETTERS]) -> String {
    verdicts.iter().map(|&v| verdict_char(v)).collect()
}

fn verdict_char(verdict: u8) -> char {
    match verdict {
        GREEN => 'G',
        YELLOW => 'y',
        _ => '.',
    }
}

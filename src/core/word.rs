//! Wordle word representation
//!
//! A `Word` stores a fixed-length word as validated bytes. The engine refers
//! to words by index everywhere; `Word` exists to validate input once and to
//! hand out the byte view the feedback computation works on.

use std::fmt;

/// Number of letters in every word. A build-time constant; the whole engine
/// is sized around it.
pub const WORD_LETTERS: usize = 5;

/// A validated fixed-length word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LETTERS],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { word: String, length: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { word, length } => {
                write!(
                    f,
                    "word '{word}' is of length {length}, expected {WORD_LETTERS}"
                )
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the length is not exactly
    /// [`WORD_LETTERS`]. The message names the offending word.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Word;
    ///
    /// let word = Word::new("crate").unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("shrt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let chars: [u8; WORD_LETTERS] = match text.as_bytes().try_into() {
            Ok(chars) => chars,
            Err(_) => {
                return Err(WordError::InvalidLength {
                    length: text.len(),
                    word: text,
                })
            }
        };

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LETTERS] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

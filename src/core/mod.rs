//! Core domain types
//!
//! The fundamental vocabulary of the engine: validated words and base-3
//! feedback patterns. Everything here is pure and cheap to test.

mod pattern;
mod word;

pub use pattern::Pattern;
pub use word::{Word, WordError, WORD_LETTERS};

pub(crate) use pattern::{feedback_verdicts, verdicts_string};

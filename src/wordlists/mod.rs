//! Word list loading and merging

pub mod loader;

pub use loader::{load_from_file, merge_words};

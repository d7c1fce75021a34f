//! Decision tree output
//!
//! Rendering of solved trees into the line-per-solution dump format, plus
//! the guess count statistics printed after a full dump.

pub mod render;
pub mod stats;

pub use render::{target_line, tree_lines};
pub use stats::{print_stats, TreeStats};

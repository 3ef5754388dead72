//! # word-search: Grid Word Frequency Finder
//!
//! Ranks candidate words by how many lines of a character grid contain them.
//!
//! ## Lines
//!
//! - **Rows** are read left to right
//! - **Columns** are read top to bottom
//! - Identical rows (or identical columns) count as one line
//!
//! A word is counted once per line that contains it, however often it repeats
//! inside that line. Diagonal and reversed readings are not searched.
//!
//! ## Example Usage
//!
//! ```
//! use word_search::WordFinder;
//!
//! let finder = WordFinder::new(["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"])?;
//!
//! // Top 10 words, most frequent first, ties in ordinal order
//! let found = finder.find(["cold", "wind", "snow", "chill"]);
//! assert_eq!(found, vec!["chill", "cold", "wind"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **LineIndex** - Distinct row and column strings of the grid
//! - **WordFinder** - Grid validation, counting and ranking
//! - **Puzzle** - Embedded demo puzzle and JSON puzzle files

pub mod finder;
pub mod lines;
pub mod puzzle;
pub mod types;

// Re-export main types and functions for convenience
pub use finder::WordFinder;
pub use lines::LineIndex;
pub use puzzle::{Puzzle, PuzzleError};
pub use types::{Dimensions, FinderError, GridDefect, RankedWord, MAX_DIMENSION, MAX_RESULTS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

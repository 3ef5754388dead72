// Word Search Puzzle Data
// Embedded demo puzzle and JSON puzzle loading

use crate::finder::WordFinder;
use crate::types::FinderError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Embedded demo puzzle (JSON)
pub const DEMO_PUZZLE: &str = include_str!("../data/demo_puzzle.json");

/// Errors raised while loading a puzzle
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse puzzle: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] FinderError),
}

/// A grid together with the word stream to search for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Grid rows, top to bottom
    pub grid: Vec<String>,

    /// Candidate words, in stream order
    #[serde(default)]
    pub words: Vec<String>,
}

impl Puzzle {
    /// The embedded demo puzzle
    pub fn demo() -> Result<Self, PuzzleError> {
        Self::from_json_str(DEMO_PUZZLE)
    }

    /// Parse a puzzle from JSON text
    ///
    /// # Example
    /// ```
    /// # use word_search::Puzzle;
    /// let puzzle = Puzzle::from_json_str(r#"{"grid": ["ab", "cd"]}"#).unwrap();
    /// assert!(puzzle.words.is_empty());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a puzzle file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let puzzle = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            rows = puzzle.grid.len(),
            words = puzzle.words.len(),
            "loaded puzzle"
        );
        Ok(puzzle)
    }

    /// Build a finder over this puzzle's grid
    pub fn finder(&self) -> Result<WordFinder, PuzzleError> {
        Ok(WordFinder::new(&self.grid)?)
    }

    /// Run the puzzle's own word stream against its grid
    pub fn solve(&self) -> Result<Vec<String>, PuzzleError> {
        Ok(self.finder()?.find(&self.words))
    }
}

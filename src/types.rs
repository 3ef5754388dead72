// Word Search Type Definitions
// Core types for grid validation and ranked results

use thiserror::Error;

/// Largest accepted row or column count
pub const MAX_DIMENSION: usize = 64;

/// Number of words returned by `WordFinder::find`
pub const MAX_RESULTS: usize = 10;

/// Shape of a validated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of rows (1-64)
    pub rows: usize,

    /// Number of columns, counted in characters (1-64)
    pub columns: usize,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// A candidate word paired with the number of grid lines containing it
///
/// Only lives for the duration of a ranking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    /// The candidate word as supplied
    pub word: String,

    /// Number of distinct row and column lines containing the word
    pub count: usize,
}

impl RankedWord {
    /// Create a new ranked word
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Ranking order: higher count first, then ordinal word order
    pub fn rank_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// What is wrong with a rejected grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridDefect {
    #[error("grid has no rows")]
    Empty,

    #[error("grid rows are empty")]
    EmptyRow,

    #[error("{actual} rows exceeds maximum of {max}", max = MAX_DIMENSION)]
    TooManyRows { actual: usize },

    #[error("{actual} columns exceeds maximum of {max}", max = MAX_DIMENSION)]
    TooManyColumns { actual: usize },

    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while building a `WordFinder`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(GridDefect),
}

impl From<GridDefect> for FinderError {
    fn from(defect: GridDefect) -> Self {
        FinderError::InvalidGrid(defect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_display() {
        let dims = Dimensions {
            rows: 5,
            columns: 7,
        };
        assert_eq!(dims.to_string(), "5x7");
    }

    #[test]
    fn test_error_display() {
        let err = FinderError::from(GridDefect::TooManyRows { actual: 65 });
        assert_eq!(err.to_string(), "Invalid grid: 65 rows exceeds maximum of 64");

        let err = FinderError::from(GridDefect::RaggedRow {
            row: 2,
            expected: 5,
            actual: 4,
        });
        assert_eq!(
            err.to_string(),
            "Invalid grid: row 2 has length 4, expected 5"
        );
    }

    #[test]
    fn test_rank_cmp_orders_by_count_then_word() {
        let mut ranked = vec![
            RankedWord::new("wind", 1),
            RankedWord::new("dog", 3),
            RankedWord::new("chill", 1),
            RankedWord::new("cat", 3),
        ];
        ranked.sort_by(RankedWord::rank_cmp);

        let words: Vec<&str> = ranked.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog", "chill", "wind"]);
    }

    #[test]
    fn test_rank_cmp_is_ordinal() {
        // Uppercase sorts before lowercase in ordinal order
        let a = RankedWord::new("Zebra", 1);
        let b = RankedWord::new("apple", 1);
        assert_eq!(a.rank_cmp(&b), std::cmp::Ordering::Less);
    }
}

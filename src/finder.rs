// Word Search Finder
// Validates a grid once and ranks candidate words against its lines

use crate::lines::LineIndex;
use crate::types::{Dimensions, FinderError, GridDefect, RankedWord, MAX_DIMENSION, MAX_RESULTS};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Finds candidate words in the rows and columns of a character grid
///
/// All preprocessing happens in [`WordFinder::new`]. Queries only read the
/// line index, so one finder can serve any number of queries, from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct WordFinder {
    /// Distinct row and column lines of the grid
    lines: LineIndex,

    /// Shape of the grid the finder was built from
    dimensions: Dimensions,
}

impl WordFinder {
    /// Create a new WordFinder from grid rows
    ///
    /// # Arguments
    /// * `rows` - Grid rows, top to bottom, all with the same character count
    ///
    /// # Returns
    /// The finder, or `FinderError::InvalidGrid` when the grid is empty,
    /// larger than 64x64, or not rectangular
    ///
    /// # Example
    /// ```
    /// # use word_search::WordFinder;
    /// let finder = WordFinder::new(["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"]).unwrap();
    /// assert_eq!(finder.dimensions().rows, 5);
    /// ```
    pub fn new<I, S>(rows: I) -> Result<Self, FinderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<S> = rows.into_iter().collect();
        let dimensions = validate_grid(&rows)?;
        let lines = LineIndex::from_rows(&rows, dimensions.columns);

        debug!(
            %dimensions,
            row_lines = lines.row_lines().len(),
            column_lines = lines.column_lines().len(),
            "built word finder"
        );

        Ok(Self { lines, dimensions })
    }

    /// Find the top 10 candidate words by number of lines containing them
    ///
    /// Empty candidates are ignored, repeated candidates are evaluated once,
    /// and words found in no line are dropped. Ties are broken by ordinal
    /// word order. An empty stream yields an empty result.
    ///
    /// # Example
    /// ```
    /// # use word_search::WordFinder;
    /// let finder = WordFinder::new(["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"]).unwrap();
    /// let found = finder.find(["cold", "wind", "snow", "chill"]);
    /// assert_eq!(found, vec!["chill", "cold", "wind"]);
    /// ```
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.find_limit(words, MAX_RESULTS)
    }

    /// Same as [`WordFinder::find`] with a caller-chosen result cap
    pub fn find_limit<I, S>(&self, words: I, limit: usize) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranked = self.rank(words);
        ranked.truncate(limit);
        ranked.into_iter().map(|r| r.word).collect()
    }

    /// Rank every matching candidate, keeping the line counts
    ///
    /// # Returns
    /// All distinct, non-empty candidates with a count above zero, sorted
    /// by count descending then word ascending
    pub fn rank<I, S>(&self, words: I) -> Vec<RankedWord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut ranked = Vec::new();
        let mut candidates = 0usize;

        for word in words {
            let word = word.as_ref();
            candidates += 1;

            if word.is_empty() || seen.contains(word) {
                continue;
            }
            seen.insert(word.to_string());

            let count = self.lines.count_containing(word);
            if count > 0 {
                ranked.push(RankedWord::new(word, count));
            }
        }

        // Words are distinct here, so an unstable sort is deterministic
        ranked.sort_unstable_by(RankedWord::rank_cmp);

        trace!(
            candidates,
            distinct = seen.len(),
            matched = ranked.len(),
            "ranked candidates"
        );

        ranked
    }

    /// Number of lines containing `word` (0 for the empty string)
    pub fn count(&self, word: &str) -> usize {
        if word.is_empty() {
            return 0;
        }
        self.lines.count_containing(word)
    }

    /// Shape of the grid
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Distinct row and column lines
    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }
}

/// Check grid shape and return its dimensions
fn validate_grid<S: AsRef<str>>(rows: &[S]) -> Result<Dimensions, GridDefect> {
    let first = rows.first().ok_or(GridDefect::Empty)?;
    let columns = first.as_ref().chars().count();

    if rows.len() > MAX_DIMENSION {
        return Err(GridDefect::TooManyRows { actual: rows.len() });
    }
    if columns > MAX_DIMENSION {
        return Err(GridDefect::TooManyColumns { actual: columns });
    }
    if columns == 0 {
        return Err(GridDefect::EmptyRow);
    }

    for (row, line) in rows.iter().enumerate() {
        let actual = line.as_ref().chars().count();
        if actual != columns {
            return Err(GridDefect::RaggedRow {
                row,
                expected: columns,
                actual,
            });
        }
    }

    Ok(Dimensions {
        rows: rows.len(),
        columns,
    })
}

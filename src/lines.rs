// Word Search Line Index
// Holds the distinct row and column strings of a grid

use rustc_hash::FxHashSet;

/// Distinct row lines and column lines derived from a grid
///
/// Rows are stored as given (left to right) and columns are read top to
/// bottom. Each set collapses duplicates, but a string present in both sets
/// is kept in both.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Distinct rows, read left to right
    row_lines: FxHashSet<String>,

    /// Distinct columns, read top to bottom
    column_lines: FxHashSet<String>,
}

impl LineIndex {
    /// Build the index from rows that are already known to be rectangular
    ///
    /// # Arguments
    /// * `rows` - Grid rows in top-to-bottom order
    /// * `columns` - Character count shared by every row
    ///
    /// # Example
    /// ```
    /// # use word_search::lines::LineIndex;
    /// let index = LineIndex::from_rows(&["ab", "cd"], 2);
    /// assert!(index.column_lines().contains("ac"));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S], columns: usize) -> Self {
        let row_lines: FxHashSet<String> = rows.iter().map(|r| r.as_ref().to_string()).collect();

        // Walk every row's chars in lockstep, one column string per index
        let mut column_builders: Vec<String> =
            (0..columns).map(|_| String::with_capacity(rows.len())).collect();
        for row in rows {
            for (column, ch) in column_builders.iter_mut().zip(row.as_ref().chars()) {
                column.push(ch);
            }
        }
        let column_lines: FxHashSet<String> = column_builders.into_iter().collect();

        Self {
            row_lines,
            column_lines,
        }
    }

    /// Number of lines (row set plus column set) containing `word`
    ///
    /// A line counts once no matter how often the word repeats inside it.
    pub fn count_containing(&self, word: &str) -> usize {
        let rows = self.row_lines.iter().filter(|l| l.contains(word)).count();
        let columns = self.column_lines.iter().filter(|l| l.contains(word)).count();
        rows + columns
    }

    /// Distinct row lines
    pub fn row_lines(&self) -> &FxHashSet<String> {
        &self.row_lines
    }

    /// Distinct column lines
    pub fn column_lines(&self) -> &FxHashSet<String> {
        &self.column_lines
    }

    /// Total distinct lines across both sets
    pub fn len(&self) -> usize {
        self.row_lines.len() + self.column_lines.len()
    }

    /// True when no lines were indexed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

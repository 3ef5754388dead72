// Integration tests for WordFinder construction and grid validation

use word_search::{Dimensions, FinderError, GridDefect, WordFinder, MAX_DIMENSION};

// ============ Valid Grids ============

#[test]
fn test_single_cell_grid() {
    let finder = WordFinder::new(["x"]).unwrap();
    assert_eq!(finder.dimensions(), Dimensions { rows: 1, columns: 1 });

    // The single row and the single column are both "x"
    assert_eq!(finder.count("x"), 2);
}

#[test]
fn test_maximum_grid_accepted() {
    let grid = vec!["a".repeat(MAX_DIMENSION); MAX_DIMENSION];
    let finder = WordFinder::new(&grid).unwrap();

    assert_eq!(finder.dimensions().rows, 64);
    assert_eq!(finder.dimensions().columns, 64);
    // All rows identical, all columns identical
    assert_eq!(finder.lines().len(), 2);
}

#[test]
fn test_owned_and_borrowed_rows() {
    let owned: Vec<String> = vec!["ab".to_string(), "cd".to_string()];
    let from_owned = WordFinder::new(owned.clone()).unwrap();
    let from_borrowed = WordFinder::new(&owned).unwrap();

    assert_eq!(from_owned.dimensions(), from_borrowed.dimensions());
    assert_eq!(from_owned.find(["ac"]), from_borrowed.find(["ac"]));
}

#[test]
fn test_wide_and_tall_grids() {
    let wide = WordFinder::new(["abcdef"]).unwrap();
    assert_eq!(wide.dimensions(), Dimensions { rows: 1, columns: 6 });
    assert_eq!(wide.lines().column_lines().len(), 6);

    let tall = WordFinder::new(["a", "b", "c"]).unwrap();
    assert_eq!(tall.dimensions(), Dimensions { rows: 3, columns: 1 });
    assert_eq!(tall.find(["abc", "bc"]), vec!["abc", "bc"]);
}

// ============ Invalid Grids ============

#[test]
fn test_empty_grid_rejected() {
    let result = WordFinder::new(Vec::<String>::new());
    assert_eq!(
        result.unwrap_err(),
        FinderError::InvalidGrid(GridDefect::Empty)
    );

    let result = WordFinder::new(None::<&str>);
    assert!(matches!(
        result,
        Err(FinderError::InvalidGrid(GridDefect::Empty))
    ));
}

#[test]
fn test_too_many_rows_rejected() {
    let grid = vec!["abc"; 65];
    let result = WordFinder::new(grid);
    assert!(matches!(
        result,
        Err(FinderError::InvalidGrid(GridDefect::TooManyRows { actual: 65 }))
    ));
}

#[test]
fn test_too_many_columns_rejected() {
    let grid = vec!["a".repeat(65); 3];
    let result = WordFinder::new(&grid);
    assert!(matches!(
        result,
        Err(FinderError::InvalidGrid(GridDefect::TooManyColumns { actual: 65 }))
    ));
}

#[test]
fn test_ragged_rows_rejected() {
    let result = WordFinder::new(["abcd", "abcd", "abc", "abcd"]);
    assert!(matches!(
        result,
        Err(FinderError::InvalidGrid(GridDefect::RaggedRow {
            row: 2,
            expected: 4,
            actual: 3
        }))
    ));

    // Longer rows are rejected too
    let result = WordFinder::new(["ab", "abc"]);
    assert!(result.is_err());
}

#[test]
fn test_empty_rows_rejected() {
    let result = WordFinder::new(["", "", ""]);
    assert!(matches!(
        result,
        Err(FinderError::InvalidGrid(GridDefect::EmptyRow))
    ));
}

#[test]
fn test_error_message() {
    let err = WordFinder::new(["ab", "c"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid grid: row 1 has length 1, expected 2");
}

//! Row-bumping insertion
//!
//! This module implements TAOCP Algorithm 5.1.4.I, inserting a value into
//! a tableau stored as a list of ascending rows.

/// Position of a box in a tableau (zero-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub column: usize,
}

impl Cell {
    /// Create a new cell
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Insert `x` into the tableau rows in place
///
/// Each row is scanned right to left for the leftmost element strictly
/// greater than the incoming value. That element is bumped into the next
/// row; the cascade stops when a value can be appended to the end of a row,
/// or a new single-element row is added below the last one.
///
/// The scan start is capped by the column of the previous bump (the search
/// ceiling), so the bump column never increases from one row to the next.
///
/// Rows are trusted to be sorted and column-ordered. Malformed rows never
/// cause a panic but the result is then not a tableau.
///
/// # Returns
/// The cell of the box created by this insertion
pub fn insert_into_rows<T: Ord>(rows: &mut Vec<Vec<T>>, mut x: T) -> Cell {
    // None until the first bump
    let mut ceiling: Option<usize> = None;

    for (i, row) in rows.iter_mut().enumerate() {
        let mut j = ceiling.map_or(row.len(), |c| c.min(row.len()));

        while j > 0 && row[j - 1] > x {
            j -= 1;
        }

        if j < row.len() {
            x = std::mem::replace(&mut row[j], x);
            ceiling = Some(j);
        } else {
            row.push(x);
            return Cell::new(i, j);
        }
    }

    rows.push(vec![x]);
    Cell::new(rows.len() - 1, 0)
}

/// Insert `x` into the tableau and return the updated tableau
///
/// By-value form of [`insert_into_rows`]. The input is consumed and the
/// returned rows are the authoritative result.
pub fn insert_into_tableau<T: Ord>(mut rows: Vec<Vec<T>>, x: T) -> Vec<Vec<T>> {
    insert_into_rows(&mut rows, x);
    rows
}

//! Tableau value type
//!
//! This module provides an owned tableau wrapping the raw rows used by
//! the insertion routine.

use crate::domain::insertion::{Cell, insert_into_rows};
use std::fmt;

/// Tableau of ascending rows
///
/// Rows are stored top to bottom. Row lengths weakly decrease and columns
/// strictly increase as long as the tableau is only grown through
/// [`Tableau::insert`]. Rows supplied through [`Tableau::from_rows`] are
/// taken as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tableau<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Tableau<T> {
    /// Create an empty tableau (zero rows)
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Wrap existing rows without checking them
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Get the rows, top to bottom
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&[T]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get the entry at a cell
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.rows.get(cell.row)?.get(cell.column)
    }

    /// Consume the tableau and return its rows
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Check if the tableau has no entries
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row lengths, top to bottom
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }
}

impl<T: Ord> Tableau<T> {
    /// Insert a value by row bumping
    ///
    /// Returns the cell of the box this insertion created.
    pub fn insert(&mut self, x: T) -> Cell {
        insert_into_rows(&mut self.rows, x)
    }
}

impl<T> Default for Tableau<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Vec<T>>> for Tableau<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T> From<Tableau<T>> for Vec<Vec<T>> {
    fn from(tableau: Tableau<T>) -> Self {
        tableau.rows
    }
}

impl<T: Ord> Extend<T> for Tableau<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tableau<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tableau = Self::new();
        tableau.extend(iter);
        tableau
    }
}

/// One line per row, entries separated by a single space
impl<T: fmt::Display> fmt::Display for Tableau<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", x)?;
            }
        }
        Ok(())
    }
}

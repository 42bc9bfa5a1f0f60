//! Robinson-Schensted-Knuth correspondence
//!
//! This module pairs the insertion tableau P with a recording tableau Q
//! that remembers when each box of P was created.

use crate::domain::insertion::insert_into_rows;
use crate::domain::tableau::Tableau;
use thiserror::Error;

/// Insertion tableau and recording tableau of the same shape
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RskPair<P, Q> {
    /// Tableau built by inserting the values
    pub insertion: Tableau<P>,
    /// Tableau holding, at each box, the label of the step that created it
    pub recording: Tableau<Q>,
}

impl<P, Q> RskPair<P, Q> {
    /// Shape shared by both tableaux
    pub fn shape(&self) -> Vec<usize> {
        self.insertion.shape()
    }
}

/// Errors raised while building an RSK pair from a two-line array
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RskError {
    /// Pair at `index` sorts before its predecessor
    #[error("two-line array is not in lexicographic order at column {index}")]
    OutOfOrder { index: usize },
}

/// Robinson-Schensted correspondence of a sequence
///
/// Inserts the values in order into P and records the 1-based position of
/// each value in Q, at the box its insertion created.
pub fn robinson_schensted<T, I>(values: I) -> RskPair<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut p: Vec<Vec<T>> = Vec::new();
    let mut q: Vec<Vec<usize>> = Vec::new();

    for (index, x) in values.into_iter().enumerate() {
        let cell = insert_into_rows(&mut p, x);
        record(&mut q, cell.row, index + 1);
    }

    RskPair {
        insertion: Tableau::from_rows(p),
        recording: Tableau::from_rows(q),
    }
}

/// Robinson-Schensted-Knuth correspondence of a two-line array
///
/// The array is given as `(top, bottom)` pairs which must be in
/// non-decreasing lexicographic order. Bottom entries are inserted into P,
/// top entries are recorded in Q. Repeated pairs are allowed.
///
/// # Errors
/// [`RskError::OutOfOrder`] with the index of the first pair that sorts
/// before its predecessor.
pub fn rsk_two_line<U, T, I>(pairs: I) -> Result<RskPair<T, U>, RskError>
where
    U: Ord + Clone,
    T: Ord + Clone,
    I: IntoIterator<Item = (U, T)>,
{
    let mut p: Vec<Vec<T>> = Vec::new();
    let mut q: Vec<Vec<U>> = Vec::new();
    let mut previous: Option<(U, T)> = None;

    for (index, (top, bottom)) in pairs.into_iter().enumerate() {
        let out_of_order = previous
            .as_ref()
            .is_some_and(|(prev_top, prev_bottom)| (prev_top, prev_bottom) > (&top, &bottom));
        if out_of_order {
            return Err(RskError::OutOfOrder { index });
        }
        previous = Some((top.clone(), bottom.clone()));

        let cell = insert_into_rows(&mut p, bottom);
        record(&mut q, cell.row, top);
    }

    Ok(RskPair {
        insertion: Tableau::from_rows(p),
        recording: Tableau::from_rows(q),
    })
}

/// Append a label to the end of a recording row, opening the row if needed
///
/// Insertion only ever grows P at the end of an existing row or by one new
/// row, so the recording tableau follows with a push.
fn record<U>(q: &mut Vec<Vec<U>>, row: usize, label: U) {
    if row == q.len() {
        q.push(vec![label]);
    } else {
        q[row].push(label);
    }
}

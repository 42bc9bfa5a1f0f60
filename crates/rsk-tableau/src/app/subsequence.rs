//! Longest monotone subsequences
//!
//! Schensted's theorem: after inserting a sequence, the first row length
//! is the longest weakly increasing subsequence and the row count is the
//! longest strictly decreasing subsequence.

use crate::domain::tableau::Tableau;
use rayon::prelude::*;

/// Length of the longest weakly increasing subsequence
pub fn longest_increasing_len<T: Ord + Clone>(values: &[T]) -> usize {
    let tableau: Tableau<T> = values.iter().cloned().collect();
    tableau.row(0).map_or(0, <[T]>::len)
}

/// Length of the longest strictly decreasing subsequence
pub fn longest_decreasing_len<T: Ord + Clone>(values: &[T]) -> usize {
    let tableau: Tableau<T> = values.iter().cloned().collect();
    tableau.row_count()
}

/// Longest weakly increasing subsequence length of each sequence
///
/// Sequences are processed in parallel with rayon; output order matches
/// input order.
pub fn longest_increasing_lens_parallel<T>(sequences: &[Vec<T>]) -> Vec<usize>
where
    T: Ord + Clone + Send + Sync,
{
    sequences
        .par_iter()
        .map(|values| longest_increasing_len(values))
        .collect()
}

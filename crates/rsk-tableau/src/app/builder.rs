//! Tableau building workflow
//!
//! This module provides functions for building tableaux from whole
//! sequences, one at a time or many in parallel.

use crate::constants::PROGRESS_INTERVAL;
use crate::domain::tableau::Tableau;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Options for tableau building
#[derive(Clone)]
pub struct BuildOptions<F = fn(usize, usize)> {
    /// Progress callback (current, total)
    pub on_progress: Option<F>,
}

impl Default for BuildOptions<fn(usize, usize)> {
    fn default() -> Self {
        Self { on_progress: None }
    }
}

impl<F> BuildOptions<F> {
    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> BuildOptions<G> {
        BuildOptions {
            on_progress: Some(callback),
        }
    }
}

/// Build a tableau by inserting the values in order
///
/// The progress callback receives the number of values inserted so far
/// every `PROGRESS_INTERVAL` values, and once more on completion.
pub fn build_tableau<T, F>(values: &[T], options: BuildOptions<F>) -> Tableau<T>
where
    T: Ord + Clone,
    F: FnMut(usize, usize),
{
    let BuildOptions { mut on_progress } = options;
    let total = values.len();
    let mut tableau = Tableau::new();

    for (index, x) in values.iter().enumerate() {
        if index % PROGRESS_INTERVAL == 0 {
            if let Some(callback) = on_progress.as_mut() {
                callback(index, total);
            }
        }
        tableau.insert(x.clone());
    }

    if let Some(callback) = on_progress.as_mut() {
        callback(total, total);
    }
    tableau
}

/// Build one tableau per sequence in parallel
///
/// Uses rayon across sequences; each sequence is inserted sequentially.
/// Output order matches input order. The progress callback counts
/// completed sequences and may be invoked from any worker thread.
pub fn build_tableaux_parallel<T, F>(
    sequences: &[Vec<T>],
    options: BuildOptions<F>,
) -> Vec<Tableau<T>>
where
    T: Ord + Clone + Send + Sync,
    F: Fn(usize, usize) + Sync,
{
    let BuildOptions { on_progress } = options;
    let total = sequences.len();
    let progress = AtomicUsize::new(0);

    let tableaux = sequences
        .par_iter()
        .map(|values| {
            let tableau: Tableau<T> = values.iter().cloned().collect();

            if let Some(ref callback) = on_progress {
                let count = progress.fetch_add(1, Ordering::Relaxed);
                if count % PROGRESS_INTERVAL == 0 {
                    callback(count, total);
                }
            }
            tableau
        })
        .collect();

    if let Some(ref callback) = on_progress {
        callback(total, total);
    }
    tableaux
}

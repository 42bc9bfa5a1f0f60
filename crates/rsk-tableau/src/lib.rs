//! rsk-tableau - Row-bumping tableau insertion
//!
//! This crate provides functionality to:
//! - Insert values into a tableau by row bumping (TAOCP Algorithm 5.1.4.I)
//! - Build insertion/recording tableau pairs (Robinson-Schensted-Knuth)
//! - Measure longest monotone subsequences from the tableau shape

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use app::builder::{BuildOptions, build_tableau, build_tableaux_parallel};
pub use app::subsequence::{longest_decreasing_len, longest_increasing_len};
pub use domain::insertion::{Cell, insert_into_rows, insert_into_tableau};
pub use domain::rsk::{RskError, RskPair, robinson_schensted, rsk_two_line};
pub use domain::tableau::Tableau;

//! Crate-wide constants

/// Number of processed items between two progress callbacks
///
/// Applies to values in sequential builds and to sequences in parallel builds.
pub const PROGRESS_INTERVAL: usize = 10_000;

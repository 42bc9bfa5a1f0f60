//! Application layer - Use case implementations
//!
//! This module drives the domain algorithms over whole sequences.

pub mod builder;
pub mod subsequence;

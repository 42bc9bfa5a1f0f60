//! Domain layer - Pure computational logic
//!
//! This module contains the tableau algorithms without any I/O.

pub mod insertion;
pub mod rsk;
pub mod tableau;

//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use knight_distance::board::prelude::*;
//! ```

pub use super::{distance, distance_naive, Square};

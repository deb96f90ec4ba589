//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Known distances, fast paths, and edge cases
//! - `proptest.rs` - Property-based tests

//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Perft counts for move generation
//! - `edge_cases.rs` - Special positions and rule scenarios
//! - `proptest.rs` - Property-based tests on random positions

mod edge_cases;
mod perft;

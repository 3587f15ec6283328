//! Position module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts against published values
//! - `edge_cases.rs` - Special positions and rules corner cases
//! - `notation.rs` - SAN output over longer games
//! - `proptest.rs` - Property-based tests over random games

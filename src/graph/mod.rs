//! Rook-jump adjacency.
//!
//! Turns a [`crate::grid::Grid`] into a directed graph over
//! [`crate::grid::CellLabel`]s. An edge `a → b` exists when a piece on `a`
//! can jump to `b` in one move. The graph is rebuilt from scratch for every
//! evaluation and never mutated afterwards.

mod adjacency;

pub use adjacency::{build_graph, AdjacencyGraph, Direction};

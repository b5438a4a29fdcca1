//! Path search over a jump graph.
//!
//! Two independent traversals of an [`crate::graph::AdjacencyGraph`]:
//!
//! - **Breadth-first** ([`shortest_path`]): a FIFO frontier of partial paths
//!   returning the first path that reaches the goal. Every jump costs one
//!   move, so this is a shortest path.
//! - **Depth-first** ([`label_depths`]): visits every reachable cell once and
//!   records the hop count at which it was first discovered. Discovery depth
//!   follows one path through the graph and is not necessarily minimal.

mod bfs;
mod dfs;

pub use bfs::{shortest_path, PathOutcome};
pub use dfs::{label_depths, MoveDepthTable};

//! Breadth-first shortest path.

use crate::graph::AdjacencyGraph;
use crate::grid::CellLabel;
use std::collections::{HashSet, VecDeque};

/// Result of a breadth-first path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Labels from start to goal inclusive.
    Found(Vec<CellLabel>),
    /// Start and goal are the same cell; there is no path segment.
    Degenerate,
    /// The frontier emptied first. Holds the expanded labels in expansion order.
    NotFound {
        /// Labels whose successors were expanded.
        explored: Vec<CellLabel>,
    },
}

impl PathOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[CellLabel]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Number of jumps along the found path.
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// Finds a shortest jump path from `start` to `goal`.
///
/// The frontier holds whole partial paths. The oldest one is taken, and if
/// its last label has not been expanded yet and has successors, each
/// successor extends a copy of it. A path is returned as soon as an extension
/// ends on `goal`.
///
/// # Examples
///
/// ```
/// use rook_maze::graph::build_graph;
/// use rook_maze::grid::Grid;
/// use rook_maze::search::shortest_path;
///
/// let grid = Grid::uniform(5, 1).unwrap();
/// let graph = build_graph(&grid);
/// let outcome = shortest_path(&graph, grid.start_label(), grid.goal_label());
/// assert_eq!(outcome.moves(), Some(8));
/// ```
pub fn shortest_path(graph: &AdjacencyGraph, start: CellLabel, goal: CellLabel) -> PathOutcome {
    if start == goal {
        return PathOutcome::Degenerate;
    }

    let mut explored_set: HashSet<CellLabel> = HashSet::new();
    let mut explored = Vec::new();
    let mut frontier: VecDeque<Vec<CellLabel>> = VecDeque::new();
    frontier.push_back(vec![start]);

    while let Some(path) = frontier.pop_front() {
        let node = *path.last().expect("frontier paths are never empty");
        if explored_set.contains(&node) || !graph.has_successors(node) {
            continue;
        }

        for &next in graph.neighbors(node) {
            let mut extended = path.clone();
            extended.push(next);
            if next == goal {
                return PathOutcome::Found(extended);
            }
            frontier.push_back(extended);
        }

        explored_set.insert(node);
        explored.push(node);
    }

    PathOutcome::NotFound { explored }
}

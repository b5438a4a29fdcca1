//! Depth-first discovery-depth labeling.

use crate::graph::AdjacencyGraph;
use crate::grid::{CellLabel, Position};
use std::collections::HashSet;
use std::fmt;

/// Placeholder printed for cells the traversal never reached.
const UNVISITED: &str = "--";

/// Discovery depth of every cell of an n×n board, measured from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDepthTable {
    size: usize,
    /// Row-major depths, `None` = unvisited.
    depths: Vec<Option<usize>>,
    /// Labels in the order they were discovered.
    order: Vec<CellLabel>,
}

impl MoveDepthTable {
    /// A table with every cell unvisited.
    pub fn unvisited(size: usize) -> Self {
        Self {
            size,
            depths: vec![None; size * size],
            order: Vec::new(),
        }
    }

    /// Whether `pos` lies on this table's board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn record(&mut self, label: CellLabel, depth: usize) {
        let pos = label.position();
        self.depths[pos.row * self.size + pos.col] = Some(depth);
        self.order.push(label);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Discovery depth at `pos`, `None` if unvisited or off the board.
    pub fn depth(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        self.depths[pos.row * self.size + pos.col]
    }

    /// Discovery depth of the goal cell, the score the optimizer reads.
    pub fn goal_depth(&self) -> Option<usize> {
        self.depth(Position::goal(self.size))
    }

    /// Labels in discovery order.
    pub fn discovery_order(&self) -> &[CellLabel] {
        &self.order
    }

    /// Number of cells with a recorded depth.
    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// Depths grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        self.depths.chunks(self.size)
    }
}

impl fmt::Display for MoveDepthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|d| d.map_or_else(|| UNVISITED.to_string(), |d| d.to_string()))
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Labels every cell reachable from `start` with its discovery depth.
///
/// Uses an explicit `(label, depth)` stack. Successors are pushed in reverse
/// so they are popped in adjacency order (right, left, down, up), which
/// reproduces the visiting order of a recursive traversal. Each label is
/// recorded once, the first time it is popped; cells with no successors
/// (such as the goal) are still recorded. Labels outside the graph's board
/// are neither recorded nor expanded.
///
/// # Examples
///
/// ```
/// use rook_maze::graph::build_graph;
/// use rook_maze::grid::Grid;
/// use rook_maze::search::label_depths;
///
/// let grid = Grid::uniform(5, 4).unwrap();
/// let table = label_depths(&build_graph(&grid), grid.start_label());
/// assert_eq!(table.goal_depth(), Some(2));
/// ```
pub fn label_depths(graph: &AdjacencyGraph, start: CellLabel) -> MoveDepthTable {
    let mut table = MoveDepthTable::unvisited(graph.size());
    let mut visited: HashSet<CellLabel> = HashSet::new();
    let mut stack = vec![(start, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if !table.contains(node.position()) || !visited.insert(node) {
            continue;
        }
        table.record(node, depth);

        for &next in graph.neighbors(node).iter().rev() {
            if !visited.contains(&next) {
                stack.push((next, depth + 1));
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::grid::Grid;
    use crate::search::shortest_path;

    fn label(s: &str) -> CellLabel {
        s.parse().unwrap()
    }

    #[test]
    fn test_all_ones_snakes_through_board() {
        let grid = Grid::uniform(5, 1).unwrap();
        let table = label_depths(&build_graph(&grid), grid.start_label());
        let expected = "0 1 2 3 4\n\
                        9 8 7 6 5\n\
                        10 11 12 13 14\n\
                        19 18 17 16 15\n\
                        20 21 22 23 24";
        assert_eq!(table.to_string(), expected);
        assert_eq!(table.goal_depth(), Some(24));
        assert_eq!(table.visited_count(), 25);
    }

    #[test]
    fn test_discovery_depth_not_below_shortest() {
        let grid = Grid::uniform(5, 1).unwrap();
        let graph = build_graph(&grid);
        let table = label_depths(&graph, grid.start_label());
        let bfs = shortest_path(&graph, grid.start_label(), grid.goal_label());
        assert!(table.goal_depth().unwrap() >= bfs.moves().unwrap());
    }

    #[test]
    fn test_unreached_cells_stay_unvisited() {
        let grid = Grid::uniform(5, 4).unwrap();
        let table = label_depths(&build_graph(&grid), grid.start_label());
        assert_eq!(table.depth(Position::new(0, 0)), Some(0));
        assert_eq!(table.depth(Position::new(0, 4)), Some(1));
        assert_eq!(table.depth(Position::new(4, 4)), Some(2));
        assert_eq!(table.depth(Position::new(4, 0)), Some(1));
        assert_eq!(table.depth(Position::new(2, 2)), None);
        assert_eq!(table.visited_count(), 4);
        assert!(table.to_string().starts_with("0 -- -- -- 1\n"));
    }

    #[test]
    fn test_recursive_visiting_order() {
        // B0 -> [B1, C0], B1 -> [C0, B2], C0 -> [B2]
        let mut graph = AdjacencyGraph::new(5);
        graph.add_edge(label("B0"), label("B1"));
        graph.add_edge(label("B0"), label("C0"));
        graph.add_edge(label("B1"), label("C0"));
        graph.add_edge(label("B1"), label("B2"));
        graph.add_edge(label("C0"), label("B2"));
        let table = label_depths(&graph, label("B0"));
        assert_eq!(
            table.discovery_order(),
            [label("B0"), label("B1"), label("C0"), label("B2")]
        );
        // C0 is discovered through B1, B2 through C0.
        assert_eq!(table.depth(Position::new(1, 0)), Some(2));
        assert_eq!(table.depth(Position::new(0, 2)), Some(3));
    }

    #[test]
    fn test_each_label_recorded_once() {
        let grid = Grid::uniform(6, 1).unwrap();
        let table = label_depths(&build_graph(&grid), grid.start_label());
        let unique: HashSet<_> = table.discovery_order().iter().collect();
        assert_eq!(unique.len(), table.discovery_order().len());
    }

    #[test]
    fn test_labeling_is_idempotent() {
        let grid = Grid::from_rows(vec![
            vec![2, 3, 1, 2, 4],
            vec![1, 2, 2, 3, 1],
            vec![3, 1, 2, 1, 2],
            vec![2, 2, 1, 3, 1],
            vec![1, 4, 2, 1, 0],
        ])
        .unwrap();
        let graph = build_graph(&grid);
        let a = label_depths(&graph, grid.start_label());
        let b = label_depths(&graph, grid.start_label());
        assert_eq!(a, b);
    }

    #[test]
    fn test_off_board_labels_are_skipped() {
        let mut graph = AdjacencyGraph::new(5);
        graph.add_edge(label("B0"), label("K9"));
        graph.add_edge(label("B0"), label("B1"));
        let table = label_depths(&graph, label("B0"));
        assert_eq!(table.discovery_order(), [label("B0"), label("B1")]);
        assert_eq!(table.depth(Position::new(9, 9)), None);
    }

    #[test]
    fn test_off_board_start_leaves_table_unvisited() {
        let graph = build_graph(&Grid::uniform(5, 1).unwrap());
        let table = label_depths(&graph, label("K9"));
        assert_eq!(table.visited_count(), 0);
        assert_eq!(table.goal_depth(), None);
    }
}

//! Adjacency construction from jump weights.

use crate::grid::{CellLabel, Grid, Position};
use std::collections::BTreeMap;

/// The four jump directions, in the order edges are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Generation order of a cell's successors.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Number of cells between `pos` and the board edge in this direction.
    pub fn available(self, pos: Position, n: usize) -> usize {
        match self {
            Direction::Right => n - 1 - pos.col,
            Direction::Left => pos.col,
            Direction::Down => n - 1 - pos.row,
            Direction::Up => pos.row,
        }
    }

    /// Whether a jump of `weight` is legal from `pos`.
    ///
    /// A zero-length direction never admits a move, and a weight of 0
    /// never moves anywhere.
    pub fn is_legal(self, pos: Position, weight: usize, n: usize) -> bool {
        let available = self.available(pos, n);
        weight > 0 && available > 0 && weight <= available
    }

    /// Landing cell of a legal jump of `weight` from `pos`.
    ///
    /// Upward jumps land on row `weight - row`, an offset from the top edge
    /// rather than from `pos`. Legal up moves have `weight <= row`, so only
    /// `weight == row` lands on the board (on row 0); a negative row is off
    /// the board and yields `None`.
    ///
    /// The far board edge is not checked here; pair with [`is_legal`](Self::is_legal).
    /// A left jump past column 0 yields `None`.
    pub fn destination(self, pos: Position, weight: usize) -> Option<Position> {
        match self {
            Direction::Right => Some(Position::new(pos.row, pos.col + weight)),
            Direction::Left => pos
                .col
                .checked_sub(weight)
                .map(|col| Position::new(pos.row, col)),
            Direction::Down => Some(Position::new(pos.row + weight, pos.col)),
            Direction::Up => weight
                .checked_sub(pos.row)
                .map(|row| Position::new(row, pos.col)),
        }
    }
}

/// Directed jump graph of one grid.
///
/// Successor lists keep generation order (right, left, down, up) and may
/// hold duplicates. Cells without a legal move have no entry; querying
/// them yields no neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    size: usize,
    edges: BTreeMap<CellLabel, Vec<CellLabel>>,
}

impl AdjacencyGraph {
    /// An empty graph over an `n`×`n` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            edges: BTreeMap::new(),
        }
    }

    /// Appends the edge `from → to`. Duplicates are kept.
    pub fn add_edge(&mut self, from: CellLabel, to: CellLabel) {
        self.edges.entry(from).or_default().push(to);
    }

    /// Side length of the board the graph was built from.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Successors of `label`, empty when it has no outgoing edges.
    pub fn neighbors(&self, label: CellLabel) -> &[CellLabel] {
        self.edges.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `label` has at least one outgoing edge.
    pub fn has_successors(&self, label: CellLabel) -> bool {
        self.edges.contains_key(&label)
    }

    /// Number of cells with outgoing edges.
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterates over `(source, successors)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (CellLabel, &[CellLabel])> {
        self.edges.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

/// Builds the rook-jump graph of `grid`.
///
/// # Examples
///
/// ```
/// use rook_maze::graph::build_graph;
/// use rook_maze::grid::Grid;
///
/// let grid = Grid::uniform(5, 1).unwrap();
/// let graph = build_graph(&grid);
/// let succ: Vec<String> = graph
///     .neighbors(grid.start_label())
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(succ, ["B1", "C0"]);
/// ```
pub fn build_graph(grid: &Grid) -> AdjacencyGraph {
    let n = grid.size();
    let mut graph = AdjacencyGraph::new(n);
    for (pos, weight) in grid.cells() {
        let from = CellLabel::from_position(pos);
        for dir in Direction::ALL {
            if !dir.is_legal(pos, weight, n) {
                continue;
            }
            if let Some(dest) = dir.destination(pos, weight) {
                graph.add_edge(from, CellLabel::from_position(dest));
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(graph: &AdjacencyGraph, s: &str) -> Vec<String> {
        graph
            .neighbors(s.parse().unwrap())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_available_counts() {
        let pos = Position::new(1, 3);
        assert_eq!(Direction::Right.available(pos, 5), 1);
        assert_eq!(Direction::Left.available(pos, 5), 3);
        assert_eq!(Direction::Down.available(pos, 5), 3);
        assert_eq!(Direction::Up.available(pos, 5), 1);
    }

    #[test]
    fn test_goal_has_no_edges() {
        let grid = Grid::uniform(5, 2).unwrap();
        let graph = build_graph(&grid);
        assert!(!graph.has_successors(grid.goal_label()));
        assert!(graph.neighbors(grid.goal_label()).is_empty());
    }

    #[test]
    fn test_edge_order_right_left_down_up() {
        // Centre of a 5x5 board with weight 2 can move in all four directions.
        let grid = Grid::uniform(5, 2).unwrap();
        let graph = build_graph(&grid);
        // D2 = (2, 2): right (2,4), left (2,0), down (4,2), up row 2-2 = 0.
        assert_eq!(labels(&graph, "D2"), ["D4", "D0", "F2", "B2"]);
    }

    #[test]
    fn test_up_jump_is_offset_from_top_edge() {
        let grid = Grid::uniform(5, 1).unwrap();
        let graph = build_graph(&grid);
        // (1, 0) with weight 1: up lands on row 1 - 1 = 0.
        assert_eq!(labels(&graph, "C0"), ["C1", "D0", "B0"]);
        // (3, 0) with weight 1: up would land on row -2, off the board.
        assert_eq!(labels(&graph, "E0"), ["E1", "F0"]);
        assert_eq!(labels(&graph, "D1"), ["D2", "D0", "E1"]);
    }

    #[test]
    fn test_up_destination() {
        let pos = Position::new(3, 2);
        assert_eq!(
            Direction::Up.destination(pos, 3),
            Some(Position::new(0, 2))
        );
        assert_eq!(Direction::Up.destination(pos, 2), None);
    }

    #[test]
    fn test_left_destination_past_edge() {
        let pos = Position::new(3, 2);
        assert_eq!(
            Direction::Left.destination(pos, 2),
            Some(Position::new(3, 0))
        );
        assert_eq!(Direction::Left.destination(pos, 3), None);
    }

    #[test]
    fn test_weight_beyond_edge_is_illegal() {
        let mut rows = vec![vec![1; 5]; 5];
        rows[0][0] = 4;
        rows[0][3] = 4;
        let grid = Grid::from_rows(rows).unwrap();
        let graph = build_graph(&grid);
        assert_eq!(labels(&graph, "B0"), ["B4", "F0"]);
        // (0, 3) weight 4: right 1, left 3, down 4, up 0 available.
        assert_eq!(labels(&graph, "B3"), ["F3"]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let grid = Grid::from_rows(vec![
            vec![3, 1, 2, 4, 1],
            vec![2, 2, 3, 1, 4],
            vec![1, 4, 2, 2, 3],
            vec![4, 3, 1, 2, 2],
            vec![2, 1, 3, 1, 9],
        ])
        .unwrap();
        assert_eq!(build_graph(&grid), build_graph(&grid));
    }

    #[test]
    fn test_duplicate_edges_kept() {
        let mut graph = AdjacencyGraph::new(5);
        let from: CellLabel = "B0".parse().unwrap();
        let to: CellLabel = "B1".parse().unwrap();
        graph.add_edge(from, to);
        graph.add_edge(from, to);
        assert_eq!(graph.neighbors(from), [to, to]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_edge_count_all_ones() {
        let grid = Grid::uniform(5, 1).unwrap();
        let graph = build_graph(&grid);
        // 39 horizontal (goal has none), 20 down, 5 up from row 1.
        assert_eq!(graph.edge_count(), 64);
        assert_eq!(graph.vertex_count(), 24);
    }
}

//! The weighted n×n board.

use super::size::{GridSize, MAX_SIZE, MIN_SIZE};
use super::types::{CellLabel, Position};
use rand::Rng;
use std::fmt;

/// Reasons an explicit weight matrix cannot become a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The side length is outside `[MIN_SIZE, MAX_SIZE]`.
    UnsupportedSize(usize),
    /// A row does not have the same length as the number of rows.
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
    },
    /// A cell other than the goal has weight 0.
    ZeroWeight {
        row: usize,
        col: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize(n) => write!(
                f,
                "board size {n} is outside the supported range [{MIN_SIZE}, {MAX_SIZE}]"
            ),
            Self::NotSquare { row, len } => {
                write!(f, "row {row} has {len} cells, board is not square")
            }
            Self::ZeroWeight { row, col } => {
                write!(f, "cell ({row}, {col}) has weight 0, only the goal may")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An n×n rook jumping maze.
///
/// Each cell holds the exact distance a piece standing on it must jump.
/// The goal cell always holds 0, so it has no outgoing moves. A grid is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")
)]
pub struct Grid {
    size: usize,
    /// Row-major weights.
    weights: Vec<usize>,
}

impl Grid {
    /// Generates a random grid.
    ///
    /// `n` is clamped into `[MIN_SIZE, MAX_SIZE]` (the clamp is logged). Every
    /// cell weight is drawn uniformly from `[1, n-1]`, then the goal is
    /// forced to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rook_maze::grid::{Grid, Position};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let grid = Grid::generate(6, &mut rng);
    /// assert_eq!(grid.size(), 6);
    /// assert_eq!(grid.weight(Position::goal(6)), 0);
    /// ```
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Self {
        let size = GridSize::new(n);
        if let Some(adjustment) = size.adjustment() {
            tracing::warn!("{adjustment}");
        }
        let n = size.get();
        let weights = (0..n * n).map(|_| rng.random_range(1..n)).collect();
        Self::with_goal_cleared(n, weights)
    }

    /// Builds a grid from explicit rows of weights.
    ///
    /// Whatever weight the goal cell is given is overridden with 0. Every
    /// other cell must be at least 1.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self, GridError> {
        let n = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&n) {
            return Err(GridError::UnsupportedSize(n));
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GridError::NotSquare { row, len: r.len() });
        }
        let zero = rows.iter().enumerate().find_map(|(row, r)| {
            r.iter()
                .position(|&w| w == 0)
                .map(|col| (row, col))
                .filter(|&(row, col)| (row, col) != (n - 1, n - 1))
        });
        if let Some((row, col)) = zero {
            return Err(GridError::ZeroWeight { row, col });
        }
        Ok(Self::with_goal_cleared(n, rows.concat()))
    }

    /// A grid with every cell set to `weight` (goal still 0).
    pub fn uniform(n: usize, weight: usize) -> Result<Self, GridError> {
        Self::from_rows(vec![vec![weight; n]; n])
    }

    fn with_goal_cleared(size: usize, mut weights: Vec<usize>) -> Self {
        weights[size * size - 1] = 0;
        Self { size, weights }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Jump weight at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn weight(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position {pos} outside {n}x{n} board",
            n = self.size
        );
        self.weights[pos.row * self.size + pos.col]
    }

    /// The start position, `(0, 0)`.
    pub fn start(&self) -> Position {
        Position::start()
    }

    /// The goal position, `(n-1, n-1)`.
    pub fn goal(&self) -> Position {
        Position::goal(self.size)
    }

    /// Label of the start cell.
    pub fn start_label(&self) -> CellLabel {
        CellLabel::from_position(self.start())
    }

    /// Label of the goal cell.
    pub fn goal_label(&self) -> CellLabel {
        CellLabel::from_position(self.goal())
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, usize)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (Position::new(i / self.size, i % self.size), w))
    }

    /// Weights grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.weights.chunks(self.size)
    }
}

impl TryFrom<Vec<Vec<usize>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<usize>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[usize]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

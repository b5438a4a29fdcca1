//! Board coordinates and cell labels.

use std::fmt;
use std::str::FromStr;

/// First row letter. Row `r` is labeled `'B' + r`.
const ROW_BASE: u8 = b'B';

/// A `(row, col)` coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The start cell, always the top-left corner.
    pub fn start() -> Self {
        Self::new(0, 0)
    }

    /// The goal cell of an `n`×`n` board, always the bottom-right corner.
    pub fn goal(n: usize) -> Self {
        Self::new(n - 1, n - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Textual vertex identity of a cell, e.g. `B0` for the start cell.
///
/// The row is a letter offset from `'B'`, the column its decimal digit.
/// Board sizes never exceed ten, so every label is exactly two characters
/// and the mapping to [`Position`] is a bijection.
///
/// # Examples
///
/// ```
/// use rook_maze::grid::{CellLabel, Position};
///
/// let label = CellLabel::from_position(Position::new(4, 4));
/// assert_eq!(label.to_string(), "F4");
/// assert_eq!("F4".parse::<CellLabel>().unwrap().position(), Position::new(4, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellLabel {
    row: u8,
    col: u8,
}

impl CellLabel {
    /// Label of a board position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is ten or more.
    pub fn from_position(pos: Position) -> Self {
        assert!(
            pos.row < 10 && pos.col < 10,
            "position {pos} has no two-character label"
        );
        Self {
            row: pos.row as u8,
            col: pos.col as u8,
        }
    }

    /// The position this label names.
    pub fn position(&self) -> Position {
        Position::new(self.row as usize, self.col as usize)
    }
}

impl From<Position> for CellLabel {
    fn from(pos: Position) -> Self {
        Self::from_position(pos)
    }
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (ROW_BASE + self.row) as char, self.col)
    }
}

/// A string that is not a valid cell label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a cell label (expected e.g. B0)", self.input)
    }
}

impl std::error::Error for ParseLabelError {}

impl FromStr for CellLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLabelError {
            input: s.to_string(),
        };
        match s.as_bytes() {
            &[letter, digit]
                if (ROW_BASE..ROW_BASE + 10).contains(&letter) && digit.is_ascii_digit() =>
            {
                Ok(Self {
                    row: letter - ROW_BASE,
                    col: digit - b'0',
                })
            }
            _ => Err(err()),
        }
    }
}

//! Rook jumping maze boards.
//!
//! An n×n [`Grid`] of jump weights with a fixed start (top-left) and goal
//! (bottom-right). Every cell carries a [`CellLabel`], the vertex identity
//! used by [`crate::graph`] and [`crate::search`].
//!
//! # Size
//!
//! Board sizes live in `[5, 10]`. Requests outside that range are clamped
//! by [`GridSize`], which remembers the [`SizeAdjustment`] it applied so the
//! caller can report it.

mod board;
mod size;
mod types;

pub use board::{Grid, GridError};
pub use size::{GridSize, SizeAdjustment, MAX_SIZE, MIN_SIZE};
pub use types::{CellLabel, ParseLabelError, Position};

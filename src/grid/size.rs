//! Board size normalization.

use std::fmt;

/// Smallest supported board size.
pub const MIN_SIZE: usize = 5;

/// Largest supported board size.
pub const MAX_SIZE: usize = 10;

/// Adjustment applied when a requested size falls outside `[MIN_SIZE, MAX_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeAdjustment {
    /// The request was above [`MAX_SIZE`].
    ClampedToMax {
        /// Size originally requested.
        requested: usize,
    },
    /// The request was below [`MIN_SIZE`].
    ClampedToMin {
        /// Size originally requested.
        requested: usize,
    },
}

impl fmt::Display for SizeAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClampedToMax { requested } => {
                write!(f, "size {requested} set to max 'n' of {MAX_SIZE}")
            }
            Self::ClampedToMin { requested } => {
                write!(f, "size {requested} set to min 'n' of {MIN_SIZE}")
            }
        }
    }
}

/// A board size normalized into `[MIN_SIZE, MAX_SIZE]`.
///
/// # Examples
///
/// ```
/// use rook_maze::grid::{GridSize, SizeAdjustment};
///
/// let size = GridSize::new(12);
/// assert_eq!(size.get(), 10);
/// assert_eq!(size.adjustment(), Some(SizeAdjustment::ClampedToMax { requested: 12 }));
///
/// assert_eq!(GridSize::new(7).adjustment(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    value: usize,
    adjustment: Option<SizeAdjustment>,
}

impl GridSize {
    /// Clamps `requested` into the supported range.
    pub fn new(requested: usize) -> Self {
        if requested > MAX_SIZE {
            Self {
                value: MAX_SIZE,
                adjustment: Some(SizeAdjustment::ClampedToMax { requested }),
            }
        } else if requested < MIN_SIZE {
            Self {
                value: MIN_SIZE,
                adjustment: Some(SizeAdjustment::ClampedToMin { requested }),
            }
        } else {
            Self {
                value: requested,
                adjustment: None,
            }
        }
    }

    /// The normalized side length.
    pub fn get(&self) -> usize {
        self.value
    }

    /// The clamp applied, if any.
    pub fn adjustment(&self) -> Option<SizeAdjustment> {
        self.adjustment
    }
}

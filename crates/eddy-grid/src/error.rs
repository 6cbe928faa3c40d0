//! Error types for grid construction and cell addressing.

use std::fmt;

/// Errors arising from grid construction or cell lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Resolution below the minimum of 3 (no interior cells).
    ResolutionTooSmall {
        /// The rejected resolution.
        n: usize,
    },
    /// Resolution whose cell count `N * N` does not fit in `u32`.
    ResolutionTooLarge {
        /// The rejected resolution.
        n: usize,
    },
    /// A flat cell index outside `[0, N * N)`.
    CellOutOfRange {
        /// The offending index.
        cell: usize,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// A 2D coordinate outside `[0, N) x [0, N)`.
    CoordOutOfRange {
        /// Column.
        i: usize,
        /// Row.
        j: usize,
        /// Grid resolution.
        n: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolutionTooSmall { n } => {
                write!(f, "grid resolution {n} is below the minimum of {}", crate::Grid::MIN_N)
            }
            Self::ResolutionTooLarge { n } => {
                write!(f, "grid resolution {n} exceeds the maximum of {}", crate::Grid::MAX_N)
            }
            Self::CellOutOfRange { cell, cell_count } => {
                write!(f, "cell index {cell} out of range [0, {cell_count})")
            }
            Self::CoordOutOfRange { i, j, n } => {
                write!(f, "coordinate ({i}, {j}) out of range [0, {n}) x [0, {n})")
            }
        }
    }
}

impl std::error::Error for GridError {}

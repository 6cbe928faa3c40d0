//! Error type for rendering and pointer mapping.

use std::error::Error;
use std::fmt;

/// Errors from [`render_luma`](crate::render_luma),
/// [`render_rgba`](crate::render_rgba) and
/// [`PointerMapper::new`](crate::PointerMapper::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Canvas width or height is zero.
    EmptyCanvas {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// Density slice does not hold `N * N` values.
    FieldLength {
        /// `N * N` for the grid.
        expected: usize,
        /// Length of the slice passed in.
        actual: usize,
    },
    /// Output buffer is smaller than the canvas.
    BufferTooSmall {
        /// Bytes the canvas needs.
        needed: usize,
        /// Bytes provided.
        actual: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCanvas { width, height } => {
                write!(f, "canvas {width}x{height} has no pixels")
            }
            Self::FieldLength { expected, actual } => {
                write!(f, "density has {actual} values, grid needs {expected}")
            }
            Self::BufferTooSmall { needed, actual } => {
                write!(f, "output buffer too small: {actual} < {needed}")
            }
        }
    }
}

impl Error for RenderError {}

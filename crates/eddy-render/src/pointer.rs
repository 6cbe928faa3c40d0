//! Canvas pointer to grid impulse translation.

use eddy_core::Impulse;
use eddy_grid::Grid;
use smallvec::SmallVec;

use crate::error::RenderError;

/// Impulses produced by one drag segment.
pub type DragImpulses = SmallVec<[Impulse; 2]>;

/// Maps canvas pixel coordinates onto a grid.
///
/// The canvas is divided evenly into `N` columns and `N` rows; it need
/// not be square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMapper {
    grid: Grid,
    width: f32,
    height: f32,
    gain: f32,
}

impl PointerMapper {
    /// Default scale from pointer pixels to velocity units.
    pub const DEFAULT_GAIN: f32 = 0.1;

    /// Mapper for a `width` by `height` pixel canvas.
    pub fn new(grid: Grid, width: usize, height: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }
        Ok(Self {
            grid,
            width: width as f32,
            height: height as f32,
            gain: Self::DEFAULT_GAIN,
        })
    }

    /// Set the pixel-delta to velocity scale.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Target grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Pixel-delta to velocity scale.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Flat index of the cell under canvas point `(x, y)`, or `None` if
    /// the point is outside the canvas or not finite.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<usize> {
        if !(x >= 0.0 && x < self.width && y >= 0.0 && y < self.height) {
            return None;
        }
        let n = self.grid.n();
        let i = ((x / self.width * n as f32) as usize).min(n - 1);
        let j = ((y / self.height * n as f32) as usize).min(n - 1);
        Some(self.grid.index(i, j))
    }

    /// Impulses for a pointer drag from `from` to `to`.
    ///
    /// Yields a density impulse of `amount` and a velocity impulse of
    /// `gain * (to - from)`, both at the cell under `to`. A drag ending
    /// off-canvas yields nothing; a stationary pointer yields only the
    /// density impulse.
    pub fn drag(&self, from: (f32, f32), to: (f32, f32), amount: f32) -> DragImpulses {
        let mut out = DragImpulses::new();
        let Some(cell) = self.cell_at(to.0, to.1) else {
            return out;
        };
        out.push(Impulse::Density { cell, amount });
        let dx = (to.0 - from.0) * self.gain;
        let dy = (to.1 - from.1) * self.gain;
        if (dx != 0.0 || dy != 0.0) && dx.is_finite() && dy.is_finite() {
            out.push(Impulse::Velocity { cell, dx, dy });
        }
        out
    }
}

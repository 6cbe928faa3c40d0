//! Brush regions for impulse injection.
//!
//! A pointer drag stirs a small neighbourhood rather than a single cell.
//! [`disk`] compiles a circular brush into the flat indices it covers so
//! the caller can apply the same impulse to each.

use smallvec::SmallVec;

use crate::error::GridError;
use crate::grid::Grid;

/// Cell list produced by a brush. Inline storage covers brushes up to
/// radius 3 without touching the heap.
pub type BrushCells = SmallVec<[usize; 32]>;

/// Flat indices of all cells whose centre lies within `radius` of the
/// centre of `center`, in ascending index order.
///
/// The disk is clipped to the grid. A radius of zero (or any radius below
/// one) yields only the centre cell.
///
/// # Errors
///
/// Returns `GridError::CellOutOfRange` if `center` is not a valid cell.
///
/// # Examples
///
/// ```
/// use eddy_grid::{disk, Grid};
///
/// let grid = Grid::new(10).unwrap();
/// let cells = disk(&grid, grid.index(5, 5), 1.0).unwrap();
/// // Plus shape: centre and its four neighbours.
/// assert_eq!(cells.len(), 5);
/// ```
pub fn disk(grid: &Grid, center: usize, radius: f32) -> Result<BrushCells, GridError> {
    grid.check_cell(center)?;
    let (ci, cj) = grid.coords(center);
    let r = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    let reach = r.floor() as usize;
    let r2 = r * r;

    let i_lo = ci.saturating_sub(reach);
    let j_lo = cj.saturating_sub(reach);
    let i_hi = (ci + reach).min(grid.n() - 1);
    let j_hi = (cj + reach).min(grid.n() - 1);

    let mut cells = BrushCells::new();
    for j in j_lo..=j_hi {
        for i in i_lo..=i_hi {
            let di = i as f32 - ci as f32;
            let dj = j as f32 - cj as f32;
            if di * di + dj * dj <= r2 {
                cells.push(grid.index(i, j));
            }
        }
    }
    Ok(cells)
}

//! Square `N x N` lattice with flat `i + j * N` addressing.

use crate::error::GridError;

/// A square lattice of side `n`.
///
/// Cell `(i, j)` with `0 <= i, j < n` lives at flat index `i + j * n`:
/// `i` is the column (x axis) and `j` the row (y axis). Cells with
/// `i` or `j` in `{0, n - 1}` form the boundary ring; all others are
/// interior. The solver only ever writes interior cells directly and
/// derives the ring from them.
///
/// `Grid` is `Copy`: it is pure geometry and carries no buffers.
///
/// # Examples
///
/// ```
/// use eddy_grid::Grid;
///
/// let grid = Grid::new(50).unwrap();
/// assert_eq!(grid.cell_count(), 2500);
/// assert_eq!(grid.index(1, 2), 101);
/// assert!(grid.is_boundary(0, 17));
/// assert!(!grid.is_boundary(1, 1));
/// assert!(Grid::new(2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    n: usize,
}

impl Grid {
    /// Smallest resolution with at least one interior cell.
    pub const MIN_N: usize = 3;

    /// Largest resolution whose cell count fits in `u32`.
    pub const MAX_N: usize = u16::MAX as usize;

    /// Create a grid of side `n`.
    ///
    /// Returns `Err(GridError::ResolutionTooSmall)` if `n < 3`, or
    /// `Err(GridError::ResolutionTooLarge)` if `n * n` overflows `u32`.
    pub fn new(n: usize) -> Result<Self, GridError> {
        if n < Self::MIN_N {
            return Err(GridError::ResolutionTooSmall { n });
        }
        if n > Self::MAX_N {
            return Err(GridError::ResolutionTooLarge { n });
        }
        Ok(Self { n })
    }

    /// Side length `N`.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Side length as `f32`, the scale factor used by the solver stencils.
    #[inline]
    pub fn n_f32(&self) -> f32 {
        self.n as f32
    }

    /// Total number of cells, `N * N`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.n * self.n
    }

    /// Number of interior cells, `(N - 2)^2`.
    pub fn interior_count(&self) -> usize {
        (self.n - 2) * (self.n - 2)
    }

    /// Flat index of `(i, j)`. Callers guarantee `i, j < N`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n && j < self.n, "({i}, {j}) outside {0}x{0}", self.n);
        i + j * self.n
    }

    /// Flat index of `(i, j)` after constraining each axis to `[0, N - 1]`.
    ///
    /// Used by interpolation stencils whose sample points may land one
    /// past the last column or row.
    #[inline]
    pub fn index_clamped(&self, i: isize, j: isize) -> usize {
        let max = (self.n - 1) as isize;
        let ci = i.clamp(0, max) as usize;
        let cj = j.clamp(0, max) as usize;
        ci + cj * self.n
    }

    /// Checked flat index of `(i, j)`.
    pub fn checked_index(&self, i: usize, j: usize) -> Result<usize, GridError> {
        if i >= self.n || j >= self.n {
            return Err(GridError::CoordOutOfRange { i, j, n: self.n });
        }
        Ok(self.index(i, j))
    }

    /// Validate a flat cell index.
    pub fn check_cell(&self, cell: usize) -> Result<usize, GridError> {
        if cell >= self.cell_count() {
            return Err(GridError::CellOutOfRange {
                cell,
                cell_count: self.cell_count(),
            });
        }
        Ok(cell)
    }

    /// `(i, j)` coordinates of a flat index.
    #[inline]
    pub fn coords(&self, cell: usize) -> (usize, usize) {
        (cell % self.n, cell / self.n)
    }

    /// Whether `(i, j)` lies on the boundary ring.
    #[inline]
    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.n - 1 || j == self.n - 1
    }

    /// Whether the flat index lies on the boundary ring.
    pub fn is_boundary_cell(&self, cell: usize) -> bool {
        let (i, j) = self.coords(cell);
        self.is_boundary(i, j)
    }

    /// Flat index of the centre cell `(N / 2, N / 2)`.
    pub fn center(&self) -> usize {
        self.index(self.n / 2, self.n / 2)
    }

    /// Interior coordinates in row-major order: `(1, 1), (2, 1), ...`.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        (1..n - 1).flat_map(move |j| (1..n - 1).map(move |i| (i, j)))
    }

    /// Boundary-ring flat indices in ascending order.
    pub fn boundary_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cell_count()).filter(move |&c| self.is_boundary_cell(c))
    }

    /// Allocate a zero-filled buffer sized for this grid.
    pub fn zeroed(&self) -> Vec<f32> {
        vec![0.0; self.cell_count()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_resolutions_without_interior() {
        assert_eq!(Grid::new(0), Err(GridError::ResolutionTooSmall { n: 0 }));
        assert_eq!(Grid::new(2), Err(GridError::ResolutionTooSmall { n: 2 }));
        assert!(Grid::new(3).is_ok());
    }

    #[test]
    fn rejects_resolutions_overflowing_u32() {
        assert!(Grid::new(Grid::MAX_N).is_ok());
        assert_eq!(
            Grid::new(Grid::MAX_N + 1),
            Err(GridError::ResolutionTooLarge { n: Grid::MAX_N + 1 })
        );
        assert!(u32::try_from(Grid::MAX_N * Grid::MAX_N).is_ok());
    }

    #[test]
    fn three_by_three_has_one_interior_cell() {
        let g = Grid::new(3).unwrap();
        assert_eq!(g.interior().collect::<Vec<_>>(), vec![(1, 1)]);
        assert_eq!(g.interior_count(), 1);
        assert_eq!(g.boundary_cells().count(), 8);
        assert_eq!(g.center(), 4);
    }

    #[test]
    fn index_clamped_constrains_each_axis() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.index_clamped(-1, -1), 0);
        assert_eq!(g.index_clamped(4, 2), g.index(3, 2));
        assert_eq!(g.index_clamped(5, 9), g.index(3, 3));
        assert_eq!(g.index_clamped(2, 1), g.index(2, 1));
    }

    #[test]
    fn checked_lookups_report_bounds() {
        let g = Grid::new(5).unwrap();
        assert_eq!(g.check_cell(24), Ok(24));
        assert_eq!(
            g.check_cell(25),
            Err(GridError::CellOutOfRange {
                cell: 25,
                cell_count: 25
            })
        );
        assert_eq!(
            g.checked_index(5, 0),
            Err(GridError::CoordOutOfRange { i: 5, j: 0, n: 5 })
        );
    }

    #[test]
    fn error_display_is_descriptive() {
        let msg = format!("{}", GridError::ResolutionTooSmall { n: 2 });
        assert!(msg.contains("below the minimum of 3"));
    }

    proptest! {
        #[test]
        fn coords_invert_index(n in 3usize..64, i in 0usize..64, j in 0usize..64) {
            let g = Grid::new(n).unwrap();
            let (i, j) = (i % n, j % n);
            prop_assert_eq!(g.coords(g.index(i, j)), (i, j));
        }

        #[test]
        fn interior_and_ring_partition_the_grid(n in 3usize..40) {
            let g = Grid::new(n).unwrap();
            let ring = g.boundary_cells().count();
            prop_assert_eq!(ring + g.interior_count(), g.cell_count());
            prop_assert_eq!(ring, 4 * (n - 1));
            for (i, j) in g.interior() {
                prop_assert!(!g.is_boundary(i, j));
            }
        }
    }
}

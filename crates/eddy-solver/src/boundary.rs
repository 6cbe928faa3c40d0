//! Boundary enforcement: derive the edge ring of a field from its interior.

use eddy_core::Boundary;
use eddy_grid::Grid;

/// Overwrite the boundary ring of `field` from its one-in neighbours.
///
/// - Top/bottom rows (`j = 0`, `j = N - 1`) copy the row one step inward,
///   negated when `boundary` is [`Boundary::MirrorHorizontal`].
/// - Left/right columns (`i = 0`, `i = N - 1`) copy the column one step
///   inward, negated when `boundary` is [`Boundary::MirrorVertical`].
/// - Each corner becomes the mean of its two adjacent edge cells, after
///   the edges above have been written.
///
/// Interior cells are never touched. O(N), no allocation.
pub fn enforce(boundary: Boundary, field: &mut [f32], grid: &Grid) {
    debug_assert_eq!(field.len(), grid.cell_count());
    let n = grid.n();
    let row = boundary.row_sign();
    let col = boundary.column_sign();

    for k in 1..n - 1 {
        field[grid.index(k, 0)] = row * field[grid.index(k, 1)];
        field[grid.index(k, n - 1)] = row * field[grid.index(k, n - 2)];
        field[grid.index(0, k)] = col * field[grid.index(1, k)];
        field[grid.index(n - 1, k)] = col * field[grid.index(n - 2, k)];
    }

    let last = n - 1;
    field[grid.index(0, 0)] = 0.5 * (field[grid.index(1, 0)] + field[grid.index(0, 1)]);
    field[grid.index(0, last)] =
        0.5 * (field[grid.index(1, last)] + field[grid.index(0, last - 1)]);
    field[grid.index(last, 0)] =
        0.5 * (field[grid.index(last - 1, 0)] + field[grid.index(last, 1)]);
    field[grid.index(last, last)] =
        0.5 * (field[grid.index(last - 1, last)] + field[grid.index(last, last - 1)]);
}

//! Implicit diffusion.

use eddy_core::Boundary;
use eddy_grid::Grid;

use crate::relax::gauss_seidel;

/// Diffuse `source` into `dest` with an implicit (backward Euler) step.
///
/// Solves `dest - a * laplacian(dest) = source` with `a = dt * rate * N^2`
/// by `iterations` Gauss-Seidel sweeps of
///
/// ```text
/// dest[i,j] = (source[i,j] + a * (dest[i-1,j] + dest[i+1,j] + dest[i,j-1] + dest[i,j+1])) / (1 + 4a)
/// ```
///
/// enforcing `boundary` on `dest` after every sweep. Stable for any
/// non-negative `rate`, `dt` and resolution. With `rate == 0` the interior
/// of `dest` equals `source` exactly.
pub fn diffuse(
    boundary: Boundary,
    dest: &mut [f32],
    source: &[f32],
    rate: f32,
    dt: f32,
    grid: &Grid,
    iterations: usize,
) {
    let n = grid.n_f32();
    let a = dt * rate * n * n;
    gauss_seidel(boundary, dest, source, a, 1.0 + 4.0 * a, grid, iterations);
}

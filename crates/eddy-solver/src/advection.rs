//! Semi-Lagrangian advection with bilinear sampling.

use eddy_core::Boundary;
use eddy_grid::Grid;

use crate::boundary::enforce;

/// Transport `source` along `(u, v)` for one step of length `dt`, writing
/// the result into `dest`.
///
/// Each interior cell is traced backward by `dt * N * velocity`, the
/// departure point is clamped to `[0.5, N + 0.5]` on both axes, and
/// `source` is sampled there by bilinear interpolation. Sample addresses
/// are clamped per axis to `[0, N - 1]`. `boundary` is enforced on `dest`
/// afterwards.
///
/// With zero velocity every interior cell of `dest` equals `source`.
/// `dest` must not alias `source`, `u` or `v`; the borrow checker enforces
/// that at every call site.
pub fn advect(
    boundary: Boundary,
    dest: &mut [f32],
    source: &[f32],
    u: &[f32],
    v: &[f32],
    dt: f32,
    grid: &Grid,
) {
    debug_assert_eq!(dest.len(), grid.cell_count());
    debug_assert_eq!(source.len(), grid.cell_count());
    let n = grid.n();
    let n_f = grid.n_f32();
    let dt0 = dt * n_f;
    let hi = n_f + 0.5;

    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let k = grid.index(i, j);
            let x = (i as f32 - dt0 * u[k]).clamp(0.5, hi);
            let y = (j as f32 - dt0 * v[k]).clamp(0.5, hi);

            let x0 = x.floor();
            let y0 = y.floor();
            let s1 = x - x0;
            let s0 = 1.0 - s1;
            let t1 = y - y0;
            let t0 = 1.0 - t1;

            let i0 = x0 as isize;
            let j0 = y0 as isize;
            let sample = |di: isize, dj: isize| source[grid.index_clamped(i0 + di, j0 + dj)];

            dest[k] = s0 * (t0 * sample(0, 0) + t1 * sample(0, 1))
                + s1 * (t0 * sample(1, 0) + t1 * sample(1, 1));
        }
    }
    enforce(boundary, dest, grid);
}

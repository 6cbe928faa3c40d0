//! Pressure projection: make a velocity field discretely divergence-free.

use eddy_core::Boundary;
use eddy_grid::Grid;

use crate::boundary::enforce;
use crate::relax::gauss_seidel;

/// Project `(u, v)` onto its divergence-free part, in place.
///
/// `p` and `div` are scratch buffers; their prior contents are discarded.
/// On return `p` holds the pressure solution and `div` the (Scalar
/// bounded) divergence that was solved against, which callers may inspect
/// for diagnostics.
///
/// Steps:
/// 1. `div = -0.5 * (du/dx + dv/dy) / N` by central differences, `p = 0`.
/// 2. Scalar boundary on both scratch buffers.
/// 3. `iterations` Gauss-Seidel sweeps of `p = (div + sum(neighbours)) / 4`.
/// 4. Subtract the pressure gradient `0.5 * N * grad(p)` from `(u, v)`.
/// 5. [`Boundary::MirrorVertical`] on `u`, [`Boundary::MirrorHorizontal`]
///    on `v`.
pub fn project(
    u: &mut [f32],
    v: &mut [f32],
    p: &mut [f32],
    div: &mut [f32],
    grid: &Grid,
    iterations: usize,
) {
    debug_assert_eq!(u.len(), grid.cell_count());
    debug_assert_eq!(v.len(), grid.cell_count());
    debug_assert_eq!(p.len(), grid.cell_count());
    debug_assert_eq!(div.len(), grid.cell_count());
    let n = grid.n();
    let n_f = grid.n_f32();

    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let k = grid.index(i, j);
            div[k] = -0.5 * (u[k + 1] - u[k - 1] + v[k + n] - v[k - n]) / n_f;
            p[k] = 0.0;
        }
    }
    enforce(Boundary::Scalar, div, grid);
    enforce(Boundary::Scalar, p, grid);

    gauss_seidel(Boundary::Scalar, p, div, 1.0, 4.0, grid, iterations);

    let half_n = 0.5 * n_f;
    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let k = grid.index(i, j);
            u[k] -= half_n * (p[k + 1] - p[k - 1]);
            v[k] -= half_n * (p[k + n] - p[k - n]);
        }
    }
    enforce(Boundary::MirrorVertical, u, grid);
    enforce(Boundary::MirrorHorizontal, v, grid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relax::DEFAULT_ITERATIONS;

    #[test]
    fn zero_field_stays_zero() {
        let g = Grid::new(10).unwrap();
        let mut u = g.zeroed();
        let mut v = g.zeroed();
        let mut p = vec![9.0f32; g.cell_count()];
        let mut div = vec![-9.0f32; g.cell_count()];
        project(&mut u, &mut v, &mut p, &mut div, &g, DEFAULT_ITERATIONS);
        assert!(u.iter().chain(&v).all(|&x| x == 0.0));
        assert!(p.iter().all(|&x| x == 0.0), "stale pressure survived");
    }

    #[test]
    fn boundary_signs_hold_after_projection() {
        let g = Grid::new(8).unwrap();
        let mut u = g.zeroed();
        let mut v = g.zeroed();
        u[g.index(1, 3)] = 1.0;
        v[g.index(4, 1)] = -2.0;
        let mut p = g.zeroed();
        let mut div = g.zeroed();
        project(&mut u, &mut v, &mut p, &mut div, &g, DEFAULT_ITERATIONS);
        for k in 1..7 {
            assert_eq!(u[g.index(0, k)], -u[g.index(1, k)]);
            assert_eq!(v[g.index(k, 0)], -v[g.index(k, 1)]);
        }
    }
}

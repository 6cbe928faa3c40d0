//! Gauss-Seidel relaxation kernel shared by diffusion and projection.

use eddy_core::Boundary;
use eddy_grid::Grid;

use crate::boundary::enforce;

/// Relaxation sweep count used by the reference pipeline.
pub const DEFAULT_ITERATIONS: usize = 20;

/// Solve `x[i,j] = (x0[i,j] + a * sum(neighbours of x)) / c` over the
/// interior by in-place Gauss-Seidel sweeps.
///
/// Each sweep updates interior cells in row-major order, reading the
/// freshest neighbour values, then enforces `boundary` on `x` so that the
/// next sweep's edge reads see the updated ring. The current contents of
/// `x` are the initial guess.
///
/// `c` must be positive; callers pass `1 + 4a` (diffusion) or `4`
/// (pressure).
pub fn gauss_seidel(
    boundary: Boundary,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    grid: &Grid,
    iterations: usize,
) {
    debug_assert_eq!(x.len(), grid.cell_count());
    debug_assert_eq!(x0.len(), grid.cell_count());
    debug_assert!(c > 0.0, "relaxation divisor must be positive, got {c}");
    let n = grid.n();
    let c_inv = 1.0 / c;

    for _ in 0..iterations {
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                let k = grid.index(i, j);
                let neighbours = x[k - 1] + x[k + 1] + x[k - n] + x[k + n];
                x[k] = (x0[k] + a * neighbours) * c_inv;
            }
        }
        enforce(boundary, x, grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_coupling_copies_source_in_one_sweep() {
        let g = Grid::new(6).unwrap();
        let x0: Vec<f32> = (0..36).map(|v| v as f32).collect();
        let mut x = vec![-5.0f32; 36];
        gauss_seidel(Boundary::Scalar, &mut x, &x0, 0.0, 1.0, &g, 1);
        for (i, j) in g.interior() {
            let k = g.index(i, j);
            assert_eq!(x[k], x0[k]);
        }
    }

    #[test]
    fn zero_iterations_leave_guess_untouched() {
        let g = Grid::new(4).unwrap();
        let x0 = vec![1.0f32; 16];
        let mut x = vec![3.0f32; 16];
        gauss_seidel(Boundary::Scalar, &mut x, &x0, 1.0, 4.0, &g, 0);
        assert!(x.iter().all(|&v| v == 3.0));
    }

    #[test]
    fn converges_towards_uniform_solution() {
        // With x0 uniform and Neumann walls, x = x0 / (c - 4a) is a fixed
        // point. For a = 1, c = 5 that is x0.
        let g = Grid::new(8).unwrap();
        let x0 = vec![2.0f32; 64];
        let mut x = vec![0.0f32; 64];
        gauss_seidel(Boundary::Scalar, &mut x, &x0, 1.0, 5.0, &g, 200);
        for (i, j) in g.interior() {
            let v = x[g.index(i, j)];
            assert!((v - 2.0).abs() < 1e-3, "cell ({i},{j}) = {v}");
        }
    }

    #[test]
    fn boundary_enforced_after_final_sweep() {
        let g = Grid::new(5).unwrap();
        let mut x0 = vec![0.0f32; 25];
        x0[g.index(1, 2)] = 4.0;
        let mut x = vec![0.0f32; 25];
        gauss_seidel(Boundary::MirrorVertical, &mut x, &x0, 0.5, 3.0, &g, 3);
        for j in 1..4 {
            assert_eq!(x[g.index(0, j)], -x[g.index(1, j)]);
        }
    }
}

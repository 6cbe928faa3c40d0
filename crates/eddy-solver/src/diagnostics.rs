//! Read-only field diagnostics used by tests, benches and the engine's
//! non-finite sentinel.

use eddy_grid::Grid;

/// Central-difference divergence `du/dx + dv/dy` at interior cell `(i, j)`,
/// in grid units (no `1/N` scaling).
#[inline]
pub fn divergence_at(u: &[f32], v: &[f32], grid: &Grid, i: usize, j: usize) -> f32 {
    let n = grid.n();
    let k = grid.index(i, j);
    0.5 * (u[k + 1] - u[k - 1] + v[k + n] - v[k - n])
}

/// Largest absolute interior divergence of `(u, v)`.
pub fn max_abs_divergence(u: &[f32], v: &[f32], grid: &Grid) -> f32 {
    grid.interior()
        .map(|(i, j)| divergence_at(u, v, grid, i, j).abs())
        .fold(0.0, f32::max)
}

/// Root-mean-square interior divergence of `(u, v)`.
pub fn rms_divergence(u: &[f32], v: &[f32], grid: &Grid) -> f32 {
    let count = grid.interior_count();
    if count == 0 {
        return 0.0;
    }
    let sum: f64 = grid
        .interior()
        .map(|(i, j)| {
            let d = f64::from(divergence_at(u, v, grid, i, j));
            d * d
        })
        .sum();
    (sum / count as f64).sqrt() as f32
}

/// Sum of interior cells, accumulated in `f64`.
pub fn interior_mass(field: &[f32], grid: &Grid) -> f64 {
    grid.interior()
        .map(|(i, j)| f64::from(field[grid.index(i, j)]))
        .sum()
}

/// Sum of every cell, accumulated in `f64`.
pub fn total_mass(field: &[f32]) -> f64 {
    field.iter().map(|&x| f64::from(x)).sum()
}

/// Index of the first NaN or infinite value, if any.
pub fn first_non_finite(field: &[f32]) -> Option<usize> {
    field.iter().position(|x| !x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ramp_has_constant_divergence() {
        let g = Grid::new(6).unwrap();
        let u: Vec<f32> = (0..36).map(|c| (c % 6) as f32).collect();
        let v = g.zeroed();
        for (i, j) in g.interior() {
            assert_eq!(divergence_at(&u, &v, &g, i, j), 1.0);
        }
        assert_eq!(max_abs_divergence(&u, &v, &g), 1.0);
        assert!((rms_divergence(&u, &v, &g) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mass_sums() {
        let g = Grid::new(4).unwrap();
        let f = vec![0.5f32; 16];
        assert_eq!(total_mass(&f), 8.0);
        assert_eq!(interior_mass(&f, &g), 2.0);
    }

    #[test]
    fn non_finite_detection() {
        assert_eq!(first_non_finite(&[0.0, 1.0, 2.0]), None);
        assert_eq!(first_non_finite(&[0.0, f32::NAN, f32::INFINITY]), Some(1));
        assert_eq!(first_non_finite(&[f32::NEG_INFINITY]), Some(0));
    }
}

//! Reusable field fixtures.
//!
//! - [`ramp_x`] / [`ramp_y`]: linear ramps along one axis.
//! - [`spike`] / [`centered_spike`]: a single non-zero cell.
//! - [`stream_function_velocity`]: a velocity field whose discrete
//!   central-difference divergence is zero.
//! - [`gaussian_source_velocity`]: a curl-free (gradient) field.

use std::f32::consts::PI;

use eddy_grid::Grid;

/// `field[i, j] = slope * i`.
pub fn ramp_x(grid: &Grid, slope: f32) -> Vec<f32> {
    (0..grid.cell_count())
        .map(|c| slope * grid.coords(c).0 as f32)
        .collect()
}

/// `field[i, j] = slope * j`.
pub fn ramp_y(grid: &Grid, slope: f32) -> Vec<f32> {
    (0..grid.cell_count())
        .map(|c| slope * grid.coords(c).1 as f32)
        .collect()
}

/// Zero field with `amount` at `cell`.
pub fn spike(grid: &Grid, cell: usize, amount: f32) -> Vec<f32> {
    let mut f = grid.zeroed();
    f[cell] = amount;
    f
}

/// Zero field with `amount` at the centre cell.
pub fn centered_spike(grid: &Grid, amount: f32) -> Vec<f32> {
    spike(grid, grid.center(), amount)
}

/// Velocity `(u, v)` derived from a sine-bump stream function `psi` by
/// `u = psi[i, j+1] - psi[i, j-1]`, `v = -(psi[i+1, j] - psi[i-1, j])`.
///
/// The central-difference divergence of this pair cancels term by term.
/// `psi` is supported on `[3, N - 4]` so the two outermost rings of both
/// components are zero and boundary enforcement is a no-op. Grids smaller
/// than 8 yield all-zero fields.
pub fn stream_function_velocity(grid: &Grid, amplitude: f32) -> (Vec<f32>, Vec<f32>) {
    let n = grid.n();
    let mut psi = grid.zeroed();
    if n >= 8 {
        let lo = 3;
        let hi = n - 4;
        let span = (hi - lo) as f32;
        for j in lo..=hi {
            for i in lo..=hi {
                let sx = (PI * (i - lo) as f32 / span).sin();
                let sy = (PI * (j - lo) as f32 / span).sin();
                psi[grid.index(i, j)] = amplitude * sx * sy;
            }
        }
    }

    let mut u = grid.zeroed();
    let mut v = grid.zeroed();
    for (i, j) in grid.interior() {
        let k = grid.index(i, j);
        u[k] = psi[k + n] - psi[k - n];
        v[k] = -(psi[k + 1] - psi[k - 1]);
    }
    (u, v)
}

/// Velocity `(u, v)` equal to the central-difference gradient of a
/// centred Gaussian bump with standard deviation `N / 8`, zero on the
/// boundary ring. Curl-free and strongly convergent at the centre for a
/// positive `amplitude`.
pub fn gaussian_source_velocity(grid: &Grid, amplitude: f32) -> (Vec<f32>, Vec<f32>) {
    let n = grid.n();
    let c = (n / 2) as f32;
    let sigma = n as f32 / 8.0;
    let denom = 2.0 * sigma * sigma;
    let phi: Vec<f32> = (0..grid.cell_count())
        .map(|cell| {
            let (i, j) = grid.coords(cell);
            let dx = i as f32 - c;
            let dy = j as f32 - c;
            amplitude * (-(dx * dx + dy * dy) / denom).exp()
        })
        .collect();

    let mut u = grid.zeroed();
    let mut v = grid.zeroed();
    for (i, j) in grid.interior() {
        let k = grid.index(i, j);
        u[k] = 0.5 * (phi[k + 1] - phi[k - 1]);
        v[k] = 0.5 * (phi[k + n] - phi[k - n]);
    }
    (u, v)
}

/// Central-difference divergence `0.5 * (du + dv)` on interior cells,
/// zero on the boundary ring.
pub fn discrete_divergence(u: &[f32], v: &[f32], grid: &Grid) -> Vec<f32> {
    let n = grid.n();
    let mut div = grid.zeroed();
    for (i, j) in grid.interior() {
        let k = grid.index(i, j);
        div[k] = 0.5 * (u[k + 1] - u[k - 1] + v[k + n] - v[k - n]);
    }
    div
}

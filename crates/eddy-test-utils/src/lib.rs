//! Field fixtures and numeric assertions for Eddy development.
//!
//! Fixtures build flat `N * N` buffers for a given [`Grid`]; assertions
//! compare them with a tolerance and report the first offending cell with
//! its `(i, j)` coordinates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use eddy_grid::Grid;

pub use fixtures::{
    centered_spike, discrete_divergence, gaussian_source_velocity, ramp_x, ramp_y, spike,
    stream_function_velocity,
};

/// Largest absolute value in `field` (0 for an empty slice).
pub fn max_abs(field: &[f32]) -> f32 {
    field.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

/// Assert `actual` and `expected` agree cell-by-cell within `tol`.
#[track_caller]
pub fn assert_all_close(actual: &[f32], expected: &[f32], tol: f32) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (k, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "cell {k}: {a} differs from {e} by more than {tol}"
        );
    }
}

/// Assert interior cells of `actual` and `expected` agree within `tol`;
/// the boundary ring is ignored.
#[track_caller]
pub fn assert_interior_close(actual: &[f32], expected: &[f32], grid: &Grid, tol: f32) {
    for (i, j) in grid.interior() {
        let k = grid.index(i, j);
        let (a, e) = (actual[k], expected[k]);
        assert!(
            (a - e).abs() <= tol,
            "cell ({i}, {j}): {a} differs from {e} by more than {tol}"
        );
    }
}

/// Assert every value is finite.
#[track_caller]
pub fn assert_finite(field: &[f32]) {
    if let Some(k) = field.iter().position(|x| !x.is_finite()) {
        panic!("cell {k} is not finite: {}", field[k]);
    }
}

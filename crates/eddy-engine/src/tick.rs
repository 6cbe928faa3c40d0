//! The step orchestrator: one Stable Fluids tick over a [`FluidState`].
//!
//! Stage order is fixed:
//!
//! 1. diffuse velocity into the previous-generation buffers
//! 2. project the diffused velocity
//! 3. advect velocity along the projected field
//! 4. project the advected velocity
//! 5. diffuse density
//! 6. advect density along the final velocity
//!
//! Buffers are borrowed field-by-field, so the scratch roles the
//! projection needs (`p`, `div`) are played by whichever pair is idle at
//! that point in the pipeline.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use eddy_core::{Boundary, FieldKind};
use eddy_solver::diagnostics::first_non_finite;
use eddy_solver::{advect, diffuse, project};

use crate::config::AdvectionPolicy;
use crate::metrics::{StepMetrics, STAGES};
use crate::state::FluidState;

// ── StepError ──────────────────────────────────────────────────────

/// Errors reported by [`step`].
///
/// The solver itself cannot fail; these come from the optional
/// non-finite sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A field holds NaN or infinity after the tick.
    NonFinite {
        /// First field found to be corrupt, in [`FieldKind::ALL`] order.
        field: FieldKind,
        /// First corrupt cell in that field.
        cell: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, cell } => {
                write!(f, "field {field} is not finite at cell {cell}")
            }
        }
    }
}

impl Error for StepError {}

// ── StageClock ─────────────────────────────────────────────────────

struct StageClock {
    last: Instant,
}

impl StageClock {
    fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    fn lap(&mut self, metrics: &mut StepMetrics, stage: &'static str) {
        let now = Instant::now();
        let us = now.duration_since(self.last).as_micros() as u64;
        metrics.stage_us.insert(stage, us);
        self.last = now;
    }
}

// ── step ───────────────────────────────────────────────────────────

/// Advance `state` by one time step.
///
/// Always runs the full pipeline and advances the tick counter. When the
/// configuration enables the sentinel, every field is then scanned and
/// the first non-finite value is reported; the corrupt state is left in
/// place for the caller to inspect or [`reset`](FluidState::reset).
pub fn step(state: &mut FluidState) -> Result<StepMetrics, StepError> {
    let tick_start = Instant::now();
    let mut metrics = StepMetrics::default();
    metrics.stage_us.reserve(STAGES.len());

    let FluidState {
        config,
        grid,
        velocity_x: vx,
        velocity_y: vy,
        prev_velocity_x: pvx,
        prev_velocity_y: pvy,
        density,
        prev_density,
        tick,
        ..
    } = &mut *state;
    let grid = *grid;
    let dt = config.dt;
    let iters = config.iterations;
    let nan_sentinel = config.nan_sentinel;

    let mut clock = StageClock::start();

    diffuse(Boundary::MirrorVertical, pvx, vx, config.viscosity, dt, &grid, iters);
    diffuse(Boundary::MirrorHorizontal, pvy, vy, config.viscosity, dt, &grid, iters);
    clock.lap(&mut metrics, STAGES[0]);

    project(pvx, pvy, vx, vy, &grid, iters);
    clock.lap(&mut metrics, STAGES[1]);

    advect(Boundary::MirrorVertical, vx, pvx, pvx, pvy, dt, &grid);
    match config.advection {
        AdvectionPolicy::Snapshot => {
            advect(Boundary::MirrorHorizontal, vy, pvy, pvx, pvy, dt, &grid);
        }
        AdvectionPolicy::Sequential => {
            advect(Boundary::MirrorHorizontal, vy, pvy, vx, pvy, dt, &grid);
        }
    }
    clock.lap(&mut metrics, STAGES[2]);

    project(vx, vy, pvx, pvy, &grid, iters);
    clock.lap(&mut metrics, STAGES[3]);

    diffuse(Boundary::Scalar, prev_density, density, config.diffusion_rate, dt, &grid, iters);
    clock.lap(&mut metrics, STAGES[4]);

    advect(Boundary::Scalar, density, prev_density, vx, vy, dt, &grid);
    clock.lap(&mut metrics, STAGES[5]);

    *tick = tick.next();
    metrics.tick = *tick;
    metrics.total_us = tick_start.elapsed().as_micros() as u64;
    tracing::trace!(tick = %metrics.tick, total_us = metrics.total_us, "tick complete");

    if nan_sentinel {
        check_finite(state)?;
    }
    Ok(metrics)
}

fn check_finite(state: &FluidState) -> Result<(), StepError> {
    for field in FieldKind::ALL {
        if let Some(cell) = first_non_finite(state.field(field)) {
            tracing::warn!(%field, cell, tick = %state.tick_id(), "non-finite value in field");
            return Err(StepError::NonFinite { field, cell });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FluidConfig;

    fn state(n: usize) -> FluidState {
        FluidState::new(FluidConfig::default().with_resolution(n)).unwrap()
    }

    #[test]
    fn metrics_cover_every_stage_in_order() {
        let mut s = state(8);
        let m = step(&mut s).unwrap();
        let names: Vec<_> = m.stage_us.keys().copied().collect();
        assert_eq!(names, STAGES);
        assert_eq!(m.tick, eddy_core::TickId(1));
        assert!(m.total_us >= m.stages_total_us());
    }

    #[test]
    fn tick_counter_advances() {
        let mut s = state(6);
        for _ in 0..3 {
            step(&mut s).unwrap();
        }
        assert_eq!(s.tick_id(), eddy_core::TickId(3));
    }

    #[test]
    fn injected_density_is_transported_by_velocity() {
        // A single-cell velocity spike is almost purely divergent and is
        // projected away; a disk-shaped jet survives projection. At
        // 0.3 the trace moves less than one cell (dt * N * u < 1).
        let mut s = state(16);
        let grid = s.grid();
        let c = grid.center();
        let (ci, _) = grid.coords(c);
        s.add_density(c, 10.0);
        for cell in eddy_grid::disk(&grid, c, 3.0).unwrap() {
            s.add_velocity(cell, 0.3, 0.0);
        }
        step(&mut s).unwrap();

        let d = s.density();
        assert!(d.iter().all(|x| x.is_finite()));
        assert!(d[c + 1] > 0.0, "nothing reached the downstream neighbour");
        assert!(d[c + 1] > d[c - 1]);
        let mass: f32 = d.iter().sum();
        let moment: f32 = d
            .iter()
            .enumerate()
            .map(|(k, &x)| grid.coords(k).0 as f32 * x)
            .sum();
        let centroid = moment / mass;
        assert!(centroid > ci as f32 + 0.05, "centroid stayed at {centroid}");
    }

    #[test]
    fn sentinel_reports_first_corrupt_field() {
        let mut s = FluidState::new(
            FluidConfig::default()
                .with_resolution(6)
                .with_nan_sentinel(true),
        )
        .unwrap();
        s.density[14] = f32::NAN;
        match step(&mut s) {
            Err(StepError::NonFinite { field, .. }) => {
                assert!(matches!(field, FieldKind::Density | FieldKind::PrevDensity));
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn sentinel_off_ignores_nan() {
        let mut s = state(6);
        s.density[14] = f32::NAN;
        assert!(step(&mut s).is_ok());
    }

    #[test]
    fn step_error_display() {
        let e = StepError::NonFinite {
            field: FieldKind::VelocityY,
            cell: 3,
        };
        assert_eq!(e.to_string(), "field velocity_y is not finite at cell 3");
    }
}

//! Lockstep (synchronous) fluid simulation.
//!
//! [`FluidSim`] is the primary user-facing API. A host loop applies
//! impulses, calls [`tick()`](FluidSim::tick), then reads
//! [`density()`](FluidSim::density) for rendering. Every impulse entry point
//! validates its cell before writing, so an out-of-range pointer position
//! is reported instead of corrupting a neighbouring row.
//!
//! # Ownership model
//!
//! `FluidSim` owns its [`FluidState`] outright. All mutating methods take
//! `&mut self` and the read accessors borrow from `self`, so a rendered
//! slice cannot outlive the next tick.

use eddy_core::{GridGeneration, Impulse, TickId};
use eddy_grid::{disk, Grid, GridError};

use crate::config::{apply_config, ConfigChange, ConfigError, FluidConfig};
use crate::metrics::StepMetrics;
use crate::state::FluidState;
use crate::tick::{step, StepError};

// Compile-time assertion: FluidSim can move to the realtime tick thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FluidSim>();
    }
};

/// Single-threaded Stable Fluids simulation.
///
/// # Example
///
/// ```
/// use eddy_engine::FluidSim;
///
/// let mut sim = FluidSim::init(32, 0.0001, 0.0, 0.1).unwrap();
/// let centre = sim.grid().center();
/// sim.inject_density(centre, 50.0).unwrap();
/// sim.inject_velocity(centre, 1.0, 0.0).unwrap();
/// for _ in 0..10 {
///     sim.tick().unwrap();
/// }
/// assert_eq!(sim.density().len(), 32 * 32);
/// ```
#[derive(Clone, Debug)]
pub struct FluidSim {
    state: FluidState,
}

impl FluidSim {
    /// Validate `config` and allocate zeroed buffers.
    pub fn new(config: FluidConfig) -> Result<Self, ConfigError> {
        let state = FluidState::new(config)?;
        tracing::debug!(
            n = state.grid().n(),
            diffusion_rate = state.config().diffusion_rate,
            viscosity = state.config().viscosity,
            dt = state.config().dt,
            "fluid simulation initialised"
        );
        Ok(Self { state })
    }

    /// Shorthand for [`new`](Self::new) with default iteration count and
    /// advection policy.
    pub fn init(n: usize, diffusion_rate: f32, viscosity: f32, dt: f32) -> Result<Self, ConfigError> {
        Self::new(
            FluidConfig::default()
                .with_resolution(n)
                .with_diffusion_rate(diffusion_rate)
                .with_viscosity(viscosity)
                .with_dt(dt),
        )
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Zero every buffer at the current resolution.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Reallocate zeroed buffers at side length `n`.
    pub fn resize(&mut self, n: usize) -> Result<(), GridError> {
        self.state.resize(n)
    }

    /// Validate and install new parameters. See [`apply_config`].
    pub fn configure(&mut self, config: FluidConfig) -> Result<ConfigChange, ConfigError> {
        apply_config(&mut self.state, config)
    }

    // ── Impulses ─────────────────────────────────────────────────

    /// `density[cell] += amount`.
    pub fn inject_density(&mut self, cell: usize, amount: f32) -> Result<(), GridError> {
        let cell = self.state.grid().check_cell(cell)?;
        self.state.add_density(cell, amount);
        Ok(())
    }

    /// `velocity[cell] += (dx, dy)`.
    pub fn inject_velocity(&mut self, cell: usize, dx: f32, dy: f32) -> Result<(), GridError> {
        let cell = self.state.grid().check_cell(cell)?;
        self.state.add_velocity(cell, dx, dy);
        Ok(())
    }

    /// Apply one impulse.
    pub fn apply(&mut self, impulse: Impulse) -> Result<(), GridError> {
        match impulse {
            Impulse::Density { cell, amount } => self.inject_density(cell, amount),
            Impulse::Velocity { cell, dx, dy } => self.inject_velocity(cell, dx, dy),
        }
    }

    /// Apply a batch of impulses.
    ///
    /// Every cell is checked before any write, so a batch with one bad
    /// cell leaves the state untouched.
    pub fn apply_all(&mut self, impulses: &[Impulse]) -> Result<(), GridError> {
        let grid = self.state.grid();
        for impulse in impulses {
            grid.check_cell(impulse.cell())?;
        }
        for &impulse in impulses {
            self.apply(impulse)?;
        }
        Ok(())
    }

    /// Apply `impulse` to every cell within `radius` of `center`.
    ///
    /// The impulse's own cell is ignored. Returns the number of cells
    /// touched.
    pub fn splat(&mut self, center: usize, radius: f32, impulse: Impulse) -> Result<usize, GridError> {
        let cells = disk(&self.state.grid(), center, radius)?;
        for &cell in &cells {
            self.apply(impulse.at(cell))?;
        }
        Ok(cells.len())
    }

    // ── Stepping ─────────────────────────────────────────────────

    /// Advance one time step. See [`step`].
    pub fn tick(&mut self) -> Result<StepMetrics, StepError> {
        step(&mut self.state)
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Current density field, `N * N` values.
    pub fn density(&self) -> &[f32] {
        self.state.density()
    }

    /// Current velocity components `(x, y)`.
    pub fn velocity(&self) -> (&[f32], &[f32]) {
        self.state.velocity()
    }

    /// Grid geometry.
    pub fn grid(&self) -> Grid {
        self.state.grid()
    }

    /// Current parameters.
    pub fn config(&self) -> &FluidConfig {
        self.state.config()
    }

    /// Reallocation counter.
    pub fn generation(&self) -> GridGeneration {
        self.state.generation()
    }

    /// Ticks completed since the last reallocation.
    pub fn tick_id(&self) -> TickId {
        self.state.tick_id()
    }

    /// Full read access to every buffer.
    pub fn state(&self) -> &FluidState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_validates_parameters() {
        assert!(FluidSim::init(16, 0.0, 0.0, 0.1).is_ok());
        match FluidSim::init(2, 0.0, 0.0, 0.1) {
            Err(ConfigError::Grid(GridError::ResolutionTooSmall { n: 2 })) => {}
            other => panic!("expected ResolutionTooSmall, got {:?}", other.map(|_| ())),
        }
        match FluidSim::init(16, 0.0, 0.0, 0.0) {
            Err(ConfigError::InvalidTimeStep { .. }) => {}
            other => panic!("expected InvalidTimeStep, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn out_of_range_injection_is_rejected() {
        let mut sim = FluidSim::init(4, 0.0, 0.0, 0.1).unwrap();
        assert_eq!(
            sim.inject_density(16, 1.0),
            Err(GridError::CellOutOfRange {
                cell: 16,
                cell_count: 16
            })
        );
        assert!(sim.inject_velocity(99, 1.0, 1.0).is_err());
        assert!(sim.density().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn apply_all_is_all_or_nothing() {
        let mut sim = FluidSim::init(4, 0.0, 0.0, 0.1).unwrap();
        let batch = [
            Impulse::Density {
                cell: 5,
                amount: 1.0,
            },
            Impulse::Velocity {
                cell: 400,
                dx: 1.0,
                dy: 0.0,
            },
        ];
        assert!(sim.apply_all(&batch).is_err());
        assert_eq!(sim.density()[5], 0.0);

        sim.apply_all(&batch[..1]).unwrap();
        assert_eq!(sim.density()[5], 1.0);
    }

    #[test]
    fn apply_routes_by_kind() {
        let mut sim = FluidSim::init(4, 0.0, 0.0, 0.1).unwrap();
        sim.apply(Impulse::Velocity {
            cell: 6,
            dx: 0.5,
            dy: -0.5,
        })
        .unwrap();
        let (u, v) = sim.velocity();
        assert_eq!((u[6], v[6]), (0.5, -0.5));
    }

    #[test]
    fn splat_covers_disk() {
        let mut sim = FluidSim::init(16, 0.0, 0.0, 0.1).unwrap();
        let c = sim.grid().center();
        let touched = sim
            .splat(
                c,
                1.0,
                Impulse::Density {
                    cell: 0,
                    amount: 2.0,
                },
            )
            .unwrap();
        assert_eq!(touched, 5);
        let total: f32 = sim.density().iter().sum();
        assert_eq!(total, 10.0);
        let (ci, cj) = sim.grid().coords(c);
        for cell in [c, c - 1, c + 1, sim.grid().index(ci, cj - 1), sim.grid().index(ci, cj + 1)] {
            assert_eq!(sim.density()[cell], 2.0);
        }
        assert_eq!(sim.density()[0], 0.0);

        let touched = sim
            .splat(
                c,
                1.0,
                Impulse::Velocity {
                    cell: 0,
                    dx: 0.5,
                    dy: -1.0,
                },
            )
            .unwrap();
        assert_eq!(touched, 5);
        let (u, v) = sim.velocity();
        assert_eq!((u[c + 1], v[c + 1]), (0.5, -1.0));
        assert_eq!((u[0], v[0]), (0.0, 0.0));
        assert!(sim.splat(10_000, 1.0, Impulse::Density { cell: 0, amount: 1.0 }).is_err());
    }

    #[test]
    fn configure_resizes_and_bumps_generation() {
        let mut sim = FluidSim::init(8, 0.0, 0.0, 0.1).unwrap();
        let cfg = sim.config().clone().with_resolution(10);
        assert_eq!(
            sim.configure(cfg),
            Ok(ConfigChange::Resized { from: 8, to: 10 })
        );
        assert_eq!(sim.generation(), GridGeneration(1));
        assert_eq!(sim.density().len(), 100);
    }
}

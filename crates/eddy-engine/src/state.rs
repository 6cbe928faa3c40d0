//! Owned simulation buffers and parameters.
//!
//! [`FluidState`] holds the six `N * N` fields together with the
//! [`FluidConfig`] that sized them. Buffers are only ever reallocated as a
//! set, so every field always has exactly `N * N` elements; there is no API
//! to replace an individual buffer.

use eddy_core::{FieldKind, GridGeneration, TickId};
use eddy_grid::{Grid, GridError};

use crate::config::{ConfigError, FluidConfig};

/// The six field buffers plus the parameters and counters they belong to.
#[derive(Clone, Debug)]
pub struct FluidState {
    pub(crate) config: FluidConfig,
    pub(crate) grid: Grid,
    pub(crate) velocity_x: Vec<f32>,
    pub(crate) velocity_y: Vec<f32>,
    pub(crate) prev_velocity_x: Vec<f32>,
    pub(crate) prev_velocity_y: Vec<f32>,
    pub(crate) density: Vec<f32>,
    pub(crate) prev_density: Vec<f32>,
    pub(crate) generation: GridGeneration,
    pub(crate) tick: TickId,
}

impl FluidState {
    /// Validate `config` and allocate six zero-filled buffers.
    pub fn new(config: FluidConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        Ok(Self {
            config,
            grid,
            velocity_x: grid.zeroed(),
            velocity_y: grid.zeroed(),
            prev_velocity_x: grid.zeroed(),
            prev_velocity_y: grid.zeroed(),
            density: grid.zeroed(),
            prev_density: grid.zeroed(),
            generation: GridGeneration::default(),
            tick: TickId::default(),
        })
    }

    /// Current parameters.
    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    /// Grid geometry.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Incremented on every reallocation.
    pub fn generation(&self) -> GridGeneration {
        self.generation
    }

    /// Ticks completed since the last reallocation.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Read-only view of one field.
    pub fn field(&self, kind: FieldKind) -> &[f32] {
        match kind {
            FieldKind::VelocityX => &self.velocity_x,
            FieldKind::VelocityY => &self.velocity_y,
            FieldKind::PrevVelocityX => &self.prev_velocity_x,
            FieldKind::PrevVelocityY => &self.prev_velocity_y,
            FieldKind::Density => &self.density,
            FieldKind::PrevDensity => &self.prev_density,
        }
    }

    /// Current density field.
    pub fn density(&self) -> &[f32] {
        &self.density
    }

    /// Current velocity components `(x, y)`.
    pub fn velocity(&self) -> (&[f32], &[f32]) {
        (&self.velocity_x, &self.velocity_y)
    }

    /// `density[cell] += amount`. `cell` must be in range.
    pub fn add_density(&mut self, cell: usize, amount: f32) {
        debug_assert!(cell < self.grid.cell_count());
        self.density[cell] += amount;
    }

    /// `velocity[cell] += (dx, dy)`. `cell` must be in range.
    pub fn add_velocity(&mut self, cell: usize, dx: f32, dy: f32) {
        debug_assert!(cell < self.grid.cell_count());
        self.velocity_x[cell] += dx;
        self.velocity_y[cell] += dy;
    }

    /// Zero every buffer at the current resolution.
    pub fn reset(&mut self) {
        self.reallocate(self.grid);
        tracing::debug!(n = self.grid.n(), generation = %self.generation, "state reset");
    }

    /// Reallocate zeroed buffers at side length `n`.
    ///
    /// Also updates the configured resolution. Fails without touching any
    /// buffer if `n` is not a valid grid size.
    pub fn resize(&mut self, n: usize) -> Result<(), GridError> {
        let grid = Grid::new(n)?;
        let from = self.grid.n();
        self.config.resolution = n;
        self.reallocate(grid);
        tracing::debug!(from, to = n, generation = %self.generation, "state resized");
        Ok(())
    }

    pub(crate) fn set_config(&mut self, config: FluidConfig) {
        self.config = config;
    }

    /// Replace all six buffers with zeroed ones for `grid` and start a new
    /// generation.
    pub(crate) fn reallocate(&mut self, grid: Grid) {
        self.grid = grid;
        for buf in [
            &mut self.velocity_x,
            &mut self.velocity_y,
            &mut self.prev_velocity_x,
            &mut self.prev_velocity_y,
            &mut self.density,
            &mut self.prev_density,
        ] {
            *buf = grid.zeroed();
        }
        self.generation = self.generation.next();
        self.tick = TickId::default();
    }
}

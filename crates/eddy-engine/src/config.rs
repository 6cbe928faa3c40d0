//! Simulation parameters, validation, and error types.
//!
//! [`FluidConfig`] is the value object every [`FluidSim`](crate::FluidSim)
//! is built from. [`apply_config`] is the only way to change parameters on
//! a live [`FluidState`]; it validates first and performs a resize when the
//! resolution changes, so a host UI can bind sliders to a `FluidConfig`
//! and push the whole value on every edit.

use std::error::Error;
use std::fmt;

use eddy_grid::{Grid, GridError};
use eddy_solver::DEFAULT_ITERATIONS;

use crate::state::FluidState;

// ── AdvectionPolicy ────────────────────────────────────────────────

/// Which velocity pair transports the vertical velocity component.
///
/// The horizontal component is always advected along the projected
/// previous-generation pair. The two policies differ only for the
/// vertical component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdvectionPolicy {
    /// Advect both components along the same `(prev_x, prev_y)` pair.
    #[default]
    Snapshot,
    /// Advect the vertical component along `(x, prev_y)`, where `x` has
    /// already been advected this tick.
    ///
    /// This transports the vertical component along the post-advection
    /// velocity pair. The two axes are no longer treated symmetrically.
    Sequential,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or applying a configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The resolution was rejected by [`Grid::new`].
    Grid(GridError),
    /// Time step is zero, negative, or not finite.
    InvalidTimeStep {
        /// The rejected value.
        value: f32,
    },
    /// Diffusion rate is negative or not finite.
    InvalidDiffusionRate {
        /// The rejected value.
        value: f32,
    },
    /// Viscosity is negative or not finite.
    InvalidViscosity {
        /// The rejected value.
        value: f32,
    },
    /// Relaxation iteration count is zero.
    ZeroIterations,
    /// Realtime tick rate is zero, negative, or not finite.
    InvalidTickRate {
        /// The rejected value.
        value: f64,
    },
    /// Realtime command channel capacity is zero.
    ZeroCommandCapacity,
    /// A background thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
    /// The simulation could not be recovered from the tick thread
    /// (the thread panicked).
    EngineRecoveryFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidTimeStep { value } => {
                write!(f, "time step must be finite and positive, got {value}")
            }
            Self::InvalidDiffusionRate { value } => {
                write!(f, "diffusion rate must be finite and >= 0, got {value}")
            }
            Self::InvalidViscosity { value } => {
                write!(f, "viscosity must be finite and >= 0, got {value}")
            }
            Self::ZeroIterations => write!(f, "relaxation iterations must be at least 1"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::ZeroCommandCapacity => write!(f, "command_capacity must be at least 1"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::EngineRecoveryFailed => {
                write!(f, "simulation could not be recovered from tick thread")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── FluidConfig ────────────────────────────────────────────────────

/// Complete parameter set for one simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct FluidConfig {
    /// Grid side length N. Minimum: 3. Default: 128.
    pub resolution: usize,
    /// Density diffusion rate. Default: 0.0.
    pub diffusion_rate: f32,
    /// Velocity diffusion rate. Default: 1e-7.
    pub viscosity: f32,
    /// Time step. Default: 0.2.
    pub dt: f32,
    /// Gauss-Seidel sweeps per relaxation. Default: 20.
    pub iterations: usize,
    /// Velocity pair used to advect the vertical component.
    pub advection: AdvectionPolicy,
    /// Scan every field for NaN/infinity after each tick and report the
    /// first hit as a [`StepError`](crate::StepError). Default: off.
    pub nan_sentinel: bool,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            resolution: 128,
            diffusion_rate: 0.0,
            viscosity: 0.000_000_1,
            dt: 0.2,
            iterations: DEFAULT_ITERATIONS,
            advection: AdvectionPolicy::Snapshot,
            nan_sentinel: false,
        }
    }
}

impl FluidConfig {
    /// Set the grid side length.
    pub fn with_resolution(mut self, n: usize) -> Self {
        self.resolution = n;
        self
    }

    /// Set the density diffusion rate.
    pub fn with_diffusion_rate(mut self, rate: f32) -> Self {
        self.diffusion_rate = rate;
        self
    }

    /// Set the viscosity.
    pub fn with_viscosity(mut self, viscosity: f32) -> Self {
        self.viscosity = viscosity;
        self
    }

    /// Set the time step.
    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Set the relaxation iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the advection policy.
    pub fn with_advection(mut self, policy: AdvectionPolicy) -> Self {
        self.advection = policy;
        self
    }

    /// Enable or disable the non-finite sentinel.
    pub fn with_nan_sentinel(mut self, enabled: bool) -> Self {
        self.nan_sentinel = enabled;
        self
    }

    /// Validate every parameter and return the grid it describes.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::new(self.resolution)?;
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        if !self.diffusion_rate.is_finite() || self.diffusion_rate < 0.0 {
            return Err(ConfigError::InvalidDiffusionRate {
                value: self.diffusion_rate,
            });
        }
        if !self.viscosity.is_finite() || self.viscosity < 0.0 {
            return Err(ConfigError::InvalidViscosity {
                value: self.viscosity,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(grid)
    }
}

// ── RealtimeConfig ─────────────────────────────────────────────────

/// Configuration for [`RealtimeFluid`](crate::realtime::RealtimeFluid).
#[derive(Clone, Debug, PartialEq)]
pub struct RealtimeConfig {
    /// Target ticks per second. Default: 60.
    pub tick_rate_hz: f64,
    /// Bounded command channel capacity, in batches. Default: 64.
    pub command_capacity: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            command_capacity: 64,
        }
    }
}

impl RealtimeConfig {
    /// Validate the tick rate and channel capacity.
    ///
    /// Rejects rates whose reciprocal is not finite (subnormals), which
    /// would otherwise panic inside `Duration::from_secs_f64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hz = self.tick_rate_hz;
        if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
            return Err(ConfigError::InvalidTickRate { value: hz });
        }
        if self.command_capacity == 0 {
            return Err(ConfigError::ZeroCommandCapacity);
        }
        Ok(())
    }
}

// ── apply_config ───────────────────────────────────────────────────

/// Outcome of [`apply_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigChange {
    /// The new configuration equals the current one.
    Unchanged,
    /// Scalar parameters changed; buffers were left intact.
    Parameters,
    /// The resolution changed; all buffers were reallocated and zeroed.
    Resized {
        /// Previous side length.
        from: usize,
        /// New side length.
        to: usize,
    },
}

/// Validate `new` and install it on `state`.
///
/// A resolution change reallocates and zeroes every buffer and bumps the
/// grid generation. On error `state` is left untouched.
pub fn apply_config(state: &mut FluidState, new: FluidConfig) -> Result<ConfigChange, ConfigError> {
    let grid = new.validate()?;
    if *state.config() == new {
        return Ok(ConfigChange::Unchanged);
    }

    let from = state.grid().n();
    let to = grid.n();
    state.set_config(new);
    if from != to {
        state.reallocate(grid);
        tracing::debug!(from, to, "resolution changed");
        Ok(ConfigChange::Resized { from, to })
    } else {
        tracing::debug!(config = ?state.config(), "parameters updated");
        Ok(ConfigChange::Parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let grid = FluidConfig::default().validate().unwrap();
        assert_eq!(grid.n(), 128);
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = FluidConfig::default()
            .with_resolution(32)
            .with_diffusion_rate(0.01)
            .with_viscosity(0.02)
            .with_dt(0.05)
            .with_iterations(7)
            .with_advection(AdvectionPolicy::Sequential)
            .with_nan_sentinel(true);
        assert_eq!(cfg.resolution, 32);
        assert_eq!(cfg.diffusion_rate, 0.01);
        assert_eq!(cfg.viscosity, 0.02);
        assert_eq!(cfg.dt, 0.05);
        assert_eq!(cfg.iterations, 7);
        assert_eq!(cfg.advection, AdvectionPolicy::Sequential);
        assert!(cfg.nan_sentinel);
    }

    #[test]
    fn validate_small_resolution_fails() {
        match FluidConfig::default().with_resolution(2).validate() {
            Err(ConfigError::Grid(GridError::ResolutionTooSmall { n: 2 })) => {}
            other => panic!("expected Grid(ResolutionTooSmall), got {other:?}"),
        }
    }

    #[test]
    fn validate_bad_dt_fails() {
        for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            match FluidConfig::default().with_dt(dt).validate() {
                Err(ConfigError::InvalidTimeStep { .. }) => {}
                other => panic!("expected InvalidTimeStep for {dt}, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_negative_rates_fail() {
        match FluidConfig::default().with_diffusion_rate(-0.1).validate() {
            Err(ConfigError::InvalidDiffusionRate { value }) => assert_eq!(value, -0.1),
            other => panic!("expected InvalidDiffusionRate, got {other:?}"),
        }
        match FluidConfig::default().with_viscosity(f32::NAN).validate() {
            Err(ConfigError::InvalidViscosity { .. }) => {}
            other => panic!("expected InvalidViscosity, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_iterations_fails() {
        assert_eq!(
            FluidConfig::default().with_iterations(0).validate(),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn realtime_config_validation() {
        assert!(RealtimeConfig::default().validate().is_ok());
        let bad_rate = RealtimeConfig {
            tick_rate_hz: 0.0,
            ..RealtimeConfig::default()
        };
        assert_eq!(
            bad_rate.validate(),
            Err(ConfigError::InvalidTickRate { value: 0.0 })
        );
        let subnormal = RealtimeConfig {
            tick_rate_hz: f64::MIN_POSITIVE / 1024.0,
            ..RealtimeConfig::default()
        };
        assert!(matches!(
            subnormal.validate(),
            Err(ConfigError::InvalidTickRate { .. })
        ));
        let zero_cap = RealtimeConfig {
            command_capacity: 0,
            ..RealtimeConfig::default()
        };
        assert_eq!(zero_cap.validate(), Err(ConfigError::ZeroCommandCapacity));
    }

    #[test]
    fn error_source_chains_grid_error() {
        let e = ConfigError::from(GridError::ResolutionTooSmall { n: 1 });
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("grid: "));
        assert!(ConfigError::ZeroIterations.source().is_none());
    }

    #[test]
    fn apply_config_reports_changes() {
        let mut state = FluidState::new(FluidConfig::default().with_resolution(8)).unwrap();
        let same = state.config().clone();
        assert_eq!(apply_config(&mut state, same), Ok(ConfigChange::Unchanged));

        let faster = state.config().clone().with_dt(0.5);
        assert_eq!(apply_config(&mut state, faster), Ok(ConfigChange::Parameters));
        assert_eq!(state.config().dt, 0.5);

        let bigger = state.config().clone().with_resolution(12);
        assert_eq!(
            apply_config(&mut state, bigger),
            Ok(ConfigChange::Resized { from: 8, to: 12 })
        );
        assert_eq!(state.grid().n(), 12);
        assert_eq!(state.density().len(), 144);
    }

    #[test]
    fn apply_config_rejects_without_mutating() {
        let mut state = FluidState::new(FluidConfig::default().with_resolution(8)).unwrap();
        state.add_density(20, 1.0);
        let bad = state.config().clone().with_resolution(2).with_dt(0.9);
        assert!(apply_config(&mut state, bad).is_err());
        assert_eq!(state.grid().n(), 8);
        assert_eq!(state.config().dt, 0.2);
        assert_eq!(state.density()[20], 1.0);
    }

    #[test]
    fn parameter_change_keeps_buffers() {
        let mut state = FluidState::new(FluidConfig::default().with_resolution(8)).unwrap();
        state.add_density(20, 3.0);
        let generation = state.generation();
        let cfg = state.config().clone().with_viscosity(0.1);
        apply_config(&mut state, cfg).unwrap();
        assert_eq!(state.density()[20], 3.0);
        assert_eq!(state.generation(), generation);
    }
}

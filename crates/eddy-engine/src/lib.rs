//! Step orchestration for the Eddy fluid solver.
//!
//! Owns the six simulation buffers ([`FluidState`]), sequences the
//! solver operators into a tick ([`tick::step`]), and exposes them through
//! a lockstep facade ([`FluidSim`]) and a fixed-rate background loop
//! ([`RealtimeFluid`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod realtime;
pub mod sim;
pub mod state;
pub mod tick;

pub use config::{
    apply_config, AdvectionPolicy, ConfigChange, ConfigError, FluidConfig, RealtimeConfig,
};
pub use metrics::{StepMetrics, STAGES};
pub use realtime::{Command, DensityFrame, RealtimeFluid, SubmitError};
pub use sim::FluidSim;
pub use state::FluidState;
pub use tick::StepError;

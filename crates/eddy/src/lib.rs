//! Eddy: an incompressible 2D fluid solver built on Stam's Stable Fluids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Eddy sub-crates. For most users, adding `eddy` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! let mut sim = FluidSim::new(FluidConfig::default().with_resolution(48)).unwrap();
//! let pointer = PointerMapper::new(sim.grid(), 480, 480).unwrap();
//!
//! // Drag the pointer right across the middle of the canvas.
//! for step in 0..10 {
//!     let x = 200.0 + step as f32 * 8.0;
//!     let batch = pointer.drag((x - 8.0, 240.0), (x, 240.0), 80.0);
//!     sim.apply_all(&batch).unwrap();
//!     sim.tick().unwrap();
//! }
//!
//! let opts = RenderOptions::canvas(480, 480);
//! let mut pixels = vec![0u8; opts.luma_len()];
//! render_luma(sim.density(), &sim.grid(), &opts, &mut pixels).unwrap();
//! assert!(pixels.iter().any(|&p| p > 0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eddy-core` | Boundary tags, field names, ids, impulses |
//! | [`grid`] | `eddy-grid` | Lattice geometry and brush regions |
//! | [`solver`] | `eddy-solver` | Boundary, diffusion, projection, advection operators |
//! | [`engine`] | `eddy-engine` | Configuration, tick orchestration, lockstep and realtime drivers |
//! | [`render`] | `eddy-render` | Density rendering and pointer mapping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`eddy-core`).
pub use eddy_core as types;

/// Grid geometry (`eddy-grid`).
///
/// [`grid::Grid`] carries the side length and all index arithmetic;
/// [`grid::disk`] compiles circular brushes.
pub use eddy_grid as grid;

/// Stable Fluids operators (`eddy-solver`).
///
/// Use these directly to build a custom pipeline; most users want
/// [`engine::FluidSim`] instead.
pub use eddy_solver as solver;

/// Simulation drivers (`eddy-engine`).
///
/// [`engine::FluidSim`] for synchronous stepping,
/// [`engine::RealtimeFluid`] for fixed-rate background ticking.
pub use eddy_engine as engine;

/// Host-side rendering and input mapping (`eddy-render`).
pub use eddy_render as render;

/// Common imports for typical Eddy usage.
///
/// ```rust
/// use eddy::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use eddy_core::{Boundary, FieldKind, GridGeneration, Impulse, TickId};

    // Geometry
    pub use eddy_grid::{Grid, GridError};

    // Engine
    pub use eddy_engine::{
        AdvectionPolicy, Command, ConfigChange, ConfigError, DensityFrame, FluidConfig, FluidSim,
        RealtimeConfig, RealtimeFluid, StepError, StepMetrics, SubmitError,
    };

    // Rendering and input
    pub use eddy_render::{render_luma, render_rgba, PointerMapper, RenderError, RenderOptions};
}

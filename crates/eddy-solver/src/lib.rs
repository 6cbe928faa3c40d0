//! Stable Fluids operators for the Eddy fluid solver.
//!
//! Every operator works on flat `N * N` buffers described by an
//! [`eddy_grid::Grid`] and mutates its destination in place. None of them
//! allocate or fail: divisors are always positive and interpolation
//! stencils are clamped to addressable cells.
//!
//! # Operators
//!
//! - [`enforce`]: derive the boundary ring of a field from its interior
//!   according to a [`Boundary`](eddy_core::Boundary) tag.
//! - [`gauss_seidel`]: the shared relaxation kernel.
//! - [`diffuse`]: implicit diffusion, unconditionally stable.
//! - [`project`]: remove the divergent part of a velocity field.
//! - [`advect`]: semi-Lagrangian transport with bilinear sampling.
//!
//! # Per-tick order
//!
//! The engine sequences these as: diffuse velocity → project → advect
//! velocity → project → diffuse density → advect density. Relaxation
//! sweeps are sequential dependencies and run single-threaded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advection;
pub mod boundary;
pub mod diagnostics;
pub mod diffusion;
pub mod projection;
pub mod relax;

pub use advection::advect;
pub use boundary::enforce;
pub use diffusion::diffuse;
pub use projection::project;
pub use relax::{gauss_seidel, DEFAULT_ITERATIONS};

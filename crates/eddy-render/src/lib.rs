//! Host-side collaborators for the Eddy fluid solver.
//!
//! The solver produces an `N * N` density field and consumes impulses
//! addressed by flat cell index. This crate converts in both directions:
//!
//! - [`render_luma`] / [`render_rgba`] upsample a density field onto a
//!   pixel canvas.
//! - [`PointerMapper`] turns canvas pointer positions and drags into
//!   [`Impulse`](eddy_core::Impulse)s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pointer;
pub mod raster;

pub use error::RenderError;
pub use pointer::{DragImpulses, PointerMapper};
pub use raster::{render_luma, render_rgba, RenderOptions};

//! Square lattice geometry for the Eddy fluid solver.
//!
//! [`Grid`] carries the resolution `N` of a square `N x N` lattice and all
//! index arithmetic the solver needs: flat indexing (`i + j * N`),
//! boundary/interior classification, and clamped addressing for
//! interpolation stencils. [`region`] compiles brush shapes into cell lists
//! for impulse injection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod region;

pub use error::GridError;
pub use grid::Grid;
pub use region::{disk, BrushCells};

//! Core types for the Eddy fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: the boundary
//! tag that selects an edge condition, the names of the six solver buffers,
//! tick and generation counters, and the impulse commands a host uses to
//! stir the fluid between ticks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod field;
pub mod id;
pub mod impulse;

pub use boundary::Boundary;
pub use error::BoundaryTagError;
pub use field::FieldKind;
pub use id::{GridGeneration, TickId};
pub use impulse::Impulse;

//! Error types shared across the Eddy workspace.

use std::error::Error;
use std::fmt;

/// A raw boundary tag outside the recognised set `{0, 1, 2}`.
///
/// Returned by `Boundary::try_from(u8)`. Invalid tags are rejected at
/// conversion time so the solver only ever sees a valid
/// [`Boundary`](crate::Boundary).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryTagError {
    /// The rejected tag value.
    pub tag: u8,
}

impl fmt::Display for BoundaryTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid boundary tag {}: expected 0 (scalar), 1 (mirror vertical) or 2 (mirror horizontal)",
            self.tag
        )
    }
}

impl Error for BoundaryTagError {}

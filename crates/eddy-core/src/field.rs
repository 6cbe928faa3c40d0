//! Names for the six solver buffers.

use std::fmt;

use crate::boundary::Boundary;

/// Identifies one of the six per-cell buffers owned by the fluid state.
///
/// Used for error reporting (e.g. which buffer went non-finite) and for
/// tracing output. The buffers themselves live in `eddy-engine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Current x-velocity component.
    VelocityX,
    /// Current y-velocity component.
    VelocityY,
    /// Working / previous-generation x-velocity.
    PrevVelocityX,
    /// Working / previous-generation y-velocity.
    PrevVelocityY,
    /// Scalar density (the rendered quantity).
    Density,
    /// Density scratch buffer.
    PrevDensity,
}

impl FieldKind {
    /// All buffers in storage order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::VelocityX,
        FieldKind::VelocityY,
        FieldKind::PrevVelocityX,
        FieldKind::PrevVelocityY,
        FieldKind::Density,
        FieldKind::PrevDensity,
    ];

    /// Stable lowercase name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::VelocityX => "velocity_x",
            Self::VelocityY => "velocity_y",
            Self::PrevVelocityX => "prev_velocity_x",
            Self::PrevVelocityY => "prev_velocity_y",
            Self::Density => "density",
            Self::PrevDensity => "prev_density",
        }
    }

    /// The edge condition this buffer is enforced with during a tick.
    pub fn boundary(self) -> Boundary {
        match self {
            Self::VelocityX | Self::PrevVelocityX => Boundary::MirrorVertical,
            Self::VelocityY | Self::PrevVelocityY => Boundary::MirrorHorizontal,
            Self::Density | Self::PrevDensity => Boundary::Scalar,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

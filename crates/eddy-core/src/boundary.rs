//! The [`Boundary`] tag selecting how edge cells are derived from the interior.

use crate::error::BoundaryTagError;

/// Edge condition applied to a field after every relaxation sweep and
/// after advection.
///
/// The discriminants match the integer tags used by the classic
/// Stable Fluids formulation (`0`, `1`, `2`), so hosts that still speak
/// raw tags can convert with [`Boundary::try_from`].
///
/// # Examples
///
/// ```
/// use eddy_core::Boundary;
///
/// assert_eq!(Boundary::try_from(1u8), Ok(Boundary::MirrorVertical));
/// assert!(Boundary::try_from(7u8).is_err());
/// assert_eq!(Boundary::MirrorHorizontal as u8, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Boundary {
    /// Zero-gradient (Neumann) on every wall: edge cells copy their
    /// one-in neighbour. Used for density, pressure and divergence.
    #[default]
    Scalar = 0,
    /// Negated at the left/right walls, so the normal component vanishes
    /// at a vertical wall. Used for the x-velocity component.
    MirrorVertical = 1,
    /// Negated at the top/bottom walls. Used for the y-velocity component.
    MirrorHorizontal = 2,
}

impl Boundary {
    /// All tags in discriminant order.
    pub const ALL: [Boundary; 3] = [
        Boundary::Scalar,
        Boundary::MirrorVertical,
        Boundary::MirrorHorizontal,
    ];

    /// Sign applied to the one-in neighbour on the left/right columns.
    #[inline]
    pub fn column_sign(self) -> f32 {
        match self {
            Self::MirrorVertical => -1.0,
            Self::Scalar | Self::MirrorHorizontal => 1.0,
        }
    }

    /// Sign applied to the one-in neighbour on the top/bottom rows.
    #[inline]
    pub fn row_sign(self) -> f32 {
        match self {
            Self::MirrorHorizontal => -1.0,
            Self::Scalar | Self::MirrorVertical => 1.0,
        }
    }
}

impl TryFrom<u8> for Boundary {
    type Error = BoundaryTagError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Scalar),
            1 => Ok(Self::MirrorVertical),
            2 => Ok(Self::MirrorHorizontal),
            other => Err(BoundaryTagError { tag: other }),
        }
    }
}

impl From<Boundary> for u8 {
    fn from(b: Boundary) -> Self {
        b as u8
    }
}

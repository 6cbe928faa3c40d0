//! Impulse commands applied to the fluid between ticks.

/// A direct buffer increment requested by an input collaborator.
///
/// Impulses are applied strictly between ticks. `cell` is a flat index
/// `i + j * N`; range checking happens where the impulse is applied.
///
/// # Examples
///
/// ```
/// use eddy_core::Impulse;
///
/// let drag = [
///     Impulse::Density { cell: 1275, amount: 100.0 },
///     Impulse::Velocity { cell: 1275, dx: 0.4, dy: -0.1 },
/// ];
/// assert_eq!(drag[0].cell(), 1275);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Impulse {
    /// Add `amount` to `density[cell]`.
    Density {
        /// Flat cell index.
        cell: usize,
        /// Amount of density to add.
        amount: f32,
    },
    /// Add `(dx, dy)` to `(velocity_x[cell], velocity_y[cell])`.
    Velocity {
        /// Flat cell index.
        cell: usize,
        /// x-velocity increment.
        dx: f32,
        /// y-velocity increment.
        dy: f32,
    },
}

impl Impulse {
    /// The flat cell index this impulse targets.
    pub fn cell(&self) -> usize {
        match *self {
            Self::Density { cell, .. } | Self::Velocity { cell, .. } => cell,
        }
    }

    /// The same impulse retargeted at another cell.
    pub fn at(self, cell: usize) -> Self {
        match self {
            Self::Density { amount, .. } => Self::Density { cell, amount },
            Self::Velocity { dx, dy, .. } => Self::Velocity { cell, dx, dy },
        }
    }
}

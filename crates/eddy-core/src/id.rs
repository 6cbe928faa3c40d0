//! Strongly-typed counters.

use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step. Reset to zero
/// whenever the buffers are reallocated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counts buffer reallocations (initialization, `reset`, `resize`).
///
/// Each reallocation is an irreversible discontinuity in the state
/// sequence; observers compare generations to detect it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridGeneration(pub u64);

impl GridGeneration {
    /// The generation after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GridGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GridGeneration {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

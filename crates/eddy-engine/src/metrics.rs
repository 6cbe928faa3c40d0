//! Per-tick timing for the step orchestrator.
//!
//! [`StepMetrics`] records the wall time of every pipeline stage in the
//! order the stages ran, so a profiler or HUD can print them as-is.

use indexmap::IndexMap;

use eddy_core::TickId;

/// Stage names in pipeline order.
pub const STAGES: [&str; 6] = [
    "diffuse_velocity",
    "project_diffused",
    "advect_velocity",
    "project_advected",
    "diffuse_density",
    "advect_density",
];

/// Timing collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Tick this measurement belongs to (1-based within a generation).
    pub tick: TickId,
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Per-stage wall-clock time, keyed by the names in [`STAGES`].
    pub stage_us: IndexMap<&'static str, u64>,
}

impl StepMetrics {
    /// Time spent in `stage`, if it ran.
    pub fn stage(&self, stage: &str) -> Option<u64> {
        self.stage_us.get(stage).copied()
    }

    /// Sum of all recorded stage times.
    pub fn stages_total_us(&self) -> u64 {
        self.stage_us.values().sum()
    }
}

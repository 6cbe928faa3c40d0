//! Benchmark profiles and input scripts for the Eddy fluid solver.
//!
//! - [`reference_profile`]: 128x128 grid, default parameters
//! - [`stress_profile`]: 256x256 grid for stress testing
//! - [`drag_script`]: deterministic pointer drags circling the tank

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eddy_core::Impulse;
use eddy_engine::{FluidConfig, FluidSim};
use eddy_render::PointerMapper;

/// Canvas side used by [`drag_script`], in pixels.
pub const CANVAS: usize = 512;

/// Reference benchmark profile: 128x128 grid (16K cells).
pub fn reference_profile() -> FluidConfig {
    FluidConfig::default().with_resolution(128)
}

/// Stress benchmark profile: 256x256 grid (64K cells).
///
/// Same parameters as [`reference_profile`] at four times the cell count.
pub fn stress_profile() -> FluidConfig {
    FluidConfig::default().with_resolution(256)
}

/// Impulses for `frames` pointer moves around a circle of radius
/// `CANVAS / 4` centred on the canvas, one batch per frame.
///
/// Each batch comes from [`PointerMapper::drag`], so it holds a density
/// impulse and (for a moving pointer) a velocity impulse.
pub fn drag_script(mapper: &PointerMapper, frames: usize, amount: f32) -> Vec<Vec<Impulse>> {
    let centre = CANVAS as f32 / 2.0;
    let radius = CANVAS as f32 / 4.0;
    let at = |k: usize| {
        let angle = k as f32 * 0.05;
        (centre + radius * angle.cos(), centre + radius * angle.sin())
    };
    (0..frames)
        .map(|k| mapper.drag(at(k), at(k + 1), amount).into_vec())
        .collect()
}

/// Build a simulation from `config` and run `warmup` scripted ticks so
/// benchmarks start from a stirred, non-trivial flow.
pub fn warmed_sim(config: FluidConfig, warmup: usize) -> Result<FluidSim, Box<dyn std::error::Error>> {
    let mut sim = FluidSim::new(config)?;
    let mapper = PointerMapper::new(sim.grid(), CANVAS, CANVAS)?;
    for batch in drag_script(&mapper, warmup, 50.0) {
        sim.apply_all(&batch)?;
        sim.tick()?;
    }
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert_eq!(reference_profile().validate().unwrap().n(), 128);
        assert_eq!(stress_profile().validate().unwrap().n(), 256);
    }

    #[test]
    fn drag_script_is_deterministic_and_in_range() {
        let grid = reference_profile().validate().unwrap();
        let mapper = PointerMapper::new(grid, CANVAS, CANVAS).unwrap();
        let a = drag_script(&mapper, 50, 10.0);
        let b = drag_script(&mapper, 50, 10.0);
        assert_eq!(a, b);
        for batch in &a {
            assert_eq!(batch.len(), 2);
            for imp in batch {
                assert!(imp.cell() < grid.cell_count());
            }
        }
    }

    #[test]
    fn warmed_sim_has_density() {
        let sim = warmed_sim(FluidConfig::default().with_resolution(32), 10).unwrap();
        assert!(sim.density().iter().any(|&d| d > 0.0));
    }
}

//! Eddy quickstart: stir a small tank and print it as ASCII.
//!
//! Demonstrates:
//!   1. Building a `FluidConfig` and `FluidSim`
//!   2. Injecting density and velocity with a brush
//!   3. Stepping and reading per-stage metrics
//!   4. Changing parameters live with `configure`
//!
//! Run with:
//!   RUST_LOG=eddy_engine=debug cargo run --example quickstart

use eddy_core::Impulse;
use eddy_engine::{ConfigChange, FluidConfig, FluidSim};
use tracing_subscriber::EnvFilter;

// ─── Parameters ─────────────────────────────────────────────────

const N: usize = 40;
const TICKS: usize = 60;
const BRUSH_RADIUS: f32 = 2.0;

// Darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

fn print_density(sim: &FluidSim) {
    let grid = sim.grid();
    let density = sim.density();
    let peak = density.iter().fold(0.0f32, |m, &x| m.max(x)).max(1e-6);
    for j in (0..grid.n()).step_by(2) {
        let row: String = (0..grid.n())
            .map(|i| {
                let level = (density[grid.index(i, j)] / peak).clamp(0.0, 1.0);
                let idx = (level * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[idx] as char
            })
            .collect();
        println!("{row}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = FluidConfig::default()
        .with_resolution(N)
        .with_diffusion_rate(0.0001)
        .with_dt(0.1);
    let mut sim = FluidSim::new(config)?;

    // A source on the left edge pushing right and slightly down.
    let source = sim.grid().index(6, N / 2);
    let mut slowest = ("", 0u64);
    for tick in 0..TICKS {
        if tick < TICKS / 2 {
            sim.splat(source, BRUSH_RADIUS, Impulse::Density { cell: source, amount: 8.0 })?;
            sim.splat(
                source,
                BRUSH_RADIUS,
                Impulse::Velocity {
                    cell: source,
                    dx: 0.4,
                    dy: 0.05,
                },
            )?;
        }
        let metrics = sim.tick()?;
        for (&stage, &us) in &metrics.stage_us {
            if us > slowest.1 {
                slowest = (stage, us);
            }
        }
    }

    print_density(&sim);
    println!();
    println!(
        "tick {} | slowest stage: {} ({} us)",
        sim.tick_id(),
        slowest.0,
        slowest.1
    );

    // Parameter tweak keeps the flow; a resolution change starts over.
    let thicker = sim.config().clone().with_viscosity(0.001);
    assert_eq!(sim.configure(thicker)?, ConfigChange::Parameters);
    let bigger = sim.config().clone().with_resolution(N * 2);
    if let ConfigChange::Resized { from, to } = sim.configure(bigger)? {
        println!("resized {from} -> {to}, generation {}", sim.generation());
    }

    Ok(())
}

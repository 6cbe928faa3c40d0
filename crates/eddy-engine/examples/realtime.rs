//! Run the solver on its own thread and sample frames from the host.
//!
//! A scripted "pointer" circles the tank, submitting a density and a
//! velocity impulse every 10 ms. The host prints the total density of each
//! new frame it sees.
//!
//! Run with:
//!   RUST_LOG=eddy_engine=info cargo run --example realtime

use std::thread;
use std::time::Duration;

use eddy_core::Impulse;
use eddy_engine::{Command, FluidSim, RealtimeConfig, RealtimeFluid};
use tracing_subscriber::EnvFilter;

const N: usize = 64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sim = FluidSim::init(N, 0.0, 0.000_000_1, 0.2)?;
    let rt = RealtimeFluid::start(sim, RealtimeConfig::default())?;

    let centre = N as f32 / 2.0;
    let mut last_tick = None;
    for step in 0..100u32 {
        let angle = step as f32 * 0.12;
        let i = (centre + angle.cos() * N as f32 / 4.0) as usize;
        let j = (centre + angle.sin() * N as f32 / 4.0) as usize;
        let cell = i + j * N;
        rt.submit(vec![
            Command::Impulse(Impulse::Density { cell, amount: 60.0 }),
            Command::Impulse(Impulse::Velocity {
                cell,
                dx: -angle.sin() * 2.0,
                dy: angle.cos() * 2.0,
            }),
        ])?;

        if let Some(frame) = rt.latest_frame() {
            if last_tick != Some(frame.tick) {
                let total: f32 = frame.density.iter().sum();
                println!("tick {:>4}  total density {total:>10.2}", frame.tick.0);
                last_tick = Some(frame.tick);
            }
        }
        thread::sleep(Duration::from_millis(10));
    }

    let sim = rt.shutdown()?;
    println!("stopped after {} ticks", sim.tick_id());
    Ok(())
}

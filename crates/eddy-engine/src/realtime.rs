//! Realtime tick loop on a dedicated background thread.
//!
//! [`RealtimeFluid`] moves a [`FluidSim`] onto a thread named `eddy-tick`
//! that ticks at a fixed rate. Input collaborators push [`Command`]
//! batches through a bounded channel; the tick thread drains them between
//! ticks and publishes a copy of the density field after each tick.
//!
//! ```text
//! Host thread                      Tick thread
//!     |                                |
//!     |--submit(cmds)------------------>| cmd_rx.try_recv()  (drain)
//!     |   [cmd_tx: bounded(capacity)]  | sim.tick()
//!     |                                | publish DensityFrame
//!     |<--latest_frame()---------------| park(budget - elapsed)
//!     |                                |
//!     |--shutdown()-------------------->| flag + unpark, join -> FluidSim
//! ```
//!
//! The solver itself stays single-threaded; the thread only owns it.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use eddy_core::{GridGeneration, Impulse, TickId};

use crate::config::{ConfigError, FluidConfig, RealtimeConfig};
use crate::sim::FluidSim;

// ── Commands ─────────────────────────────────────────────────────

/// Work item applied by the tick thread between ticks.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Apply one impulse.
    Impulse(Impulse),
    /// Zero all buffers.
    Reset,
    /// Reallocate at a new side length.
    Resize(usize),
    /// Install new parameters (may resize).
    Configure(FluidConfig),
}

/// Error submitting commands to the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread has shut down.
    Shutdown,
    /// The command channel is full (back-pressure).
    ChannelFull,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "command channel full"),
        }
    }
}

impl Error for SubmitError {}

// ── DensityFrame ─────────────────────────────────────────────────

/// Density published after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityFrame {
    /// Tick that produced this frame.
    pub tick: TickId,
    /// Grid generation the frame belongs to.
    pub generation: GridGeneration,
    /// Grid side length.
    pub n: usize,
    /// `n * n` density values.
    pub density: Vec<f32>,
}

type FrameSlot = Arc<Mutex<Option<Arc<DensityFrame>>>>;

// ── Tick thread ──────────────────────────────────────────────────

struct TickLoop {
    sim: FluidSim,
    cmd_rx: Receiver<Vec<Command>>,
    frame: FrameSlot,
    shutdown: Arc<AtomicBool>,
    budget: Duration,
}

impl TickLoop {
    fn run(mut self) -> FluidSim {
        loop {
            if self.shutdown.load(Ordering::Acquire) {
                break;
            }
            let tick_start = Instant::now();

            self.drain_commands();

            if let Err(e) = self.sim.tick() {
                tracing::warn!(error = %e, "tick failed, resetting simulation");
                self.sim.reset();
            }
            self.publish();

            let elapsed = tick_start.elapsed();
            match self.budget.checked_sub(elapsed) {
                Some(remaining) => self.idle(tick_start + self.budget, remaining),
                None => tracing::warn!(
                    elapsed_us = elapsed.as_micros() as u64,
                    budget_us = self.budget.as_micros() as u64,
                    "tick overran its budget"
                ),
            }
        }
        self.sim
    }

    fn drain_commands(&mut self) {
        while let Ok(batch) = self.cmd_rx.try_recv() {
            for command in batch {
                self.execute(command);
            }
        }
    }

    fn execute(&mut self, command: Command) {
        let result = match command {
            Command::Impulse(impulse) => self.sim.apply(impulse).map_err(ConfigError::from),
            Command::Reset => {
                self.sim.reset();
                Ok(())
            }
            Command::Resize(n) => self.sim.resize(n).map_err(ConfigError::from),
            Command::Configure(config) => self.sim.configure(config).map(|_| ()),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "command rejected");
        }
    }

    fn publish(&self) {
        let frame = Arc::new(DensityFrame {
            tick: self.sim.tick_id(),
            generation: self.sim.generation(),
            n: self.sim.grid().n(),
            density: self.sim.density().to_vec(),
        });
        let mut slot = match self.frame.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(frame);
    }

    /// Park until `deadline`, waking early on shutdown. `park_timeout`
    /// may return spuriously, so the deadline is rechecked.
    fn idle(&self, deadline: Instant, mut remaining: Duration) {
        while !remaining.is_zero() && !self.shutdown.load(Ordering::Acquire) {
            thread::park_timeout(remaining);
            remaining = deadline.saturating_duration_since(Instant::now());
        }
    }
}

// ── RealtimeFluid ────────────────────────────────────────────────

/// A [`FluidSim`] ticking at a fixed rate on a background thread.
///
/// Dropping a `RealtimeFluid` stops and joins the thread; use
/// [`shutdown()`](Self::shutdown) to get the simulation back.
pub struct RealtimeFluid {
    cmd_tx: Option<Sender<Vec<Command>>>,
    frame: FrameSlot,
    shutdown: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<FluidSim>>,
    config: RealtimeConfig,
}

impl RealtimeFluid {
    /// Validate `config`, move `sim` onto a new tick thread and start it.
    pub fn start(sim: FluidSim, config: RealtimeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let budget = Duration::from_secs_f64(1.0 / config.tick_rate_hz);
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(config.command_capacity);
        let frame: FrameSlot = Arc::new(Mutex::new(None));
        let shutdown = Arc::new(AtomicBool::new(false));
        let n = sim.grid().n();

        let tick_loop = TickLoop {
            sim,
            cmd_rx,
            frame: Arc::clone(&frame),
            shutdown: Arc::clone(&shutdown),
            budget,
        };
        let tick_thread = thread::Builder::new()
            .name("eddy-tick".into())
            .spawn(move || tick_loop.run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("eddy-tick: {e}"),
            })?;

        tracing::info!(n, tick_rate_hz = config.tick_rate_hz, "realtime loop started");
        Ok(Self {
            cmd_tx: Some(cmd_tx),
            frame,
            shutdown,
            tick_thread: Some(tick_thread),
            config,
        })
    }

    /// Queue a batch of commands for the next tick.
    ///
    /// Never blocks. Commands that fail validation on the tick thread are
    /// logged and skipped.
    pub fn submit(&self, commands: Vec<Command>) -> Result<(), SubmitError> {
        let cmd_tx = self.cmd_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        cmd_tx.try_send(commands).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::ChannelFull,
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })
    }

    /// Most recently published frame, or `None` before the first tick.
    pub fn latest_frame(&self) -> Option<Arc<DensityFrame>> {
        match self.frame.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The configuration the loop was started with.
    pub fn config(&self) -> &RealtimeConfig {
        &self.config
    }

    /// Whether the tick thread is still running.
    pub fn is_running(&self) -> bool {
        self.tick_thread
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the tick thread and recover the simulation.
    ///
    /// Commands still queued are discarded.
    pub fn shutdown(mut self) -> Result<FluidSim, ConfigError> {
        let sim = self.stop();
        tracing::info!("realtime loop shut down");
        sim.ok_or(ConfigError::EngineRecoveryFailed)
    }

    fn stop(&mut self) -> Option<FluidSim> {
        self.shutdown.store(true, Ordering::Release);
        self.cmd_tx.take();
        let handle = self.tick_thread.take()?;
        handle.thread().unpark();
        handle.join().ok()
    }
}

impl Drop for RealtimeFluid {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.stop();
        }
    }
}

impl fmt::Debug for RealtimeFluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealtimeFluid")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .finish()
    }
}

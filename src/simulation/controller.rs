//! Run/pause/reset state machine advancing a progress counter on timer ticks
//!
//! States move Idle -> Running -> Completed, and `reset` returns to Idle from
//! anywhere. Every transition that invalidates outstanding timers bumps the
//! run [`Generation`]; ticks carrying an older generation are ignored, which
//! closes the window between requesting cancellation and the scheduler
//! actually dropping the timer. Within a generation only the single armed
//! timer is live, so a tick delivered twice is applied once.

use crate::io::configuration::{PROGRESS_COMPLETE, TICK_INTERVAL_OFFSET_MS};
use crate::simulation::parameters::clamp_speed;
use crate::simulation::scheduler::{Generation, Scheduler, Tick, TimerId};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, trace};

/// Lifecycle stage of a simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SimulationStatus {
    /// Not ticking; either fresh or paused
    #[default]
    Idle,
    /// Ticking toward completion
    Running,
    /// Reached full progress; terminal until reset or a new run
    Completed,
}

/// Observable progress of a simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    /// Lifecycle stage
    pub status: SimulationStatus,
    /// Percent complete, `0..=100`
    pub progress_percent: u8,
    /// Ticks applied since the last reset
    pub step_count: u32,
}

impl SimulationState {
    /// Whether ticks are currently being applied
    pub const fn is_running(&self) -> bool {
        matches!(self.status, SimulationStatus::Running)
    }

    /// Idle with progress held from an earlier run
    pub const fn is_paused(&self) -> bool {
        matches!(self.status, SimulationStatus::Idle) && self.progress_percent > 0
    }
}

/// Delay between consecutive ticks
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickInterval(u32);

impl TickInterval {
    /// Interval for a speed setting: `110 - speed` milliseconds
    ///
    /// Speed is clamped into `[1, 100]` first, so the interval always lies in
    /// `[10, 109]` and never reaches zero.
    pub fn from_speed(speed: u32) -> Self {
        Self(TICK_INTERVAL_OFFSET_MS - clamp_speed(speed))
    }

    /// Interval in milliseconds
    pub const fn millis(self) -> u32 {
        self.0
    }

    /// Interval as a duration
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

/// Effect of delivering one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress moved forward and the next tick was armed
    Advanced,
    /// Progress reached 100 and ticking stopped
    Completed,
    /// Tick belonged to a cancelled run and changed nothing
    Stale,
}

/// State machine owning the simulation state and its pending timer
#[derive(Debug)]
pub struct SimulationController<S> {
    scheduler: S,
    state: SimulationState,
    generation: Generation,
    pending: Option<TimerId>,
    interval: TickInterval,
}

impl<S: Scheduler> SimulationController<S> {
    /// Create an idle controller ticking at `interval` once run
    pub fn new(scheduler: S, interval: TickInterval) -> Self {
        Self {
            scheduler,
            state: SimulationState::default(),
            generation: Generation::INITIAL,
            pending: None,
            interval,
        }
    }

    /// Current state
    pub const fn state(&self) -> SimulationState {
        self.state
    }

    /// Current run generation
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Interval used the next time a tick is armed
    pub const fn interval(&self) -> TickInterval {
        self.interval
    }

    /// Underlying scheduler
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Underlying scheduler, mutably
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Change the tick interval
    ///
    /// An already armed tick keeps its delay; the new interval applies from
    /// the next tick armed.
    pub const fn set_interval(&mut self, interval: TickInterval) {
        self.interval = interval;
    }

    /// Toggle the simulation
    ///
    /// Running pauses, holding progress. Idle starts or resumes from the
    /// held progress. Completed starts a fresh run from zero.
    pub fn run(&mut self) {
        match self.state.status {
            SimulationStatus::Running => self.pause(),
            SimulationStatus::Completed => {
                self.reset();
                self.start();
            }
            SimulationStatus::Idle => self.start(),
        }
    }

    /// Stop ticking and hold progress; no effect unless running
    pub fn pause(&mut self) {
        if !self.state.is_running() {
            return;
        }
        self.invalidate();
        self.state.status = SimulationStatus::Idle;
        debug!(
            progress = self.state.progress_percent,
            steps = self.state.step_count,
            "simulation paused"
        );
    }

    /// Return to Idle with zero progress from any state
    pub fn reset(&mut self) {
        self.invalidate();
        self.state = SimulationState::default();
        debug!(generation = self.generation.value(), "simulation reset");
    }

    /// Apply a fired tick
    pub fn handle_tick(&mut self, tick: Tick) -> TickOutcome {
        let live = tick.generation == self.generation
            && self.pending == Some(tick.timer)
            && self.state.is_running();
        if !live {
            debug!(
                tick_generation = tick.generation.value(),
                generation = self.generation.value(),
                "ignoring stale tick"
            );
            return TickOutcome::Stale;
        }
        self.pending = None;

        self.state.progress_percent = self.state.progress_percent.saturating_add(1);
        self.state.step_count = self.state.step_count.saturating_add(1);
        trace!(
            progress = self.state.progress_percent,
            steps = self.state.step_count,
            "tick applied"
        );

        if self.state.progress_percent >= PROGRESS_COMPLETE {
            self.state.progress_percent = PROGRESS_COMPLETE;
            self.state.status = SimulationStatus::Completed;
            self.invalidate();
            debug!(steps = self.state.step_count, "simulation completed");
            return TickOutcome::Completed;
        }

        self.arm();
        TickOutcome::Advanced
    }

    /// Take the next fired tick from the scheduler and apply it
    ///
    /// Returns `None` when the scheduler has nothing to deliver.
    pub fn step(&mut self) -> Option<TickOutcome> {
        let tick = self.scheduler.next_fired()?;
        Some(self.handle_tick(tick))
    }

    /// Deliver every tick the scheduler has fired
    ///
    /// Returns the number of ticks that changed state.
    pub fn pump(&mut self) -> usize {
        self.pump_with(|_| {})
    }

    /// Deliver fired ticks, calling `observer` after each applied one
    pub fn pump_with<F>(&mut self, mut observer: F) -> usize
    where
        F: FnMut(&SimulationState),
    {
        let mut applied = 0;
        while let Some(outcome) = self.step() {
            if outcome != TickOutcome::Stale {
                applied += 1;
                observer(&self.state);
            }
        }
        applied
    }

    fn start(&mut self) {
        self.generation = self.generation.next();
        self.state.status = SimulationStatus::Running;
        self.arm();
        debug!(
            generation = self.generation.value(),
            interval_ms = self.interval.millis(),
            progress = self.state.progress_percent,
            "simulation running"
        );
    }

    fn arm(&mut self) {
        let timer = self
            .scheduler
            .schedule(self.interval.as_duration(), self.generation);
        self.pending = Some(timer);
    }

    fn invalidate(&mut self) {
        if let Some(timer) = self.pending.take() {
            self.scheduler.cancel(timer);
        }
        self.generation = self.generation.next();
    }
}

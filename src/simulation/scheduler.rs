//! Cancellable one-shot timers behind a scheduler seam
//!
//! The controller arms one timer per tick and tags it with the run
//! [`Generation`] current at arming time. Schedulers hand fired timers back
//! as [`Tick`]s; deciding whether a tick is still relevant is left to the
//! controller, which compares generations. A tick that was already handed
//! out before its timer was cancelled is therefore harmless.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Monotonic token identifying one run segment of the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Token of a freshly created controller
    pub const INITIAL: Self = Self(0);

    /// Following token
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Handle of an armed timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A fired timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Timer that fired
    pub timer: TimerId,
    /// Generation the timer was armed under
    pub generation: Generation,
    /// Scheduler time at which the timer fired
    pub fired_at: Duration,
}

/// Source of one-shot timers for the simulation controller
pub trait Scheduler {
    /// Arm a timer firing `delay` after the scheduler's current time
    fn schedule(&mut self, delay: Duration, generation: Generation) -> TimerId;

    /// Disarm a timer; unknown or already fired timers are ignored
    fn cancel(&mut self, timer: TimerId);

    /// Take the earliest timer that has fired, if any
    fn next_fired(&mut self) -> Option<Tick>;

    /// Number of armed timers
    fn pending(&self) -> usize;

    /// Let time pass until the earliest armed timer is due
    ///
    /// Returns `false` when nothing is armed, so waiting would never end.
    fn wait_next(&mut self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    due: Duration,
    timer: TimerId,
    generation: Generation,
}

/// Min-queue of armed timers ordered by due time, then arming order
#[derive(Debug, Default)]
struct TimerQueue {
    entries: BinaryHeap<Reverse<Entry>>,
    next_id: u64,
}

impl TimerQueue {
    fn push(&mut self, due: Duration, generation: Generation) -> TimerId {
        let timer = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Reverse(Entry {
            due,
            timer,
            generation,
        }));
        timer
    }

    fn remove(&mut self, timer: TimerId) {
        self.entries.retain(|Reverse(e)| e.timer != timer);
    }

    fn peek_due(&self) -> Option<Duration> {
        self.entries.peek().map(|Reverse(e)| e.due)
    }

    fn pop(&mut self) -> Option<Tick> {
        self.entries.pop().map(|Reverse(e)| Tick {
            timer: e.timer,
            generation: e.generation,
            fired_at: e.due,
        })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deterministic scheduler driven by explicit time advancement
///
/// Timers only fire once [`VirtualScheduler::advance`] moves the horizon past
/// their due time. Each fired tick moves the clock to its due time, so a
/// timer armed while handling a tick is due relative to that tick. Once no
/// armed timer is due within the horizon the clock catches up to it, so time
/// that passes with nothing to fire is never replayed as ticks later.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    horizon: Duration,
    queue: TimerQueue,
}

impl VirtualScheduler {
    /// Create a scheduler at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Allow timers due within the next `by` to fire
    pub fn advance(&mut self, by: Duration) {
        self.horizon = self.horizon.saturating_add(by);
        self.settle();
    }

    /// Due time of the earliest armed timer
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek_due()
    }

    // Move the clock to the horizon unless a timer inside it is still undelivered
    fn settle(&mut self) {
        if self.queue.peek_due().is_none_or(|due| due > self.horizon) {
            self.now = self.horizon;
        }
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Duration, generation: Generation) -> TimerId {
        self.queue.push(self.now.saturating_add(delay), generation)
    }

    fn cancel(&mut self, timer: TimerId) {
        self.queue.remove(timer);
        self.settle();
    }

    fn next_fired(&mut self) -> Option<Tick> {
        match self.queue.peek_due() {
            Some(due) if due <= self.horizon => {
                self.now = due;
                self.queue.pop()
            }
            _ => {
                self.settle();
                None
            }
        }
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }

    fn wait_next(&mut self) -> bool {
        match self.queue.peek_due() {
            Some(due) => {
                self.horizon = self.horizon.max(due);
                true
            }
            None => false,
        }
    }
}

/// Wall-clock scheduler that blocks the calling thread until a timer fires
#[derive(Debug)]
pub struct RealtimeScheduler {
    origin: Instant,
    queue: TimerQueue,
}

impl Default for RealtimeScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeScheduler {
    /// Create a scheduler whose clock starts now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: TimerQueue::default(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Scheduler for RealtimeScheduler {
    fn schedule(&mut self, delay: Duration, generation: Generation) -> TimerId {
        let due = self.elapsed().saturating_add(delay);
        self.queue.push(due, generation)
    }

    fn cancel(&mut self, timer: TimerId) {
        self.queue.remove(timer);
    }

    /// Sleeps until the earliest armed timer is due; `None` when nothing is armed
    fn next_fired(&mut self) -> Option<Tick> {
        let due = self.queue.peek_due()?;
        let wait = due.saturating_sub(self.elapsed());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.queue.pop()
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Sleeping happens in [`Scheduler::next_fired`]; this only reports whether a timer is armed
    fn wait_next(&mut self) -> bool {
        !self.queue.is_empty()
    }
}

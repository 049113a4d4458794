//! Live demo core: parameter panel, tick scheduling, run state machine and readouts

/// Run/pause/reset state machine driven by scheduler ticks
pub mod controller;
/// Pure projections from progress onto display numbers
pub mod metrics;
/// Selected algorithm, sliders and per-algorithm parameter panels
pub mod parameters;
/// Scheduler seam with virtual and wall-clock implementations
pub mod scheduler;
/// Page controller tying parameters and simulation together
pub mod session;

pub use controller::{SimulationController, SimulationState, SimulationStatus};
pub use session::DemoSession;

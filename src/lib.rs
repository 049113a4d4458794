//! Controller behind a live algorithm demonstration: simulated runs, parameter panels and readouts
//!
//! No algorithm is executed. A run is a progress counter advanced by timer
//! ticks, and every displayed number is projected from that counter and a
//! static table of fabricated durations.

#![forbid(unsafe_code)]

/// Static algorithm descriptors, duration table and comparison data
pub mod catalog;
/// Command-line front end, rendering, progress display and error handling
pub mod io;
/// Parameter panel, scheduler seam, run state machine and derived readouts
pub mod simulation;

pub use io::error::{DemoError, Result};

//! Display numbers projected from simulation progress
//!
//! Nothing here measures real work: every readout is a fixed function of
//! progress, step count and the stored parameters.

use crate::catalog::{AlgorithmId, DurationTable};
use crate::io::configuration::{
    CPU_PER_PERCENT, LIVE_STAT_CAP, MEMORY_PER_PERCENT, NODES_PER_STEP, QUALITY_PER_PERCENT,
    SECONDS_PER_STEP,
};
use crate::simulation::controller::SimulationState;
use crate::simulation::parameters::ParameterStore;
use num_traits::ToPrimitive;
use serde::Serialize;
use std::fmt;

/// Duration readout scaled by progress
///
/// Reads the row with the largest input size not above `input_size` and
/// returns `round(duration * progress / 100)`. `None` means "no value yet":
/// either nothing has progressed or no row covers the input size.
pub fn current_performance_ms(
    table: &DurationTable,
    progress_percent: u8,
    algorithm: AlgorithmId,
    input_size: u32,
) -> Option<u32> {
    if progress_percent == 0 {
        return None;
    }
    let duration = table.duration_at(algorithm, input_size)?;
    (f64::from(duration) * f64::from(progress_percent) / 100.0)
        .round()
        .to_u32()
}

fn capped(progress_percent: u8, per_percent: f64) -> f64 {
    (f64::from(progress_percent) * per_percent).min(LIVE_STAT_CAP)
}

/// Memory readout in MB, capped at 100
pub fn memory_usage(progress_percent: u8) -> f64 {
    capped(progress_percent, MEMORY_PER_PERCENT)
}

/// CPU readout in percent, capped at 100
pub fn cpu_usage(progress_percent: u8) -> f64 {
    capped(progress_percent, CPU_PER_PERCENT)
}

/// Solution quality readout in percent, capped at 100
pub fn solution_quality(progress_percent: u8) -> f64 {
    capped(progress_percent, QUALITY_PER_PERCENT)
}

/// `floor(step_count * max_iterations / 100)`
pub fn iterations_completed(step_count: u32, max_iterations: u32) -> u64 {
    u64::from(step_count) * u64::from(max_iterations) / 100
}

/// Ten nodes per step
pub fn nodes_explored(step_count: u32) -> u64 {
    u64::from(step_count) * NODES_PER_STEP
}

/// A tenth of a second per step
pub fn elapsed_seconds(step_count: u32) -> f64 {
    f64::from(step_count) * SECONDS_PER_STEP
}

/// Every readout of the live demo for one state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMetrics {
    /// Percent complete
    pub progress_percent: u8,
    /// Ticks applied
    pub step_count: u32,
    /// Scaled duration, `None` before any progress
    pub current_performance_ms: Option<u32>,
    /// Selected algorithm's short complexity label
    pub time_complexity: &'static str,
    /// Memory readout in MB
    pub memory_usage_mb: f64,
    /// CPU readout in percent
    pub cpu_usage_percent: f64,
    /// Solution quality in percent
    pub solution_quality_percent: f64,
    /// Iterations readout
    pub iterations_completed: u64,
    /// Nodes readout
    pub nodes_explored: u64,
    /// Elapsed time readout in seconds
    pub elapsed_seconds: f64,
}

impl DisplayMetrics {
    /// Project a state and parameter snapshot onto display numbers
    pub fn derive(table: &DurationTable, state: &SimulationState, params: &ParameterStore) -> Self {
        let progress = state.progress_percent;
        let steps = state.step_count;
        let algorithm = params.algorithm();

        Self {
            progress_percent: progress,
            step_count: steps,
            current_performance_ms: current_performance_ms(
                table,
                progress,
                algorithm,
                params.input_size(),
            ),
            time_complexity: algorithm.time_complexity_label(),
            memory_usage_mb: memory_usage(progress),
            cpu_usage_percent: cpu_usage(progress),
            solution_quality_percent: solution_quality(progress),
            iterations_completed: iterations_completed(steps, params.max_iterations()),
            nodes_explored: nodes_explored(steps),
            elapsed_seconds: elapsed_seconds(steps),
        }
    }
}

impl fmt::Display for DisplayMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Progress:             {}% complete • Step {}",
            self.progress_percent, self.step_count
        )?;
        match self.current_performance_ms {
            Some(ms) => writeln!(f, "Current Performance:  {ms} ms")?,
            None => writeln!(f, "Current Performance:  -- ms")?,
        }
        writeln!(f, "Time Complexity:      {}", self.time_complexity)?;
        writeln!(f, "Memory Usage:         {}MB", self.memory_usage_mb)?;
        writeln!(f, "CPU Usage:            {}%", self.cpu_usage_percent)?;
        writeln!(f, "Solution Quality:     {}%", self.solution_quality_percent)?;
        writeln!(f, "Iterations Completed: {}", self.iterations_completed)?;
        writeln!(f, "Nodes Explored:       {}", self.nodes_explored)?;
        write!(f, "Time Elapsed:         {:.1}s", self.elapsed_seconds)
    }
}

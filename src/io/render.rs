//! Plain-text and JSON rendering of catalog data and live readouts

use crate::catalog::algorithms::AlgorithmDescriptor;
use crate::catalog::comparison::{BENCHMARKS, complexity_table};
use crate::catalog::{AlgorithmId, DurationRow};
use crate::io::error::{Result, WithOperation};
use crate::simulation::controller::SimulationState;
use crate::simulation::metrics::DisplayMetrics;
use crate::simulation::parameters::ParameterSnapshot;
use crate::simulation::scheduler::Scheduler;
use crate::simulation::session::DemoSession;
use serde::Serialize;
use std::io::Write;

/// Everything shown by the demo view at one instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Selection and active panel
    pub parameters: ParameterSnapshot,
    /// Simulation state
    pub state: SimulationState,
    /// Derived readouts
    pub metrics: DisplayMetrics,
}

impl SessionSnapshot {
    /// Capture the current view of a session
    pub fn capture<S: Scheduler>(session: &DemoSession<S>) -> Self {
        Self {
            parameters: session.parameters().snapshot(),
            state: session.state(),
            metrics: session.metrics(),
        }
    }
}

/// Write `value` as one line of JSON
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out).with_operation("json line")
}

/// Write the readout block of the demo view
///
/// # Errors
///
/// Returns an error if the write fails
pub fn write_metrics<W: Write>(out: &mut W, metrics: &DisplayMetrics) -> Result<()> {
    writeln!(out, "{metrics}").with_operation("metrics")
}

/// Write one algorithm's reference sheet
///
/// # Errors
///
/// Returns an error if the write fails
pub fn write_descriptor<W: Write>(out: &mut W, descriptor: &AlgorithmDescriptor) -> Result<()> {
    descriptor_lines(out, descriptor).with_operation("algorithm descriptor")
}

fn descriptor_lines<W: Write>(
    out: &mut W,
    descriptor: &AlgorithmDescriptor,
) -> std::io::Result<()> {
    writeln!(out, "{} ({})", descriptor.title, descriptor.id.slug())?;
    writeln!(out, "  {}", descriptor.description)?;
    writeln!(out, "  Time Complexity:  {}", descriptor.time_complexity)?;
    writeln!(out, "  Space Complexity: {}", descriptor.space_complexity)?;
    writeln!(out, "  Best Case:        {}", descriptor.best_case)?;
    writeln!(out, "  Worst Case:       {}", descriptor.worst_case)?;
    writeln!(out, "  Advantages:       {}", descriptor.advantages)?;
    writeln!(out, "  Disadvantages:    {}", descriptor.disadvantages)?;
    writeln!(out, "  Applications:     {}", descriptor.applications.join(", "))
}

/// Write the complexity comparison table followed by the scale benchmarks
///
/// # Errors
///
/// Returns an error if the write fails
pub fn write_comparison<W: Write>(out: &mut W) -> Result<()> {
    comparison_lines(out).with_operation("comparison table")
}

fn comparison_lines<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<18} {:<8} {:<8} {:<8} {:<8} {:<26} Scalability",
        "Algorithm", "Time", "Space", "Best", "Worst", "Use Cases"
    )?;
    for descriptor in complexity_table() {
        writeln!(
            out,
            "{:<18} {:<8} {:<8} {:<8} {:<8} {:<26} {}",
            descriptor.id.display_name(),
            short_form(descriptor.time_complexity),
            short_form(descriptor.space_complexity),
            short_form(descriptor.best_case),
            short_form(descriptor.worst_case),
            descriptor.use_cases,
            descriptor.scalability
        )?;
    }
    writeln!(out)?;

    write!(out, "{:<12}", "Scale")?;
    for id in AlgorithmId::ALL {
        write!(out, " {:>16}", id.display_name())?;
    }
    writeln!(out, " {:>16}", "Fastest")?;
    for row in &BENCHMARKS {
        write!(out, "{:<12}", row.scale.to_string())?;
        for id in AlgorithmId::ALL {
            write!(out, " {:>16}", row.time(id))?;
        }
        writeln!(out, " {:>16}", row.fastest().display_name())?;
    }
    Ok(())
}

/// Write duration rows as the chart would plot them, one row per input size
///
/// # Errors
///
/// Returns an error if the write fails
pub fn write_chart_rows<W: Write>(out: &mut W, rows: &[DurationRow]) -> Result<()> {
    chart_lines(out, rows).with_operation("chart rows")
}

fn chart_lines<W: Write>(out: &mut W, rows: &[DurationRow]) -> std::io::Result<()> {
    write!(out, "{:>10}", "Input Size")?;
    for id in AlgorithmId::ALL {
        write!(out, " {:>16}", id.display_name())?;
    }
    writeln!(out)?;
    for row in rows {
        write!(out, "{:>10}", row.input_size)?;
        for id in AlgorithmId::ALL {
            write!(out, " {:>16}", row.duration(id))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Complexity notation without its trailing explanation
fn short_form(text: &str) -> &str {
    text.split(" - ").next().unwrap_or(text).trim()
}

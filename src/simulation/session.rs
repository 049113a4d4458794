//! Live demo page controller owning the parameter panel and the simulation

use crate::catalog::{AlgorithmId, DURATION_TABLE, DurationRow};
use crate::simulation::controller::{
    SimulationController, SimulationState, TickInterval, TickOutcome,
};
use crate::simulation::metrics::DisplayMetrics;
use crate::simulation::parameters::{ParamValue, ParameterStore};
use crate::simulation::scheduler::Scheduler;
use tracing::debug;

/// Sole owner of the parameter store and simulation state of one demo view
///
/// Switching the algorithm or the input size invalidates any run in flight
/// and resets the simulation.
#[derive(Debug)]
pub struct DemoSession<S> {
    params: ParameterStore,
    controller: SimulationController<S>,
}

impl<S: Scheduler> DemoSession<S> {
    /// Open a session with default parameters
    pub fn new(scheduler: S) -> Self {
        Self::with_parameters(scheduler, ParameterStore::default())
    }

    /// Open a session with preselected parameters
    pub fn with_parameters(scheduler: S, params: ParameterStore) -> Self {
        let interval = TickInterval::from_speed(params.speed());
        Self {
            params,
            controller: SimulationController::new(scheduler, interval),
        }
    }

    /// Parameter panel
    pub const fn parameters(&self) -> &ParameterStore {
        &self.params
    }

    /// Simulation state
    pub const fn state(&self) -> SimulationState {
        self.controller.state()
    }

    /// Simulation controller
    pub const fn controller(&self) -> &SimulationController<S> {
        &self.controller
    }

    /// Underlying scheduler, mutably
    pub const fn scheduler_mut(&mut self) -> &mut S {
        self.controller.scheduler_mut()
    }

    /// Select an algorithm and reset the simulation
    pub fn set_algorithm(&mut self, algorithm: AlgorithmId) {
        self.params.set_algorithm(algorithm);
        debug!(algorithm = algorithm.key(), "algorithm selected");
        self.controller.reset();
    }

    /// Select an input size (clamped) and reset the simulation
    pub fn set_input_size(&mut self, input_size: u32) {
        let stored = self.params.set_input_size(input_size);
        debug!(input_size = stored, "input size selected");
        self.controller.reset();
    }

    /// Select a speed (clamped); applies from the next armed tick
    pub fn set_speed(&mut self, speed: u32) {
        let stored = self.params.set_speed(speed);
        self.controller.set_interval(TickInterval::from_speed(stored));
    }

    /// Write one field of the active panel; see [`ParameterStore::set_param`]
    pub fn set_param(&mut self, value: ParamValue) -> bool {
        let applied = self.params.set_param(value);
        if !applied {
            debug!(
                key = value.key(),
                active = self.params.algorithm().key(),
                "parameter ignored for inactive panel"
            );
        }
        applied
    }

    /// Run, pause or resume; see [`SimulationController::run`]
    pub fn run(&mut self) {
        self.controller.run();
    }

    /// Pause a running simulation, holding progress
    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Return to Idle with zero progress
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Apply the next fired tick, if any
    pub fn step(&mut self) -> Option<TickOutcome> {
        self.controller.step()
    }

    /// Apply every fired tick; returns how many changed state
    pub fn pump(&mut self) -> usize {
        self.controller.pump()
    }

    /// Readouts for the current state and parameters
    pub fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::derive(&DURATION_TABLE, &self.controller.state(), &self.params)
    }

    /// Duration rows up to the selected input size, for the chart
    pub fn chart_rows(&self) -> &'static [DurationRow] {
        DURATION_TABLE.up_to(self.params.input_size())
    }
}

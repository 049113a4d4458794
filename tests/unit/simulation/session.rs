//! Tests for the demo session tying parameters to the simulation

#[cfg(test)]
mod tests {
    use algosim::catalog::AlgorithmId;
    use algosim::simulation::controller::TickOutcome;
    use algosim::simulation::parameters::{Heuristic, ParamValue, ParameterStore};
    use algosim::simulation::scheduler::{Scheduler, VirtualScheduler};
    use algosim::simulation::{DemoSession, SimulationState, SimulationStatus};
    use std::time::Duration;

    fn running_session(ticks: u64) -> DemoSession<VirtualScheduler> {
        let mut session = DemoSession::new(VirtualScheduler::new());
        session.run();
        session
            .scheduler_mut()
            .advance(Duration::from_millis(60 * ticks));
        session.pump();
        session
    }

    // Tests changing the input size mid-run resets the simulation
    // Verified by only updating the parameter
    #[test]
    fn test_input_size_change_resets() {
        let mut session = running_session(20);
        assert_eq!(session.state().progress_percent, 20);

        session.set_input_size(200);
        assert_eq!(session.state(), SimulationState::default());
        assert_eq!(session.parameters().input_size(), 200);

        session
            .scheduler_mut()
            .advance(Duration::from_millis(1000));
        assert_eq!(session.pump(), 0);
        assert_eq!(session.state(), SimulationState::default());
    }

    // Tests switching algorithm mid-run resets the simulation
    // Verified by leaving the timer armed
    #[test]
    fn test_algorithm_change_resets() {
        let mut session = running_session(10);
        session.set_algorithm(AlgorithmId::Parallel);

        assert_eq!(session.state(), SimulationState::default());
        assert_eq!(session.parameters().algorithm(), AlgorithmId::Parallel);
        assert_eq!(session.controller().scheduler().pending(), 0);
    }

    // Tests speed changes retime later ticks without resetting
    // Verified by resetting on speed change
    #[test]
    fn test_speed_change_keeps_progress() {
        let mut session = running_session(5);
        session.set_speed(100);

        assert_eq!(session.state().progress_percent, 5);
        assert!(session.state().is_running());
        assert_eq!(session.controller().interval().millis(), 10);

        session.set_speed(0);
        assert_eq!(session.parameters().speed(), 1);
        assert_eq!(session.controller().interval().millis(), 109);
    }

    // Tests parameters for another panel are refused
    // Verified by applying every parameter
    #[test]
    fn test_set_param_respects_active_panel() {
        let mut session = DemoSession::new(VirtualScheduler::new());
        assert!(!session.set_param(ParamValue::Processors(8)));
        assert!(session.set_param(ParamValue::Heuristic(Heuristic::Euclidean)));
    }

    // Tests a preselected store sets the tick interval
    // Verified by always starting at the default speed
    #[test]
    fn test_with_parameters_uses_speed() {
        let mut params = ParameterStore::new();
        params.set_speed(90);
        let session = DemoSession::with_parameters(VirtualScheduler::new(), params);
        assert_eq!(session.controller().interval().millis(), 20);
    }

    // Tests pause, resume and reset pass through to the controller
    // Verified by ignoring pause
    #[test]
    fn test_lifecycle_passthrough() {
        let mut session = running_session(3);
        session.pause();
        assert!(session.state().is_paused());

        session.run();
        session
            .scheduler_mut()
            .advance(Duration::from_millis(60));
        assert_eq!(session.step(), Some(TickOutcome::Advanced));
        assert_eq!(session.state().progress_percent, 4);

        session.reset();
        assert_eq!(session.state().status, SimulationStatus::Idle);
        assert_eq!(session.state().progress_percent, 0);
    }

    // Tests metrics follow the session's own state and parameters
    // Verified by deriving from a default state
    #[test]
    fn test_metrics_reflect_state() {
        let session = running_session(50);
        let metrics = session.metrics();
        assert_eq!(metrics.progress_percent, 50);
        assert_eq!(metrics.current_performance_ms, Some(60));
    }

    // Tests chart rows are filtered by the selected input size
    // Verified by returning every row
    #[test]
    fn test_chart_rows_follow_input_size() {
        let mut session = DemoSession::new(VirtualScheduler::new());
        assert_eq!(session.chart_rows().len(), 3);

        session.set_input_size(50);
        assert_eq!(session.chart_rows().len(), 2);

        session.set_input_size(500);
        assert_eq!(session.chart_rows().len(), 7);
    }
}

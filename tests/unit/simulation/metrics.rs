//! Tests for readouts derived from progress and step count

#[cfg(test)]
mod tests {
    use algosim::catalog::{AlgorithmId, DURATION_TABLE};
    use algosim::simulation::controller::{SimulationState, SimulationStatus};
    use algosim::simulation::metrics::{
        DisplayMetrics, cpu_usage, current_performance_ms, elapsed_seconds,
        iterations_completed, memory_usage, nodes_explored, solution_quality,
    };
    use algosim::simulation::parameters::{ParamValue, ParameterStore};

    const TOLERANCE: f64 = 1e-9;

    fn state(progress_percent: u8, step_count: u32) -> SimulationState {
        SimulationState {
            status: SimulationStatus::Running,
            progress_percent,
            step_count,
        }
    }

    // Tests A* at size 100 and half progress reads 60ms
    // Verified by flooring instead of rounding
    #[test]
    fn test_current_performance_scales_duration() {
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 50, AlgorithmId::AStar, 100),
            Some(60)
        );
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 100, AlgorithmId::BlindSearch, 500),
            Some(1500)
        );
        // 15 * 3 / 100 = 0.45
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 3, AlgorithmId::Parallel, 10),
            Some(0)
        );
        // 30 * 5 / 100 = 1.5
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 5, AlgorithmId::AStar, 10),
            Some(2)
        );
    }

    // Tests the row used is the largest not above the input size
    // Verified by picking the next row up
    #[test]
    fn test_current_performance_uses_row_below() {
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 100, AlgorithmId::HillClimbing, 150),
            Some(100)
        );
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 100, AlgorithmId::GradientDescent, 499),
            Some(620)
        );
    }

    // Tests the readout is absent before progress and below the table
    // Verified by returning zero instead of None
    #[test]
    fn test_current_performance_absent() {
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 0, AlgorithmId::AStar, 100),
            None
        );
        assert_eq!(
            current_performance_ms(&DURATION_TABLE, 50, AlgorithmId::AStar, 9),
            None
        );
    }

    // Tests live stats scale with progress and cap at 100
    // Verified by removing the cap
    #[test]
    fn test_live_stats() {
        assert!((memory_usage(40) - 60.0).abs() < TOLERANCE);
        assert!((memory_usage(67) - 100.0).abs() < TOLERANCE);
        assert!((cpu_usage(30) - 60.0).abs() < TOLERANCE);
        assert!((cpu_usage(70) - 100.0).abs() < TOLERANCE);
        assert!((solution_quality(50) - 40.0).abs() < TOLERANCE);
        assert!((solution_quality(100) - 80.0).abs() < TOLERANCE);
        assert!(memory_usage(0).abs() < TOLERANCE);
    }

    // Tests step-based counters
    // Verified by rounding the iteration count up
    #[test]
    fn test_step_counters() {
        assert_eq!(iterations_completed(50, 100), 50);
        assert_eq!(iterations_completed(7, 250), 17);
        assert_eq!(iterations_completed(100, 1000), 1000);
        assert_eq!(nodes_explored(42), 420);
        assert!((elapsed_seconds(25) - 2.5).abs() < TOLERANCE);
    }

    // Tests every readout is derived from the same state
    // Verified by reading step count for progress
    #[test]
    fn test_derive_combines_readouts() {
        let params = ParameterStore::new();
        let metrics = DisplayMetrics::derive(&DURATION_TABLE, &state(50, 50), &params);

        assert_eq!(metrics.progress_percent, 50);
        assert_eq!(metrics.step_count, 50);
        assert_eq!(metrics.current_performance_ms, Some(60));
        assert_eq!(metrics.time_complexity, "O(b^d)");
        assert!((metrics.memory_usage_mb - 75.0).abs() < TOLERANCE);
        assert!((metrics.cpu_usage_percent - 100.0).abs() < TOLERANCE);
        assert!((metrics.solution_quality_percent - 40.0).abs() < TOLERANCE);
        assert_eq!(metrics.iterations_completed, 50);
        assert_eq!(metrics.nodes_explored, 500);
        assert!((metrics.elapsed_seconds - 5.0).abs() < TOLERANCE);
    }

    // Tests the iteration budget is read for every algorithm
    // Verified by using the default budget for non gradient algorithms
    #[test]
    fn test_derive_uses_stored_iteration_budget() {
        let mut params = ParameterStore::new();
        params.set_algorithm(AlgorithmId::GradientDescent);
        params.set_param(ParamValue::MaxIterations(300));
        params.set_algorithm(AlgorithmId::HillClimbing);

        let metrics = DisplayMetrics::derive(&DURATION_TABLE, &state(10, 10), &params);
        assert_eq!(metrics.iterations_completed, 30);
        assert_eq!(metrics.time_complexity, "O(n)");
    }

    // Tests the text block shows placeholders before any progress
    // Verified by printing zero for an absent readout
    #[test]
    fn test_display_idle() {
        let params = ParameterStore::new();
        let text = DisplayMetrics::derive(&DURATION_TABLE, &SimulationState::default(), &params)
            .to_string();

        assert!(text.contains("0% complete • Step 0"));
        assert!(text.contains("Current Performance:  -- ms"));
        assert!(text.contains("Time Elapsed:         0.0s"));
    }

    // Tests the text block formats live values
    // Verified by dropping the elapsed precision
    #[test]
    fn test_display_running() {
        let params = ParameterStore::new();
        let text = DisplayMetrics::derive(&DURATION_TABLE, &state(50, 50), &params).to_string();

        assert!(text.contains("Current Performance:  60 ms"));
        assert!(text.contains("Memory Usage:         75MB"));
        assert!(text.contains("Nodes Explored:       500"));
        assert!(text.contains("Time Elapsed:         5.0s"));
    }
}

//! Parameter panel state: selected algorithm, sliders and per-algorithm settings
//!
//! Every setter clamps into the documented bounds instead of rejecting input,
//! mirroring slider behaviour. Values of inactive panels are kept but can
//! only be read through the panel of the active algorithm.

use crate::catalog::AlgorithmId;
use crate::io::configuration::{
    DEFAULT_BRANCHING_FACTOR, DEFAULT_INPUT_SIZE, DEFAULT_LEARNING_RATE, DEFAULT_MAX_ITERATIONS,
    DEFAULT_PROCESSORS, DEFAULT_RANDOM_RESTARTS, DEFAULT_SPEED, LEARNING_RATE_DECIMALS,
    MAX_BRANCHING_FACTOR, MAX_INPUT_SIZE, MAX_LEARNING_RATE, MAX_MAX_ITERATIONS, MAX_PROCESSORS,
    MAX_RANDOM_RESTARTS, MAX_SPEED, MIN_BRANCHING_FACTOR, MIN_INPUT_SIZE, MIN_LEARNING_RATE,
    MIN_MAX_ITERATIONS, MIN_PROCESSORS, MIN_SPEED,
};
use crate::io::error::{DemoError, invalid_parameter};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Distance function used by A*
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Sum of axis distances
    #[default]
    Manhattan,
    /// Straight-line distance
    Euclidean,
    /// Largest axis distance
    Chebyshev,
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Chebyshev => "chebyshev",
        })
    }
}

impl FromStr for Heuristic {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "chebyshev" => Ok(Self::Chebyshev),
            _ => Err(DemoError::UnknownHeuristic {
                name: s.to_string(),
            }),
        }
    }
}

/// Gradient descent panel
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientDescentParams {
    /// Step size, within `[0.001, 0.1]`
    pub learning_rate: f64,
    /// Iteration budget, within `[10, 1000]`
    pub max_iterations: u32,
}

impl Default for GradientDescentParams {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// A* panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AStarParams {
    /// Distance function
    pub heuristic: Heuristic,
}

/// Blind search panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindSearchParams {
    /// Successors per node, within `[1, 10]`
    pub branching_factor: u32,
}

impl Default for BlindSearchParams {
    fn default() -> Self {
        Self {
            branching_factor: DEFAULT_BRANCHING_FACTOR,
        }
    }
}

/// Parallel algorithm panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ParallelParams {
    /// Worker count, within `[1, 16]`
    pub processors: u32,
}

impl Default for ParallelParams {
    fn default() -> Self {
        Self {
            processors: DEFAULT_PROCESSORS,
        }
    }
}

/// Hill climbing panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HillClimbingParams {
    /// Restarts from a random state, within `[0, 10]`
    pub random_restarts: u32,
}

impl Default for HillClimbingParams {
    fn default() -> Self {
        Self {
            random_restarts: DEFAULT_RANDOM_RESTARTS,
        }
    }
}

/// Configuration of the active algorithm only
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "algorithm", rename_all = "camelCase")]
pub enum ParameterBag {
    /// Blind search is active
    BlindSearch(BlindSearchParams),
    /// A* is active
    AStar(AStarParams),
    /// Hill climbing is active
    HillClimbing(HillClimbingParams),
    /// Gradient descent is active
    GradientDescent(GradientDescentParams),
    /// Parallel algorithm is active
    Parallel(ParallelParams),
}

impl ParameterBag {
    /// Algorithm this bag configures
    pub const fn algorithm(&self) -> AlgorithmId {
        match self {
            Self::BlindSearch(_) => AlgorithmId::BlindSearch,
            Self::AStar(_) => AlgorithmId::AStar,
            Self::HillClimbing(_) => AlgorithmId::HillClimbing,
            Self::GradientDescent(_) => AlgorithmId::GradientDescent,
            Self::Parallel(_) => AlgorithmId::Parallel,
        }
    }
}

/// A single settable parameter field with its new value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    /// Gradient descent step size
    LearningRate(f64),
    /// Gradient descent iteration budget
    MaxIterations(u32),
    /// A* distance function
    Heuristic(Heuristic),
    /// Blind search successors per node
    BranchingFactor(u32),
    /// Parallel worker count
    Processors(u32),
    /// Hill climbing restarts
    RandomRestarts(u32),
}

impl ParamValue {
    /// Algorithm whose panel owns this field
    pub const fn algorithm(&self) -> AlgorithmId {
        match self {
            Self::LearningRate(_) | Self::MaxIterations(_) => AlgorithmId::GradientDescent,
            Self::Heuristic(_) => AlgorithmId::AStar,
            Self::BranchingFactor(_) => AlgorithmId::BlindSearch,
            Self::Processors(_) => AlgorithmId::Parallel,
            Self::RandomRestarts(_) => AlgorithmId::HillClimbing,
        }
    }

    /// Field name as written on the command line
    pub const fn key(&self) -> &'static str {
        match self {
            Self::LearningRate(_) => "learning-rate",
            Self::MaxIterations(_) => "max-iterations",
            Self::Heuristic(_) => "heuristic",
            Self::BranchingFactor(_) => "branching-factor",
            Self::Processors(_) => "processors",
            Self::RandomRestarts(_) => "random-restarts",
        }
    }
}

fn parse_count(parameter: &'static str, raw: &str) -> Result<u32, DemoError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| invalid_parameter(parameter, &raw, &e))
}

impl FromStr for ParamValue {
    type Err = DemoError;

    /// Parse `key=value`; keys accept dashes, underscores or camelCase
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, raw) = s
            .split_once('=')
            .ok_or_else(|| invalid_parameter("param", &s, &"expected key=value"))?;

        let normalized: String = key
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "learningrate" => raw
                .trim()
                .parse::<f64>()
                .map(Self::LearningRate)
                .map_err(|e| invalid_parameter("learning-rate", &raw, &e)),
            "maxiterations" => parse_count("max-iterations", raw).map(Self::MaxIterations),
            "heuristic" => raw.parse::<Heuristic>().map(Self::Heuristic),
            "branchingfactor" => parse_count("branching-factor", raw).map(Self::BranchingFactor),
            "processors" => parse_count("processors", raw).map(Self::Processors),
            "randomrestarts" | "restarts" => {
                parse_count("random-restarts", raw).map(Self::RandomRestarts)
            }
            _ => Err(DemoError::UnknownParameter {
                key: key.to_string(),
            }),
        }
    }
}

/// Clamp a learning rate into bounds and round to the slider's resolution
///
/// Non-finite input falls back to the lower bound.
pub fn clamp_learning_rate(value: f64) -> f64 {
    if !value.is_finite() {
        return MIN_LEARNING_RATE;
    }
    let scale = 10_f64.powi(LEARNING_RATE_DECIMALS);
    let rounded = (value * scale).round() / scale;
    rounded.clamp(MIN_LEARNING_RATE, MAX_LEARNING_RATE)
}

/// Clamp an input size into `[10, 500]`
pub fn clamp_input_size(value: u32) -> u32 {
    value.clamp(MIN_INPUT_SIZE, MAX_INPUT_SIZE)
}

/// Clamp a speed into `[1, 100]`
pub fn clamp_speed(value: u32) -> u32 {
    value.clamp(MIN_SPEED, MAX_SPEED)
}

/// Serializable view of the selection and the active panel
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSnapshot {
    /// Selected algorithm
    pub algorithm: AlgorithmId,
    /// Selected input size
    pub input_size: u32,
    /// Selected speed
    pub speed: u32,
    /// Active panel
    pub params: ParameterBag,
}

/// Selected algorithm, sliders and every panel's stored values
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterStore {
    algorithm: AlgorithmId,
    input_size: u32,
    speed: u32,
    gradient_descent: GradientDescentParams,
    a_star: AStarParams,
    blind_search: BlindSearchParams,
    parallel: ParallelParams,
    hill_climbing: HillClimbingParams,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmId::AStar,
            input_size: DEFAULT_INPUT_SIZE,
            speed: DEFAULT_SPEED,
            gradient_descent: GradientDescentParams::default(),
            a_star: AStarParams::default(),
            blind_search: BlindSearchParams::default(),
            parallel: ParallelParams::default(),
            hill_climbing: HillClimbingParams::default(),
        }
    }
}

impl ParameterStore {
    /// Create a store with the demo's opening selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected algorithm
    pub const fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Currently selected input size
    pub const fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Currently selected speed
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Iteration budget feeding the iterations readout
    ///
    /// Stored on the gradient descent panel but read for every algorithm.
    pub const fn max_iterations(&self) -> u32 {
        self.gradient_descent.max_iterations
    }

    /// Panel of the selected algorithm
    pub const fn active(&self) -> ParameterBag {
        match self.algorithm {
            AlgorithmId::BlindSearch => ParameterBag::BlindSearch(self.blind_search),
            AlgorithmId::AStar => ParameterBag::AStar(self.a_star),
            AlgorithmId::HillClimbing => ParameterBag::HillClimbing(self.hill_climbing),
            AlgorithmId::GradientDescent => ParameterBag::GradientDescent(self.gradient_descent),
            AlgorithmId::Parallel => ParameterBag::Parallel(self.parallel),
        }
    }

    /// Selection and active panel, ready for output
    pub const fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot {
            algorithm: self.algorithm,
            input_size: self.input_size,
            speed: self.speed,
            params: self.active(),
        }
    }

    /// Select an algorithm; other panels keep their stored values
    pub const fn set_algorithm(&mut self, algorithm: AlgorithmId) {
        self.algorithm = algorithm;
    }

    /// Set the input size, clamped into bounds; returns the stored value
    pub fn set_input_size(&mut self, input_size: u32) -> u32 {
        self.input_size = clamp_input_size(input_size);
        self.input_size
    }

    /// Set the speed, clamped into bounds; returns the stored value
    pub fn set_speed(&mut self, speed: u32) -> u32 {
        self.speed = clamp_speed(speed);
        self.speed
    }

    /// Write one field of the active panel, clamped into bounds
    ///
    /// Returns `false` without touching anything when the field belongs to
    /// an inactive panel.
    pub fn set_param(&mut self, value: ParamValue) -> bool {
        if value.algorithm() != self.algorithm {
            return false;
        }

        match value {
            ParamValue::LearningRate(rate) => {
                self.gradient_descent.learning_rate = clamp_learning_rate(rate);
            }
            ParamValue::MaxIterations(n) => {
                self.gradient_descent.max_iterations =
                    n.clamp(MIN_MAX_ITERATIONS, MAX_MAX_ITERATIONS);
            }
            ParamValue::Heuristic(heuristic) => {
                self.a_star.heuristic = heuristic;
            }
            ParamValue::BranchingFactor(b) => {
                self.blind_search.branching_factor =
                    b.clamp(MIN_BRANCHING_FACTOR, MAX_BRANCHING_FACTOR);
            }
            ParamValue::Processors(p) => {
                self.parallel.processors = p.clamp(MIN_PROCESSORS, MAX_PROCESSORS);
            }
            ParamValue::RandomRestarts(r) => {
                self.hill_climbing.random_restarts = r.min(MAX_RANDOM_RESTARTS);
            }
        }
        true
    }
}

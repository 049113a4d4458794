//! Demo constants, parameter bounds and runtime configuration defaults

// Input size slider
/// Smallest selectable input size
pub const MIN_INPUT_SIZE: u32 = 10;
/// Largest selectable input size
pub const MAX_INPUT_SIZE: u32 = 500;
/// Input size selected when the demo opens
pub const DEFAULT_INPUT_SIZE: u32 = 100;

// Speed slider
/// Slowest selectable speed
pub const MIN_SPEED: u32 = 1;
/// Fastest selectable speed
pub const MAX_SPEED: u32 = 100;
/// Speed selected when the demo opens
pub const DEFAULT_SPEED: u32 = 50;

// interval = offset - speed, so speed in [1, 100] maps onto [10, 109] ms
/// Offset of the tick interval formula in milliseconds
pub const TICK_INTERVAL_OFFSET_MS: u32 = 110;

/// Progress value at which a run completes
pub const PROGRESS_COMPLETE: u8 = 100;

// Gradient descent panel
/// Lower bound for the learning rate
pub const MIN_LEARNING_RATE: f64 = 0.001;
/// Upper bound for the learning rate
pub const MAX_LEARNING_RATE: f64 = 0.1;
/// Learning rate selected when the demo opens
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
/// Decimal places kept when a learning rate is stored
pub const LEARNING_RATE_DECIMALS: i32 = 3;
/// Lower bound for the iteration budget
pub const MIN_MAX_ITERATIONS: u32 = 10;
/// Upper bound for the iteration budget
pub const MAX_MAX_ITERATIONS: u32 = 1000;
/// Iteration budget selected when the demo opens
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

// Blind search panel
/// Lower bound for the branching factor
pub const MIN_BRANCHING_FACTOR: u32 = 1;
/// Upper bound for the branching factor
pub const MAX_BRANCHING_FACTOR: u32 = 10;
/// Branching factor selected when the demo opens
pub const DEFAULT_BRANCHING_FACTOR: u32 = 4;

// Parallel panel
/// Lower bound for the processor count
pub const MIN_PROCESSORS: u32 = 1;
/// Upper bound for the processor count
pub const MAX_PROCESSORS: u32 = 16;
/// Processor count selected when the demo opens
pub const DEFAULT_PROCESSORS: u32 = 4;

// Hill climbing panel
/// Upper bound for random restarts (lower bound is zero)
pub const MAX_RANDOM_RESTARTS: u32 = 10;
/// Random restarts selected when the demo opens
pub const DEFAULT_RANDOM_RESTARTS: u32 = 3;

// Live stats multipliers, applied to progress percent
/// Memory readout grows by this many MB per percent of progress
pub const MEMORY_PER_PERCENT: f64 = 1.5;
/// CPU readout grows by this many points per percent of progress
pub const CPU_PER_PERCENT: f64 = 2.0;
/// Solution quality grows by this many points per percent of progress
pub const QUALITY_PER_PERCENT: f64 = 0.8;
/// Ceiling shared by the memory, CPU and quality readouts
pub const LIVE_STAT_CAP: f64 = 100.0;
/// Nodes reported per simulation step
pub const NODES_PER_STEP: u64 = 10;
/// Seconds reported per simulation step
pub const SECONDS_PER_STEP: f64 = 0.1;

// Progress bar display settings
/// Width of the main progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Width of the live stat bars in characters
pub const STAT_BAR_WIDTH: u16 = 20;

/// Log filter applied when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LOG_FILTER: &str = "algosim=warn";
/// Log filter applied with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "algosim=debug";

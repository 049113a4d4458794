//! Immutable lookup data shared read-only by the whole process

/// Algorithm identifiers and their reference descriptors
pub mod algorithms;
/// Scale-bucketed benchmark rows and the complexity comparison table
pub mod comparison;
/// Input-size indexed duration table feeding the live chart
pub mod durations;

pub use algorithms::AlgorithmId;
pub use durations::{DURATION_TABLE, DurationRow, DurationTable};

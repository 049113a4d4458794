//! Benchmark rows by problem scale for the side-by-side comparison view

use crate::catalog::algorithms::{AlgorithmDescriptor, AlgorithmId};
use serde::Serialize;
use std::fmt;

/// Problem scale bucket on the comparison chart's x axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ScaleCategory {
    /// Small problems
    Small,
    /// Medium problems
    Medium,
    /// Large problems
    Large,
    /// Very large problems
    #[serde(rename = "Very Large")]
    VeryLarge,
}

impl fmt::Display for ScaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::VeryLarge => "Very Large",
        })
    }
}

/// Fabricated execution time of each algorithm at one scale, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRow {
    /// Scale bucket
    pub scale: ScaleCategory,
    /// Per-algorithm times in [`AlgorithmId::ALL`] order
    pub times: [u32; 5],
}

impl BenchmarkRow {
    /// Time recorded for `algorithm`
    pub const fn time(&self, algorithm: AlgorithmId) -> u32 {
        let [blind_search, a_star, hill_climbing, gradient_descent, parallel] = self.times;
        match algorithm {
            AlgorithmId::BlindSearch => blind_search,
            AlgorithmId::AStar => a_star,
            AlgorithmId::HillClimbing => hill_climbing,
            AlgorithmId::GradientDescent => gradient_descent,
            AlgorithmId::Parallel => parallel,
        }
    }

    /// Fastest algorithm at this scale
    pub fn fastest(&self) -> AlgorithmId {
        AlgorithmId::ALL
            .iter()
            .zip(self.times)
            .min_by_key(|&(_, t)| t)
            .map_or(AlgorithmId::Parallel, |(&id, _)| id)
    }
}

/// Benchmark rows, smallest scale first
pub static BENCHMARKS: [BenchmarkRow; 4] = [
    BenchmarkRow {
        scale: ScaleCategory::Small,
        times: [90, 40, 20, 60, 10],
    },
    BenchmarkRow {
        scale: ScaleCategory::Medium,
        times: [280, 100, 70, 140, 40],
    },
    BenchmarkRow {
        scale: ScaleCategory::Large,
        times: [800, 300, 250, 350, 90],
    },
    BenchmarkRow {
        scale: ScaleCategory::VeryLarge,
        times: [2000, 800, 600, 900, 150],
    },
];

/// Descriptors of every algorithm in catalog order, one per table row
pub fn complexity_table() -> impl Iterator<Item = &'static AlgorithmDescriptor> {
    AlgorithmId::ALL.into_iter().map(AlgorithmId::descriptor)
}

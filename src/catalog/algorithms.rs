//! Closed set of demo algorithms and their static descriptors

use crate::io::error::DemoError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifies which demo algorithm is selected
///
/// Serializes to the chart series key used by the duration table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlgorithmId {
    /// Uninformed breadth-first exploration
    BlindSearch,
    /// Heuristic-guided best-first search
    AStar,
    /// Local search toward better neighbours
    HillClimbing,
    /// Iterative cost-function minimisation
    GradientDescent,
    /// Work split across processors
    Parallel,
}

impl AlgorithmId {
    /// Every algorithm, in catalog order
    pub const ALL: [Self; 5] = [
        Self::BlindSearch,
        Self::AStar,
        Self::HillClimbing,
        Self::GradientDescent,
        Self::Parallel,
    ];

    /// Chart series key (`aStar`, `blindSearch`, ...)
    pub const fn key(self) -> &'static str {
        match self {
            Self::BlindSearch => "blindSearch",
            Self::AStar => "aStar",
            Self::HillClimbing => "hillClimbing",
            Self::GradientDescent => "gradientDescent",
            Self::Parallel => "parallel",
        }
    }

    /// Route slug of the algorithm detail view
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BlindSearch => "blind-search",
            Self::AStar => "heuristic-search",
            Self::HillClimbing => "hill-climbing",
            Self::GradientDescent => "gradient-descent",
            Self::Parallel => "parallel",
        }
    }

    /// Human-readable name used in selectors and chart legends
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BlindSearch => "Blind Search",
            Self::AStar => "A* Search",
            Self::HillClimbing => "Hill Climbing",
            Self::GradientDescent => "Gradient Descent",
            Self::Parallel => "Parallel",
        }
    }

    /// Short time-complexity label shown next to a running simulation
    pub const fn time_complexity_label(self) -> &'static str {
        match self {
            Self::BlindSearch | Self::AStar => "O(b^d)",
            Self::HillClimbing => "O(n)",
            Self::GradientDescent => "O(n·i)",
            Self::Parallel => "O(n/p)",
        }
    }

    /// Full static descriptor
    pub const fn descriptor(self) -> &'static AlgorithmDescriptor {
        match self {
            Self::BlindSearch => &BLIND_SEARCH,
            Self::AStar => &A_STAR,
            Self::HillClimbing => &HILL_CLIMBING,
            Self::GradientDescent => &GRADIENT_DESCENT,
            Self::Parallel => &PARALLEL,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AlgorithmId {
    type Err = DemoError;

    /// Accepts the chart key, the route slug or the display name, ignoring case and separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .replace('*', "star")
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "blindsearch" | "blind" | "bfs" => Ok(Self::BlindSearch),
            "astar" | "astarsearch" | "heuristicsearch" | "heuristic" => Ok(Self::AStar),
            "hillclimbing" | "hill" => Ok(Self::HillClimbing),
            "gradientdescent" | "gradient" => Ok(Self::GradientDescent),
            "parallel" | "parallelalgorithm" | "parallelalgorithms" => Ok(Self::Parallel),
            _ => Err(DemoError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// Qualitative scalability rating from the comparison table
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Scalability {
    /// Degrades quickly with problem size
    Poor,
    /// Usable on mid-sized problems
    Moderate,
    /// Handles large problems
    Good,
    /// Handles large problems with headroom
    #[serde(rename = "Very Good")]
    VeryGood,
    /// Scales with available hardware
    Excellent,
}

impl fmt::Display for Scalability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Poor => "Poor",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        })
    }
}

/// Static marketing and reference content for one algorithm
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmDescriptor {
    /// Algorithm this descriptor belongs to
    pub id: AlgorithmId,
    /// Heading of the detail view
    pub title: &'static str,
    /// One-sentence summary
    pub description: &'static str,
    /// Time complexity with explanation
    pub time_complexity: &'static str,
    /// Space complexity with explanation
    pub space_complexity: &'static str,
    /// Best-case complexity
    pub best_case: &'static str,
    /// Worst-case complexity
    pub worst_case: &'static str,
    /// Strengths
    pub advantages: &'static str,
    /// Weaknesses
    pub disadvantages: &'static str,
    /// Typical application domains
    pub applications: &'static [&'static str],
    /// Short use-case summary shown in the comparison table
    pub use_cases: &'static str,
    /// Scalability rating shown in the comparison table
    pub scalability: Scalability,
}

static BLIND_SEARCH: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::BlindSearch,
    title: "Blind Search Algorithms",
    description: "Algorithms that systematically explore all possible paths without using domain-specific knowledge.",
    time_complexity: "O(b^d) - where b is the branching factor and d is the depth",
    space_complexity: "O(b^d) - where b is the branching factor and d is the depth",
    best_case: "O(1) - when the start node is the goal",
    worst_case: "O(b^d) - when the goal is at maximum depth",
    advantages: "Guaranteed to find a solution if one exists. Complete.",
    disadvantages: "Inefficient for large search spaces.",
    applications: &[
        "Graph traversal",
        "Puzzle solving",
        "Web crawling",
        "Network routing",
    ],
    use_cases: "Graph traversal, puzzles",
    scalability: Scalability::Poor,
};

static A_STAR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::AStar,
    title: "Heuristic Search Algorithms",
    description: "Algorithms that use problem-specific knowledge to guide the search process more efficiently.",
    time_complexity: "O(b^d) - but often performs better in practice due to the heuristic",
    space_complexity: "O(b^d) - where b is the branching factor and d is the depth",
    best_case: "O(d) - when the heuristic perfectly guides to the goal",
    worst_case: "O(b^d) - when the heuristic is misleading",
    advantages: "Optimal and complete when using an admissible heuristic.",
    disadvantages: "High memory requirements for complex problems.",
    applications: &[
        "Pathfinding (GPS navigation)",
        "Game AI",
        "Robotics motion planning",
        "Constraint satisfaction problems",
    ],
    use_cases: "Pathfinding, routing",
    scalability: Scalability::Moderate,
};

static HILL_CLIMBING: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::HillClimbing,
    title: "Hill Climbing",
    description: "A local search algorithm that iteratively moves towards better solutions from an initial point.",
    time_complexity: "O(n) - where n is the size of the search space",
    space_complexity: "O(1) - only the current state is stored",
    best_case: "O(1) - when the initial state is a peak",
    worst_case: "O(n) - when every state is visited before reaching a peak",
    advantages: "Simple implementation and low memory usage.",
    disadvantages: "Can get stuck in local optima.",
    applications: &["Local optimization", "Scheduling", "Circuit layout"],
    use_cases: "Local optimization",
    scalability: Scalability::Good,
};

static GRADIENT_DESCENT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::GradientDescent,
    title: "Gradient Descent",
    description: "Optimization algorithm that iteratively adjusts parameters to minimize a cost function.",
    time_complexity: "O(n·i) - where n is the number of parameters and i the number of iterations",
    space_complexity: "O(n) - one value per parameter",
    best_case: "O(i) - when the cost surface is well conditioned",
    worst_case: "O(n·i) - when every iteration touches every parameter",
    advantages: "Effective for many optimization problems, especially in machine learning.",
    disadvantages: "May converge to local minima. Sensitive to learning rate.",
    applications: &["Machine learning", "Neural networks", "Regression"],
    use_cases: "ML, optimization",
    scalability: Scalability::VeryGood,
};

static PARALLEL: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::Parallel,
    title: "Parallel Algorithms",
    description: "Algorithms designed to be executed simultaneously on multiple processing units.",
    time_complexity: "O(n/p) - where n is the problem size and p the number of processors",
    space_complexity: "O(n) - total across all processors",
    best_case: "O(log n) - with enough processors for a reduction tree",
    worst_case: "O(n/p) - when the work divides evenly",
    advantages: "Significant speedup for large problems when properly parallelized.",
    disadvantages: "Communication overhead between processors. Not all problems can be efficiently parallelized.",
    applications: &["Big data processing", "Simulations", "Scientific computing"],
    use_cases: "Big data, simulations",
    scalability: Scalability::Excellent,
};

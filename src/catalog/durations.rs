//! Fixed input-size to per-algorithm duration lookup table

use crate::catalog::algorithms::AlgorithmId;
use serde::Serialize;

/// One row of the duration table
///
/// Field names serialize to the chart series keys so a renderer can plot
/// the rows directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationRow {
    /// Input size this row was measured at
    pub input_size: u32,
    /// Blind search duration in milliseconds
    pub blind_search: u32,
    /// A* search duration in milliseconds
    pub a_star: u32,
    /// Hill climbing duration in milliseconds
    pub hill_climbing: u32,
    /// Gradient descent duration in milliseconds
    pub gradient_descent: u32,
    /// Parallel algorithm duration in milliseconds
    pub parallel: u32,
}

impl DurationRow {
    /// Duration of `algorithm` at this row's input size
    pub const fn duration(&self, algorithm: AlgorithmId) -> u32 {
        match algorithm {
            AlgorithmId::BlindSearch => self.blind_search,
            AlgorithmId::AStar => self.a_star,
            AlgorithmId::HillClimbing => self.hill_climbing,
            AlgorithmId::GradientDescent => self.gradient_descent,
            AlgorithmId::Parallel => self.parallel,
        }
    }
}

const fn row(
    input_size: u32,
    blind_search: u32,
    a_star: u32,
    hill_climbing: u32,
    gradient_descent: u32,
    parallel: u32,
) -> DurationRow {
    DurationRow {
        input_size,
        blind_search,
        a_star,
        hill_climbing,
        gradient_descent,
        parallel,
    }
}

const ROWS: [DurationRow; 7] = [
    row(10, 50, 30, 20, 40, 15),
    row(50, 150, 70, 60, 90, 30),
    row(100, 300, 120, 100, 170, 45),
    row(200, 600, 220, 180, 320, 75),
    row(300, 900, 310, 260, 470, 100),
    row(400, 1200, 400, 340, 620, 125),
    row(500, 1500, 490, 420, 770, 150),
];

/// Immutable table of fabricated durations indexed by input size
///
/// Rows are ordered by strictly increasing input size, so every filter by
/// an upper input-size bound is a prefix of the table.
#[derive(Debug)]
pub struct DurationTable {
    rows: &'static [DurationRow],
}

/// Process-wide duration table
pub static DURATION_TABLE: DurationTable = DurationTable { rows: &ROWS };

impl DurationTable {
    /// All rows in input-size order
    pub const fn rows(&self) -> &'static [DurationRow] {
        self.rows
    }

    /// Rows with `input_size` at or below the bound, in original order
    pub fn up_to(&self, input_size: u32) -> &'static [DurationRow] {
        let end = self.rows.partition_point(|r| r.input_size <= input_size);
        self.rows.get(..end).unwrap_or(&[])
    }

    /// Largest row whose input size does not exceed `input_size`
    pub fn row_at(&self, input_size: u32) -> Option<&'static DurationRow> {
        self.up_to(input_size).last()
    }

    /// Duration of `algorithm` at the largest row not exceeding `input_size`
    ///
    /// Returns `None` when `input_size` is below the first row.
    pub fn duration_at(&self, algorithm: AlgorithmId, input_size: u32) -> Option<u32> {
        self.row_at(input_size).map(|r| r.duration(algorithm))
    }

    /// Check the strictly increasing input-size invariant
    pub fn is_strictly_increasing(&self) -> bool {
        self.rows
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.input_size < b.input_size))
    }
}

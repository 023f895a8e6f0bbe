use std::fmt;
use std::time::Duration;

use gridsearch_core::{Algorithm, Cell, HeuristicKind};

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// The goal was finalized.
    Succeeded,
    /// The frontier emptied before the goal was reached.
    Exhausted,
    /// The caller's context was cancelled mid-run.
    Cancelled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Succeeded => "succeeded",
            Self::Exhausted => "exhausted",
            Self::Cancelled => "cancelled",
        })
    }
}

/// Per-run statistics for display.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub algorithm: Algorithm,
    /// Set for A* only.
    pub heuristic: Option<HeuristicKind>,
    /// Number of finalized cells, goal included.
    pub nodes_explored: usize,
    /// Number of cells on the path, both endpoints included; 0 on failure.
    pub path_length: usize,
    /// Wall-clock time from engine construction to summary.
    pub elapsed: Duration,
    /// Whether the algorithm guarantees the path is shortest; false on
    /// failure.
    pub is_optimal: bool,
    /// Edges along the path; 0 on failure.
    pub path_cost: i32,
}

impl SearchStats {
    /// Display name: `BFS`, `DFS`, `UCS`, `A* (manhattan)` or
    /// `A* (euclidean)`.
    pub fn label(&self) -> String {
        match self.heuristic {
            Some(h) => format!("{} ({h})", self.algorithm),
            None => self.algorithm.to_string(),
        }
    }

    /// Presentational score in `0..=100`:
    /// `100 - (nodes_explored / path_length) * 10`, clamped at zero.
    pub fn efficiency_score(&self) -> u32 {
        let ratio = self.nodes_explored as f64 / self.path_length.max(1) as f64;
        (100.0 - ratio * 10.0).max(0.0).round() as u32
    }
}

/// Terminal output of a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultSummary {
    pub success: bool,
    pub outcome: Outcome,
    /// Start → goal; empty unless `success`.
    pub path: Vec<Cell>,
    /// Every finalized cell, in finalization order.
    pub visited: Vec<Cell>,
    pub stats: SearchStats,
}

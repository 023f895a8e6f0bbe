use gridsearch_core::{Algorithm, Cell, HeuristicKind};

use crate::frontier::Frontier;

/// Rule deciding whether a neighbor enters the frontier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Admit any neighbor whose cell is not yet finalized.
    Unvisited,
    /// Admit a non-finalized neighbor only if no cost is recorded for its
    /// cell yet or the new cost is strictly lower than the recorded one.
    CostImproving,
}

/// Policy that turns the shared expansion loop into one of the four
/// searches.
pub trait Strategy {
    /// Structure holding pending nodes.
    type Frontier: Frontier + Default;

    /// Which algorithm this policy implements.
    const ALGORITHM: Algorithm;

    /// Neighbor admission rule.
    const ADMISSION: Admission;

    /// Push neighbors in reverse topology order (down-right first) so that a
    /// LIFO frontier pops them up, down, left, right.
    const REVERSE_NEIGHBORS: bool = false;

    /// Estimated remaining cost from `from` to `goal`.
    fn heuristic(&self, _from: Cell, _goal: Cell) -> f64 {
        0.0
    }

    /// Frontier key for a node.
    fn priority(&self, path_cost: i32, heuristic: f64) -> f64 {
        f64::from(path_cost) + heuristic
    }

    /// Heuristic in use, if any.
    fn heuristic_kind(&self) -> Option<HeuristicKind> {
        None
    }
}

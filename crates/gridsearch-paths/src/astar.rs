use gridsearch_core::{Algorithm, Cell, Context, HeuristicKind};

use crate::distance::estimate;
use crate::engine::Search;
use crate::frontier::PriorityFrontier;
use crate::step::{Pacer, StepObserver};
use crate::summary::ResultSummary;
use crate::traits::{Admission, Strategy};

/// A*: priority frontier keyed by path cost plus a distance heuristic.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar {
    heuristic: HeuristicKind,
}

impl AStar {
    /// A* guided by `heuristic`.
    pub fn new(heuristic: HeuristicKind) -> Self {
        Self { heuristic }
    }
}

impl Strategy for AStar {
    type Frontier = PriorityFrontier;
    const ALGORITHM: Algorithm = Algorithm::AStar;
    const ADMISSION: Admission = Admission::CostImproving;

    #[inline]
    fn heuristic(&self, from: Cell, goal: Cell) -> f64 {
        estimate(self.heuristic, from, goal)
    }

    fn heuristic_kind(&self) -> Option<HeuristicKind> {
        Some(self.heuristic)
    }
}

/// Run A* from `start` to `goal` on a `size × size` grid.
///
/// `heuristic` defaults to Manhattan distance. Both heuristics are
/// admissible here, so the path cost always matches uniform-cost search.
pub fn astar<O, P>(
    start: Cell,
    goal: Cell,
    size: i32,
    heuristic: Option<HeuristicKind>,
    observer: &mut O,
    pacer: &mut P,
    ctx: &Context,
) -> ResultSummary
where
    O: StepObserver + ?Sized,
    P: Pacer + ?Sized,
{
    let strategy = AStar::new(heuristic.unwrap_or_default());
    Search::new(strategy, start, goal, size).run(observer, pacer, ctx)
}

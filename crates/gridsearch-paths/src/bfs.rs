use gridsearch_core::{Algorithm, Cell, Context};

use crate::engine::Search;
use crate::frontier::FifoFrontier;
use crate::step::{Pacer, StepObserver};
use crate::summary::ResultSummary;
use crate::traits::{Admission, Strategy};

/// Breadth-first search: FIFO frontier, admits every unvisited neighbor.
#[derive(Copy, Clone, Debug, Default)]
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    type Frontier = FifoFrontier;
    const ALGORITHM: Algorithm = Algorithm::Bfs;
    const ADMISSION: Admission = Admission::Unvisited;
}

/// Run a breadth-first search from `start` to `goal` on a `size × size`
/// grid. Every step counts 1, so the path found is a shortest one.
pub fn bfs<O, P>(
    start: Cell,
    goal: Cell,
    size: i32,
    observer: &mut O,
    pacer: &mut P,
    ctx: &Context,
) -> ResultSummary
where
    O: StepObserver + ?Sized,
    P: Pacer + ?Sized,
{
    Search::new(BreadthFirst, start, goal, size).run(observer, pacer, ctx)
}

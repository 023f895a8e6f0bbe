use gridsearch_core::{Algorithm, Cell, Context};

use crate::engine::Search;
use crate::frontier::PriorityFrontier;
use crate::step::{Pacer, StepObserver};
use crate::summary::ResultSummary;
use crate::traits::{Admission, Strategy};

/// Uniform-cost search: priority frontier keyed by accumulated path cost.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformCost;

impl Strategy for UniformCost {
    type Frontier = PriorityFrontier;
    const ALGORITHM: Algorithm = Algorithm::Ucs;
    const ADMISSION: Admission = Admission::CostImproving;
}

/// Run a uniform-cost search from `start` to `goal` on a `size × size`
/// grid.
pub fn ucs<O, P>(
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
    Search::new(UniformCost, start, goal, size).run(observer, pacer, ctx)
}

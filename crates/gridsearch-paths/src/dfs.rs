use gridsearch_core::{Algorithm, Cell, Context};

use crate::engine::Search;
use crate::frontier::LifoFrontier;
use crate::step::{Pacer, StepObserver};
use crate::summary::ResultSummary;
use crate::traits::{Admission, Strategy};

/// Depth-first search: LIFO frontier, neighbors pushed in reverse so they
/// pop up, down, left, right.
#[derive(Copy, Clone, Debug, Default)]
pub struct DepthFirst;

impl Strategy for DepthFirst {
    type Frontier = LifoFrontier;
    const ALGORITHM: Algorithm = Algorithm::Dfs;
    const ADMISSION: Admission = Admission::Unvisited;
    const REVERSE_NEIGHBORS: bool = true;
}

/// Run a depth-first search from `start` to `goal` on a `size × size` grid.
///
/// Always terminates on a finite grid, but the path is usually not the
/// shortest and is never reported as optimal.
pub fn dfs<O, P>(
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
    Search::new(DepthFirst, start, goal, size).run(observer, pacer, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pacing, StepObservation};

    fn run(start: Cell, goal: Cell, size: i32) -> ResultSummary {
        dfs(
            start,
            goal,
            size,
            &mut |_: &StepObservation| {},
            &mut Pacing::none(),
            &Context::new(),
        )
    }

    #[test]
    fn dives_down_the_first_column() {
        let summary = run(Cell::new(0, 0), Cell::new(2, 2), 3);
        assert_eq!(
            &summary.visited[..3],
            &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        assert!(summary.success);
        assert!(!summary.stats.is_optimal);
        assert_eq!(summary.stats.path_cost as usize, summary.path.len() - 1);
    }

    #[test]
    fn snake_path_is_not_shortest() {
        // Goal is one step right of start, but DFS heads down first.
        let summary = run(Cell::new(0, 0), Cell::new(0, 1), 3);
        assert!(summary.success);
        assert!(summary.stats.path_cost > 1);
        assert!(!summary.stats.is_optimal);
        for w in summary.path.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
    }
}

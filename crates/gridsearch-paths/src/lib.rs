//! Observable path search on square, 4-connected grids.
//!
//! Four interchangeable searches share one expansion loop ([`Search`]):
//!
//! - **BFS** over a FIFO queue ([`bfs`])
//! - **DFS** over a LIFO stack ([`dfs`])
//! - **Uniform-cost** over a stable priority queue ([`ucs`])
//! - **A\*** with a Manhattan or Euclidean heuristic ([`astar`])
//!
//! Every finalized cell (the goal excepted) is reported to a
//! [`StepObserver`] as a [`StepObservation`], after which a [`Pacer`] may
//! pause the run. Observers and pacers only see the search; removing them
//! never changes the final [`ResultSummary`].
//!
//! # Strategy hierarchy
//!
//! | Strategy | Frontier | Admission | Key |
//! |---|---|---|---|
//! | [`BreadthFirst`] | [`FifoFrontier`] | unvisited | insertion order |
//! | [`DepthFirst`] | [`LifoFrontier`] | unvisited | reverse insertion |
//! | [`UniformCost`] | [`PriorityFrontier`] | cost-improving | path cost |
//! | [`AStar`] | [`PriorityFrontier`] | cost-improving | path cost + heuristic |

mod astar;
mod bfs;
mod dfs;
mod distance;
mod engine;
mod frontier;
mod neighbors;
mod node;
mod step;
mod summary;
mod traits;
mod ucs;
pub mod view;

use gridsearch_core::{Algorithm, Context, SearchConfig};

pub use astar::{AStar, astar};
pub use bfs::{BreadthFirst, bfs};
pub use dfs::{DepthFirst, dfs};
pub use distance::{estimate, euclidean, manhattan};
pub use engine::{Search, SearchState, Step, UNREACHABLE};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use neighbors::{Neighbors, neighbors};
pub use node::{NodeArena, NodeId, SearchNode};
pub use step::{Pacer, Pacing, StepObservation, StepObserver};
pub use summary::{Outcome, ResultSummary, SearchStats};
pub use traits::{Admission, Strategy};
pub use ucs::{UniformCost, ucs};

/// Run the search described by `config`, pausing `config.delay()` after
/// every observation.
pub fn run<O>(config: &SearchConfig, observer: &mut O, ctx: &Context) -> ResultSummary
where
    O: StepObserver + ?Sized,
{
    run_with(config, observer, &mut Pacing::new(config.delay()), ctx)
}

/// Like [`run`], with a caller-supplied pacer instead of the configured
/// delay.
pub fn run_with<O, P>(
    config: &SearchConfig,
    observer: &mut O,
    pacer: &mut P,
    ctx: &Context,
) -> ResultSummary
where
    O: StepObserver + ?Sized,
    P: Pacer + ?Sized,
{
    let (start, goal, size) = (config.start, config.goal, config.size);
    match config.algorithm {
        Algorithm::Bfs => bfs(start, goal, size, observer, pacer, ctx),
        Algorithm::Dfs => dfs(start, goal, size, observer, pacer, ctx),
        Algorithm::Ucs => ucs(start, goal, size, observer, pacer, ctx),
        Algorithm::AStar => astar(start, goal, size, config.heuristic, observer, pacer, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, ResultSummary, StepObservation, manhattan, run};
    use gridsearch_core::{Algorithm, Cell, Context, HeuristicKind, SearchConfig};
    use proptest::prelude::*;

    fn batch(config: &SearchConfig) -> ResultSummary {
        run(config, &mut |_: &StepObservation| {}, &Context::new())
    }

    fn hops(a: Cell, b: Cell) -> i32 {
        manhattan(a, b)
    }

    fn assert_well_formed(summary: &ResultSummary, start: Cell, goal: Cell) {
        assert!(summary.success);
        assert_eq!(summary.path.first(), Some(&start));
        assert_eq!(summary.path.last(), Some(&goal));
        for w in summary.path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a move", w[0], w[1]);
        }
        assert_eq!(summary.stats.path_length, summary.path.len());
        assert_eq!(summary.stats.path_cost as usize, summary.path.len() - 1);
    }

    fn cells(max: i32) -> impl Strategy<Value = (i32, Cell, Cell)> {
        (2..=max).prop_flat_map(|size| {
            (
                Just(size),
                (0..size, 0..size).prop_map(Cell::from),
                (0..size, 0..size).prop_map(Cell::from),
            )
        })
    }

    #[test]
    fn concrete_three_by_three() {
        let (start, goal) = (Cell::new(0, 0), Cell::new(2, 2));
        let b = batch(&SearchConfig::new(start, goal, 3, Algorithm::Bfs));
        assert_eq!(b.stats.path_length, 5);
        assert_eq!(b.stats.path_cost, 4);
        assert!((5..=9).contains(&b.stats.nodes_explored));
        assert!(b.stats.is_optimal);

        let u = batch(&SearchConfig::new(start, goal, 3, Algorithm::Ucs));
        let a = batch(&SearchConfig::new(start, goal, 3, Algorithm::AStar));
        assert_eq!(u.stats.path_cost, 4);
        assert_eq!(a.stats.path_cost, 4);
        assert_eq!(a.stats.path_cost as usize, b.stats.path_length - 1);
    }

    #[test]
    fn start_equals_goal_for_every_algorithm() {
        let c = Cell::new(1, 2);
        for algorithm in Algorithm::ALL {
            let s = batch(&SearchConfig::new(c, c, 4, algorithm));
            assert!(s.success);
            assert_eq!(s.path, vec![c]);
            assert_eq!(s.stats.path_cost, 0);
            assert_eq!(s.stats.nodes_explored, 1);
        }
    }

    #[test]
    fn cancellation_mid_run() {
        let (start, goal, size) = (Cell::new(0, 0), Cell::new(5, 5), 6);
        for algorithm in Algorithm::ALL {
            let ctx = Context::new();
            let mut seen = 0;
            let config = SearchConfig::new(start, goal, size, algorithm);
            let summary = run(
                &config,
                &mut |_: &StepObservation| {
                    seen += 1;
                    if seen == 4 {
                        ctx.cancel();
                    }
                },
                &ctx,
            );
            assert!(!summary.success);
            assert_eq!(summary.outcome, Outcome::Cancelled);
            assert!(summary.stats.nodes_explored < (size * size) as usize);
            assert_eq!(summary.stats.nodes_explored, 4);
            assert!(summary.path.is_empty());
            assert_eq!(summary.stats.path_length, 0);
        }
    }

    #[test]
    fn pre_cancelled_context_explores_nothing() {
        let ctx = Context::new();
        ctx.cancel();
        let config = SearchConfig::new(Cell::new(0, 0), Cell::new(1, 1), 2, Algorithm::Bfs);
        let summary = run(&config, &mut |_: &StepObservation| {}, &ctx);
        assert_eq!(summary.outcome, Outcome::Cancelled);
        assert_eq!(summary.stats.nodes_explored, 0);
    }

    #[test]
    fn pacing_does_not_change_the_result() {
        let config = SearchConfig::new(Cell::new(0, 3), Cell::new(3, 0), 4, Algorithm::AStar)
            .with_heuristic(HeuristicKind::Euclidean);
        let quick = batch(&config);
        let mut observed = Vec::new();
        let paced = run(
            &config.clone().with_delay_ms(1),
            &mut |s: &StepObservation| observed.push(s.current),
            &Context::new(),
        );
        assert_eq!(quick.path, paced.path);
        assert_eq!(quick.visited, paced.visited);
        assert_eq!(observed, paced.visited[..paced.visited.len() - 1].to_vec());
    }

    #[test]
    fn runs_are_reproducible() {
        for algorithm in Algorithm::ALL {
            let config = SearchConfig::new(Cell::new(2, 1), Cell::new(0, 4), 5, algorithm);
            let mut first = Vec::new();
            let mut second = Vec::new();
            let a = run(&config, &mut |s: &StepObservation| first.push(s.clone()), &Context::new());
            let b = run(&config, &mut |s: &StepObservation| second.push(s.clone()), &Context::new());
            assert_eq!(first, second);
            assert_eq!(a.path, b.path);
        }
    }

    proptest! {
        #[test]
        fn bfs_and_ucs_find_shortest_paths((size, start, goal) in cells(9)) {
            for algorithm in [Algorithm::Bfs, Algorithm::Ucs] {
                let s = batch(&SearchConfig::new(start, goal, size, algorithm));
                assert_well_formed(&s, start, goal);
                prop_assert!(s.stats.is_optimal);
                prop_assert_eq!(s.stats.path_cost, hops(start, goal));
            }
        }

        #[test]
        fn astar_matches_ucs_cost((size, start, goal) in cells(9), euclid in any::<bool>()) {
            let heuristic = if euclid { HeuristicKind::Euclidean } else { HeuristicKind::Manhattan };
            let a = batch(&SearchConfig::new(start, goal, size, Algorithm::AStar).with_heuristic(heuristic));
            let u = batch(&SearchConfig::new(start, goal, size, Algorithm::Ucs));
            assert_well_formed(&a, start, goal);
            prop_assert_eq!(a.stats.path_cost, u.stats.path_cost);
            prop_assert!(a.stats.nodes_explored <= u.stats.nodes_explored);
            prop_assert!(a.stats.is_optimal);
        }

        #[test]
        fn dfs_terminates_and_is_never_optimal((size, start, goal) in cells(9)) {
            let s = batch(&SearchConfig::new(start, goal, size, Algorithm::Dfs));
            assert_well_formed(&s, start, goal);
            prop_assert!(!s.stats.is_optimal);
            prop_assert!(s.stats.nodes_explored <= (size * size) as usize);
        }

        #[test]
        fn every_cell_finalized_at_most_once((size, start, goal) in cells(7)) {
            for algorithm in Algorithm::ALL {
                let s = batch(&SearchConfig::new(start, goal, size, algorithm));
                let mut seen = std::collections::HashSet::new();
                prop_assert!(s.visited.iter().all(|c| seen.insert(*c)));
                prop_assert_eq!(s.stats.nodes_explored, s.visited.len());
            }
        }
    }
}

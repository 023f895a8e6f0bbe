use std::time::Instant;

use gridsearch_core::{Cell, Context};
use log::{debug, trace};

use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::step::{Pacer, StepObservation, StepObserver};
use crate::summary::{Outcome, ResultSummary, SearchStats};
use crate::traits::{Admission, Strategy};

/// Sentinel meaning "no cost recorded" in the best-cost table.
pub const UNREACHABLE: i32 = i32::MAX;

/// Lifecycle of a [`Search`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Succeeded,
    Exhausted,
    Cancelled,
}

impl SearchState {
    /// Whether the run has ended.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Self::Running
    }
}

/// Result of one [`Search::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// A cell was finalized and the run continues.
    Expanded(StepObservation),
    /// The run is over.
    Done(SearchState),
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One search run over a `size × size` grid, driven step by step.
///
/// All per-run state (node arena, frontier, finalized set, best-cost table,
/// visit order) lives here and is dropped with the run; nothing carries over
/// to the next one.
pub struct Search<S: Strategy> {
    strategy: S,
    start: Cell,
    goal: Cell,
    size: i32,
    arena: NodeArena,
    frontier: S::Frontier,
    finalized: Vec<bool>,
    best_cost: Vec<i32>,
    visited: Vec<Cell>,
    // Finalized by the last step, expanded at the start of the next one.
    pending: Option<NodeId>,
    goal_node: Option<NodeId>,
    state: SearchState,
    started: Instant,
    nbuf: Neighbors,
}

impl<S: Strategy> Search<S> {
    /// Prepare a run from `start` to `goal`.
    ///
    /// Both cells must lie inside the grid; this is not rechecked.
    pub fn new(strategy: S, start: Cell, goal: Cell, size: i32) -> Self {
        let len = (size.max(0) as usize).pow(2);
        let mut search = Self {
            strategy,
            start,
            goal,
            size,
            arena: NodeArena::with_capacity(len),
            frontier: S::Frontier::default(),
            finalized: vec![false; len],
            best_cost: vec![UNREACHABLE; len],
            visited: Vec::new(),
            pending: None,
            goal_node: None,
            state: SearchState::Running,
            started: Instant::now(),
            nbuf: Neighbors::new(),
        };

        let h = search.strategy.heuristic(start, goal);
        let root = search.arena.push(SearchNode::root(start, h));
        let slot = search.slot(start);
        search.best_cost[slot] = 0;
        let priority = search.strategy.priority(0, h);
        search.frontier.push(root, priority);
        search
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Finalized cells so far, in order.
    #[inline]
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Number of finalized cells so far.
    #[inline]
    pub fn nodes_explored(&self) -> usize {
        self.visited.len()
    }

    /// Stop the run. Has no effect once the run has ended.
    pub fn cancel(&mut self) {
        if self.state == SearchState::Running {
            self.state = SearchState::Cancelled;
            self.pending = None;
        }
    }

    /// Advance to the next finalization.
    ///
    /// First expands the cell finalized by the previous call, then pops the
    /// frontier, silently discarding entries whose cell is already
    /// finalized, until a fresh cell is finalized. Returns its observation,
    /// or [`Step::Done`] if that cell is the goal or the frontier ran dry.
    pub fn step(&mut self) -> Step {
        if self.state.is_terminal() {
            return Step::Done(self.state);
        }
        if let Some(id) = self.pending.take() {
            self.expand(id);
        }

        loop {
            let Some(id) = self.frontier.pop() else {
                self.state = SearchState::Exhausted;
                return Step::Done(self.state);
            };
            let cell = self.arena[id].cell;
            let slot = self.slot(cell);

            // Stale duplicate of an already-finalized cell.
            if self.finalized[slot] {
                continue;
            }
            self.finalized[slot] = true;
            self.visited.push(cell);

            if cell == self.goal {
                self.goal_node = Some(id);
                self.state = SearchState::Succeeded;
                return Step::Done(self.state);
            }

            self.pending = Some(id);
            return Step::Expanded(self.observe(id));
        }
    }

    /// Drive the run to completion.
    ///
    /// Every iteration checks `ctx`, then finalizes one cell, hands its
    /// observation to `observer` and finally lets `pacer` pause before the
    /// next expansion. Neither the observer nor the pacer can influence
    /// the result.
    pub fn run<O, P>(mut self, observer: &mut O, pacer: &mut P, ctx: &Context) -> ResultSummary
    where
        O: StepObserver + ?Sized,
        P: Pacer + ?Sized,
    {
        debug!(
            "{}: search {} -> {} on {}x{} grid",
            S::ALGORITHM,
            self.start,
            self.goal,
            self.size,
            self.size
        );
        loop {
            if ctx.is_done() {
                self.cancel();
                break;
            }
            match self.step() {
                Step::Expanded(obs) => {
                    trace!(
                        "{}: finalized {} (#{}, frontier {})",
                        S::ALGORITHM,
                        obs.current,
                        obs.visited.len(),
                        obs.frontier.len()
                    );
                    observer.observe(&obs);
                    pacer.pause(ctx);
                }
                Step::Done(_) => break,
            }
        }
        self.into_summary()
    }

    /// Summarize the run.
    ///
    /// A run that is still [`SearchState::Running`] is reported as
    /// cancelled: the caller stopped driving it.
    pub fn into_summary(self) -> ResultSummary {
        let outcome = match self.state {
            SearchState::Succeeded => Outcome::Succeeded,
            SearchState::Exhausted => Outcome::Exhausted,
            SearchState::Running | SearchState::Cancelled => Outcome::Cancelled,
        };
        let (path, path_cost) = match self.goal_node {
            Some(id) => (self.arena.path_to(id), self.arena[id].path_cost),
            None => (Vec::new(), 0),
        };
        let success = outcome == Outcome::Succeeded;
        let stats = SearchStats {
            algorithm: S::ALGORITHM,
            heuristic: self.strategy.heuristic_kind(),
            nodes_explored: self.visited.len(),
            path_length: path.len(),
            elapsed: self.started.elapsed(),
            is_optimal: success && S::ALGORITHM.is_optimal(),
            path_cost,
        };
        debug!(
            "{}: {} after {} expansions, path cost {}",
            stats.label(),
            outcome,
            stats.nodes_explored,
            stats.path_cost
        );
        ResultSummary {
            success,
            outcome,
            path,
            visited: self.visited,
            stats,
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn expand(&mut self, id: NodeId) {
        let node = self.arena[id];
        let tentative = node.path_cost + 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let nbs = nbuf.in_grid(node.cell, self.size);
        let count = nbs.len();

        for k in 0..count {
            let nc = if S::REVERSE_NEIGHBORS {
                nbs[count - 1 - k]
            } else {
                nbs[k]
            };
            let slot = self.slot(nc);
            if self.finalized[slot] {
                continue;
            }
            if S::ADMISSION == Admission::CostImproving {
                if self.best_cost[slot] != UNREACHABLE && tentative >= self.best_cost[slot] {
                    continue;
                }
                self.best_cost[slot] = tentative;
            }

            let h = self.strategy.heuristic(nc, self.goal);
            let child = self.arena.push(SearchNode {
                cell: nc,
                parent: Some(id),
                path_cost: tentative,
                heuristic: h,
            });
            let priority = self.strategy.priority(tentative, h);
            self.frontier.push(child, priority);
        }

        self.nbuf = nbuf;
    }

    fn observe(&self, id: NodeId) -> StepObservation {
        let node = &self.arena[id];
        let cost_aware = S::ADMISSION == Admission::CostImproving;
        let informed = S::ALGORITHM.is_informed();
        StepObservation {
            current: node.cell,
            visited: self.visited.clone(),
            frontier: self
                .frontier
                .snapshot()
                .into_iter()
                .map(|fid| self.arena[fid].cell)
                .collect(),
            path_cost: cost_aware.then_some(node.path_cost),
            heuristic: informed.then_some(node.heuristic),
            total_cost: informed.then(|| node.priority()),
        }
    }

    /// Flat index of an in-grid cell.
    #[inline]
    fn slot(&self, c: Cell) -> usize {
        match c.index(self.size) {
            Some(i) => i,
            None => panic!("cell {c} escaped the {0}x{0} grid", self.size),
        }
    }
}

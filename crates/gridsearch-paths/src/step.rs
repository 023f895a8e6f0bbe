use std::thread;
use std::time::{Duration, Instant};

use gridsearch_core::{Cell, Context};

/// Snapshot emitted once per finalized cell (the goal excepted).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepObservation {
    /// The cell just finalized.
    pub current: Cell,
    /// Every finalized cell so far, in finalization order.
    pub visited: Vec<Cell>,
    /// Cells pending in the frontier, stale duplicates included. Order
    /// follows the frontier: queue front to back, stack bottom to top,
    /// priority queue in extraction order.
    pub frontier: Vec<Cell>,
    /// Accumulated cost of `current` (cost-aware searches only).
    pub path_cost: Option<i32>,
    /// Heuristic estimate at `current` (A* only).
    pub heuristic: Option<f64>,
    /// `path_cost + heuristic` (A* only).
    pub total_cost: Option<f64>,
}

/// Receives every step observation, in order.
///
/// The engine does not resume until `observe` returns.
pub trait StepObserver {
    fn observe(&mut self, step: &StepObservation);
}

impl<F: FnMut(&StepObservation)> StepObserver for F {
    #[inline]
    fn observe(&mut self, step: &StepObservation) {
        self(step)
    }
}

/// Second suspension point of every iteration, after the observer.
pub trait Pacer {
    /// Block until the next expansion may begin. Implementations should
    /// return early once `ctx` is cancelled.
    fn pause(&mut self, ctx: &Context);
}

impl<F: FnMut(&Context)> Pacer for F {
    #[inline]
    fn pause(&mut self, ctx: &Context) {
        self(ctx)
    }
}

/// Longest single sleep while pacing; bounds cancellation latency.
const PACING_SLICE: Duration = Duration::from_millis(16);

/// Fixed inter-step delay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    /// Pause for `delay` after every step.
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pause for `ms` milliseconds after every step.
    pub const fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// No pause at all (batch mode).
    pub const fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured delay.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Pacer for Pacing {
    fn pause(&mut self, ctx: &Context) {
        if self.delay.is_zero() {
            return;
        }
        let deadline = Instant::now() + self.delay;
        loop {
            if ctx.is_done() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            thread::sleep((deadline - now).min(PACING_SLICE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pacing_returns_immediately() {
        let ctx = Context::new();
        let started = Instant::now();
        Pacing::none().pause(&ctx);
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn pacing_sleeps_for_delay() {
        let ctx = Context::new();
        let started = Instant::now();
        Pacing::from_millis(30).pause(&ctx);
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn cancelled_context_cuts_pacing_short() {
        let ctx = Context::new();
        ctx.cancel();
        let started = Instant::now();
        Pacing::from_millis(5_000).pause(&ctx);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn closures_are_observers_and_pacers() {
        let mut seen = Vec::new();
        let mut observer = |s: &StepObservation| seen.push(s.current);
        let step = StepObservation {
            current: Cell::new(1, 2),
            visited: vec![Cell::new(1, 2)],
            frontier: Vec::new(),
            path_cost: None,
            heuristic: None,
            total_cost: None,
        };
        observer.observe(&step);
        let mut pauses = 0;
        let mut pacer = |_: &Context| pauses += 1;
        pacer.pause(&Context::new());
        assert_eq!(pauses, 1);
        assert_eq!(seen, vec![Cell::new(1, 2)]);
    }
}

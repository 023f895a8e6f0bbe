//! Statistics panel shown once a run has ended.

use std::fmt;
use std::time::Duration;

use gridsearch_core::Algorithm;
use gridsearch_paths::{Outcome, ResultSummary};

/// `N ms` below one second, `S.SS s` above.
pub fn format_elapsed(d: Duration) -> String {
    let ms = d.as_millis();
    if ms < 1000 {
        format!("{ms} ms")
    } else {
        format!("{:.2} s", d.as_secs_f64())
    }
}

/// Human name and traits of an algorithm.
pub fn describe(algorithm: Algorithm) -> (&'static str, &'static [&'static str]) {
    match algorithm {
        Algorithm::Bfs => (
            "Breadth-first search",
            &["shortest path guaranteed", "complete", "FIFO queue"],
        ),
        Algorithm::Dfs => ("Depth-first search", &["fast", "low memory", "LIFO stack"]),
        Algorithm::Ucs => (
            "Uniform-cost search",
            &["lowest cost guaranteed", "priority queue", "handles varying costs"],
        ),
        Algorithm::AStar => (
            "A* search",
            &["optimal and informed", "heuristic guided", "fastest optimal search"],
        ),
    }
}

/// Multi-line text rendering of a [`ResultSummary`].
pub struct StatsPanel<'a>(pub &'a ResultSummary);

impl fmt::Display for StatsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.0.stats;
        let banner = match self.0.outcome {
            Outcome::Succeeded => "Path found!",
            Outcome::Exhausted => "No path found!",
            Outcome::Cancelled => "Search cancelled.",
        };
        let (name, traits) = describe(s.algorithm);

        writeln!(f, "{banner}")?;
        writeln!(f, "{name} [{}]: {}", s.label(), traits.join(", "))?;
        writeln!(f, "  nodes explored: {}", s.nodes_explored)?;
        writeln!(f, "  path length:    {}", s.path_length)?;
        writeln!(f, "  elapsed:        {}", format_elapsed(s.elapsed))?;
        writeln!(f, "  path cost:      {}", s.path_cost)?;
        writeln!(
            f,
            "  solution:       {}",
            if s.is_optimal { "optimal" } else { "not optimal" }
        )?;
        write!(f, "  efficiency:     {}/100", s.efficiency_score())?;
        if let Some(h) = s.heuristic {
            write!(f, "\n  heuristic:      {h}")?;
        }
        Ok(())
    }
}

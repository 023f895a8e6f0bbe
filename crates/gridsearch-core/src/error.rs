//! Errors reported before a search run starts.

use std::fmt;

use crate::geom::Cell;

/// A configuration the engine refuses to run.
///
/// Running out of frontier or being cancelled are not errors; those are
/// reported through the run's result summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The algorithm selector names none of the known variants.
    InvalidAlgorithm(String),
    /// The heuristic selector names none of the known distance estimates.
    InvalidHeuristic(String),
    /// The grid size is outside the accepted range.
    InvalidGridSize { size: i32, min: i32, max: i32 },
    /// A start or goal cell lies outside the grid.
    OutOfGrid { cell: Cell, size: i32 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlgorithm(s) => {
                write!(f, "unknown algorithm \u{201c}{s}\u{201d} (expected bfs, dfs, ucs or astar)")
            }
            Self::InvalidHeuristic(s) => {
                write!(f, "unknown heuristic \u{201c}{s}\u{201d} (expected manhattan or euclidean)")
            }
            Self::InvalidGridSize { size, min, max } => {
                write!(f, "grid size {size} out of range [{min}, {max}]")
            }
            Self::OutOfGrid { cell, size } => {
                write!(f, "cell {cell} lies outside the {size}\u{d7}{size} grid")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = SearchError::InvalidAlgorithm("greedy".into());
        assert!(e.to_string().contains("greedy"));

        let e = SearchError::InvalidGridSize {
            size: 20,
            min: 2,
            max: 15,
        };
        assert_eq!(e.to_string(), "grid size 20 out of range [2, 15]");

        let e = SearchError::OutOfGrid {
            cell: Cell::new(5, 0),
            size: 3,
        };
        assert!(e.to_string().contains("(5, 0)"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(SearchError::InvalidHeuristic("x".into()));
        assert!(boxed.to_string().contains("heuristic"));
    }
}

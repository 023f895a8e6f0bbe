//! Run configuration: [`Algorithm`], [`HeuristicKind`] and [`SearchConfig`].
//!
//! A front-end collects these once and hands the engine a single
//! [`SearchConfig`]; the engine never reads any global state.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::SearchError;
use crate::geom::Cell;

/// Smallest grid a front-end offers.
pub const MIN_GRID_SIZE: i32 = 2;

/// Largest grid a front-end offers.
pub const MAX_GRID_SIZE: i32 = 15;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The four interchangeable search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search over a FIFO queue.
    Bfs,
    /// Depth-first search over a LIFO stack.
    Dfs,
    /// Uniform-cost search ordered by accumulated path cost.
    Ucs,
    /// A* ordered by path cost plus a distance heuristic.
    AStar,
}

impl Algorithm {
    /// Every variant, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Ucs, Self::AStar];

    /// Whether the variant is guaranteed to return a shortest path.
    ///
    /// A* is only optimal with an admissible heuristic, which both
    /// [`HeuristicKind`]s are on a unit-cost 4-connected grid.
    #[inline]
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Whether the variant consults a heuristic.
    #[inline]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::AStar => "A*",
        })
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ucs" => Ok(Self::Ucs),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(SearchError::InvalidAlgorithm(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// HeuristicKind
// ---------------------------------------------------------------------------

/// Distance estimate used by A*.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    /// L1 distance.
    #[default]
    Manhattan,
    /// Straight-line distance.
    Euclidean,
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        })
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(SearchError::InvalidHeuristic(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Everything one run needs, supplied by the caller as a single value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub start: Cell,
    pub goal: Cell,
    pub size: i32,
    pub algorithm: Algorithm,
    /// Only consulted by [`Algorithm::AStar`]; `None` means Manhattan.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heuristic: Option<HeuristicKind>,
    /// Pause after every step observation, in milliseconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub delay_ms: u64,
}

impl SearchConfig {
    /// A configuration with no pacing delay and the default heuristic.
    pub fn new(start: Cell, goal: Cell, size: i32, algorithm: Algorithm) -> Self {
        Self {
            start,
            goal,
            size,
            algorithm,
            heuristic: None,
            delay_ms: 0,
        }
    }

    /// Build a configuration from user-facing selector strings.
    ///
    /// An unknown algorithm or heuristic is rejected here, before any run
    /// is attempted.
    pub fn from_selectors(
        start: Cell,
        goal: Cell,
        size: i32,
        algorithm: &str,
        heuristic: Option<&str>,
    ) -> Result<Self, SearchError> {
        let algorithm = algorithm.parse()?;
        let heuristic = heuristic.map(str::parse).transpose()?;
        Ok(Self {
            heuristic,
            ..Self::new(start, goal, size, algorithm)
        })
    }

    /// Select the A* heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Set the per-step pacing delay (builder).
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The heuristic A* will use.
    #[inline]
    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic.unwrap_or_default()
    }

    /// The pacing delay as a [`Duration`].
    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Check the caller-side preconditions: a non-negative size and both
    /// endpoints inside the grid.
    ///
    /// The engine itself never calls this.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.size < 0 {
            return Err(SearchError::InvalidGridSize {
                size: self.size,
                min: 0,
                max: i32::MAX,
            });
        }
        for cell in [self.start, self.goal] {
            if !cell.in_grid(self.size) {
                return Err(SearchError::OutOfGrid {
                    cell,
                    size: self.size,
                });
            }
        }
        Ok(())
    }
}

/// Check a user-entered grid size against the front-end bounds.
pub fn validate_grid_size(size: i32) -> Result<i32, SearchError> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(SearchError::InvalidGridSize {
            size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(size)
}

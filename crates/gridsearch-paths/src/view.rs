//! Per-cell display flags derived from step observations and results.
//!
//! A renderer only ever needs to know, for each cell, which of a handful of
//! roles it currently plays. [`FlagGrid`] keeps that table up to date from
//! the engine's output; nothing here feeds back into a search.

use std::ops::{BitAnd, BitOr};

use gridsearch_core::Cell;

use crate::step::StepObservation;
use crate::summary::ResultSummary;

// ---------------------------------------------------------------------------
// CellFlags
// ---------------------------------------------------------------------------

/// Bitmask of the roles a cell plays in the current display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFlags(pub u8);

impl CellFlags {
    pub const NONE: Self = Self(0);
    pub const START: Self = Self(1 << 0);
    pub const GOAL: Self = Self(1 << 1);
    pub const VISITED: Self = Self(1 << 2);
    pub const FRONTIER: Self = Self(1 << 3);
    pub const CURRENT: Self = Self(1 << 4);
    pub const PATH: Self = Self(1 << 5);

    /// Flags rewritten by every step observation.
    const PROGRESS: Self = Self(Self::VISITED.0 | Self::FRONTIER.0 | Self::CURRENT.0);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Mask without the bits of `other`.
    #[inline]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for CellFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CellFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// FlagGrid
// ---------------------------------------------------------------------------

/// Dense `size × size` table of [`CellFlags`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagGrid {
    size: i32,
    flags: Vec<CellFlags>,
}

impl FlagGrid {
    /// A grid with only the start and goal marked.
    pub fn new(size: i32, start: Cell, goal: Cell) -> Self {
        let len = (size.max(0) as usize).pow(2);
        let mut grid = Self {
            size,
            flags: vec![CellFlags::NONE; len],
        };
        grid.mark(start, CellFlags::START);
        grid.mark(goal, CellFlags::GOAL);
        grid
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Flags at `c`; [`CellFlags::NONE`] outside the grid.
    #[inline]
    pub fn at(&self, c: Cell) -> CellFlags {
        c.index(self.size)
            .map_or(CellFlags::NONE, |i| self.flags[i])
    }

    /// Replace the progress flags with those of `step`.
    pub fn apply_step(&mut self, step: &StepObservation) {
        self.clear(CellFlags::PROGRESS);
        for &c in &step.visited {
            self.mark(c, CellFlags::VISITED);
        }
        for &c in &step.frontier {
            self.mark(c, CellFlags::FRONTIER);
        }
        self.mark(step.current, CellFlags::CURRENT);
    }

    /// Show the final state of a run: every finalized cell and the path.
    pub fn apply_result(&mut self, result: &ResultSummary) {
        self.clear(CellFlags::PROGRESS.without(CellFlags::VISITED) | CellFlags::PATH);
        for &c in &result.visited {
            self.mark(c, CellFlags::VISITED);
        }
        for &c in &result.path {
            self.mark(c, CellFlags::PATH);
        }
    }

    /// Number of cells whose flags contain `flag`.
    pub fn count(&self, flag: CellFlags) -> usize {
        self.flags.iter().filter(|f| f.contains(flag)).count()
    }

    /// Iterate over `(cell, flags)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellFlags)> + '_ {
        self.flags
            .iter()
            .enumerate()
            .map(|(i, &f)| (Cell::from_index(i, self.size), f))
    }

    fn mark(&mut self, c: Cell, flag: CellFlags) {
        if let Some(i) = c.index(self.size) {
            self.flags[i] = self.flags[i] | flag;
        }
    }

    fn clear(&mut self, mask: CellFlags) {
        for f in self.flags.iter_mut() {
            *f = f.without(mask);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BreadthFirst, Search, Step};

    #[test]
    fn flag_mask_ops() {
        let f = CellFlags::START | CellFlags::VISITED;
        assert!(f.contains(CellFlags::START));
        assert!(!f.contains(CellFlags::PATH));
        assert_eq!(f.without(CellFlags::START), CellFlags::VISITED);
        assert_eq!(f & CellFlags::VISITED, CellFlags::VISITED);
        assert!(CellFlags::NONE.is_empty());
    }

    #[test]
    fn endpoints_marked_on_creation() {
        let g = FlagGrid::new(3, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(g.at(Cell::new(0, 0)), CellFlags::START);
        assert_eq!(g.at(Cell::new(2, 2)), CellFlags::GOAL);
        assert_eq!(g.count(CellFlags::NONE), 9);
        assert_eq!(g.iter().filter(|(_, f)| f.is_empty()).count(), 7);
        assert_eq!(g.at(Cell::new(5, 5)), CellFlags::NONE);
    }

    #[test]
    fn steps_replace_progress_flags() {
        let (start, goal) = (Cell::new(0, 0), Cell::new(2, 2));
        let mut g = FlagGrid::new(3, start, goal);
        let mut search = Search::new(BreadthFirst, start, goal, 3);

        let Step::Expanded(first) = search.step() else {
            panic!("expected a step");
        };
        g.apply_step(&first);
        assert!(g.at(start).contains(CellFlags::START | CellFlags::CURRENT));

        let Step::Expanded(second) = search.step() else {
            panic!("expected a step");
        };
        g.apply_step(&second);
        assert!(!g.at(start).contains(CellFlags::CURRENT));
        assert!(g.at(Cell::new(1, 0)).contains(CellFlags::CURRENT));
        assert!(g.at(Cell::new(0, 1)).contains(CellFlags::FRONTIER));
        assert_eq!(g.count(CellFlags::VISITED), 2);
    }

    #[test]
    fn result_marks_path_and_drops_frontier() {
        let (start, goal) = (Cell::new(0, 0), Cell::new(2, 2));
        let mut g = FlagGrid::new(3, start, goal);
        let mut search = Search::new(BreadthFirst, start, goal, 3);
        while let Step::Expanded(obs) = search.step() {
            g.apply_step(&obs);
        }
        let summary = search.into_summary();
        g.apply_result(&summary);
        assert_eq!(g.count(CellFlags::PATH), 5);
        assert_eq!(g.count(CellFlags::FRONTIER), 0);
        assert_eq!(g.count(CellFlags::CURRENT), 0);
        assert_eq!(g.count(CellFlags::VISITED), summary.stats.nodes_explored);
        assert!(g.at(goal).contains(CellFlags::GOAL | CellFlags::PATH));
    }
}

use gridsearch_core::{Cell, HeuristicKind};

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Evaluate the selected heuristic from `from` to `to`.
///
/// Both estimates are admissible and consistent for unit-cost moves on a
/// 4-connected grid.
#[inline]
pub fn estimate(kind: HeuristicKind, from: Cell, to: Cell) -> f64 {
    match kind {
        HeuristicKind::Manhattan => f64::from(manhattan(from, to)),
        HeuristicKind::Euclidean => euclidean(from, to),
    }
}

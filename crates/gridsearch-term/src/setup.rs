//! Grid setup: size validation, cell parsing and random placement of the
//! start and goal cells.

use gridsearch_core::config::validate_grid_size;
use gridsearch_core::{Cell, SearchError};
use rand::{Rng, RngExt};

/// Parse a `row,col` pair such as `3,7`.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row in \u{201c}{s}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column in \u{201c}{s}\u{201d}: {e}"))?;
    Ok(Cell::new(row, col))
}

/// A uniformly random cell of a `size × size` grid not listed in `exclude`.
///
/// `exclude` must leave at least one cell free.
pub fn random_cell(rng: &mut impl Rng, size: i32, exclude: &[Cell]) -> Cell {
    loop {
        let c = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
        if !exclude.contains(&c) {
            return c;
        }
    }
}

/// Validate the grid size and settle the start and goal cells.
///
/// Cells given by the user are checked against the grid; missing ones are
/// placed at random, never on top of each other.
pub fn place(
    rng: &mut impl Rng,
    size: i32,
    start: Option<Cell>,
    goal: Option<Cell>,
) -> Result<(Cell, Cell), SearchError> {
    let size = validate_grid_size(size)?;
    for cell in start.iter().chain(goal.iter()) {
        if !cell.in_grid(size) {
            return Err(SearchError::OutOfGrid { cell: *cell, size });
        }
    }
    let start = match start {
        Some(c) => c,
        None => random_cell(rng, size, goal.as_slice()),
    };
    let goal = match goal {
        Some(c) => c,
        None => random_cell(rng, size, &[start]),
    };
    Ok((start, goal))
}

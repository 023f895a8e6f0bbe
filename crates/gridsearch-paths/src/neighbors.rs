use gridsearch_core::Cell;

/// Cached neighbor computation helper.
///
/// Enumerates the 4-directional neighbors of a cell in the fixed order
/// up, down, left, right, keeping only those a predicate accepts.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `c`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the cardinal neighbors of `c` that lie inside a
    /// `size × size` grid.
    pub fn in_grid(&mut self, c: Cell, size: i32) -> &[Cell] {
        self.cardinal(c, |n| n.in_grid(size))
    }
}

/// The at-most-4 in-grid neighbors of `c`: up, down, left, right.
pub fn neighbors(c: Cell, size: i32) -> Vec<Cell> {
    c.neighbors_4()
        .into_iter()
        .filter(|n| n.in_grid(size))
        .collect()
}

use gridstar_core::{GRID, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the 8-directional neighbors of a board cell, dropping anything
/// off the board before the caller's predicate ever sees it.
pub struct Neighbors {
    buf: Vec<Point>,
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
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the on-board 8-directional neighbors of `p` for which `keep`
    /// returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_8() {
            if GRID.contains(n) && keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

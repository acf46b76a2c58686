use gridstar_core::{Point, Range};

/// Where a cell stands in the current search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    /// Never given a tentative cost.
    #[default]
    Unvisited,
    /// Holds a tentative cost and has an entry in the frontier.
    Frontier,
    /// Popped as the frontier minimum and expanded.
    Settled,
}

/// Per-cell search bookkeeping.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CellRecord {
    /// Cell this one was reached from on its best known path. `None` for
    /// the start cell and for cells never reached.
    pub predecessor: Option<Point>,
    /// Best known step count from the start.
    pub g: f64,
    /// Straight-line distance to the target.
    pub h: f64,
    /// `g + h`, the frontier priority.
    pub f: f64,
    pub state: CellState,
}

/// Fixed table of [`CellRecord`]s, one per cell of a range.
///
/// Querying a coordinate outside the range is a bug in neighbor generation,
/// so every accessor panics on it rather than returning a default.
pub struct Ledger {
    rng: Range,
    width: usize,
    records: Vec<CellRecord>,
}

impl Ledger {
    /// Allocate a default record for every cell of `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            records: vec![CellRecord::default(); rng.len()],
        }
    }

    /// The range covered by this ledger.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    #[inline]
    pub fn get(&self, p: Point) -> &CellRecord {
        &self.records[self.slot(p)]
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> &mut CellRecord {
        let i = self.slot(p);
        &mut self.records[i]
    }

    #[inline]
    pub fn set(&mut self, p: Point, record: CellRecord) {
        let i = self.slot(p);
        self.records[i] = record;
    }

    /// Flat index of `p`, panicking when `p` is out of range.
    fn slot(&self, p: Point) -> usize {
        if !self.rng.contains(p) {
            panic!("ledger: {p} is outside {}", self.rng);
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::GRID;

    #[test]
    fn every_cell_starts_unvisited() {
        let ledger = Ledger::new(GRID);
        for p in GRID {
            assert_eq!(*ledger.get(p), CellRecord::default());
        }
        assert_eq!(ledger.get(Point::new(19, 19)).state, CellState::Unvisited);
        assert!(ledger.get(Point::new(3, 4)).predecessor.is_none());
    }

    #[test]
    fn set_then_get_only_touches_one_cell() {
        let mut ledger = Ledger::new(GRID);
        let p = Point::new(7, 2);
        let rec = CellRecord {
            predecessor: Some(Point::new(6, 2)),
            g: 3.0,
            h: 2.5,
            f: 5.5,
            state: CellState::Frontier,
        };
        ledger.set(p, rec);
        assert_eq!(*ledger.get(p), rec);
        assert_eq!(*ledger.get(Point::new(2, 7)), CellRecord::default());

        ledger.get_mut(p).state = CellState::Settled;
        assert_eq!(ledger.get(p).state, CellState::Settled);
    }

    #[test]
    fn offset_range_indexes_from_its_origin() {
        let rng = Range::new(5, 5, 8, 7);
        let mut ledger = Ledger::new(rng);
        ledger.get_mut(Point::new(7, 6)).g = 1.0;
        assert_eq!(ledger.get(Point::new(7, 6)).g, 1.0);
        assert_eq!(ledger.get(Point::new(5, 5)).g, 0.0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_get_panics() {
        let ledger = Ledger::new(GRID);
        ledger.get(Point::new(20, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_set_panics() {
        let mut ledger = Ledger::new(GRID);
        ledger.set(Point::new(-1, 3), CellRecord::default());
    }
}

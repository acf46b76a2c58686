use std::collections::HashSet;

use gridstar_core::{Board, BoardError, GRID, Point};

use crate::distance::euclidean;
use crate::frontier::Frontier;
use crate::ledger::{CellRecord, CellState, Ledger};
use crate::neighbors::Neighbors;

/// How a search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The target was reached.
    Success,
    /// The frontier ran dry first: the target is unreachable.
    Failure,
}

/// Counters collected while a search runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and expanded, counting re-expansions.
    pub expanded: usize,
    /// Superseded frontier entries discarded at pop time.
    pub stale: usize,
    /// Frontier pushes, including the start cell.
    pub pushed: usize,
    /// Settled cells sent back to the frontier by a cheaper route.
    pub reopened: usize,
}

/// Result of one search: a status, the path, and what it cost to find it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub status: Status,
    /// Start to target inclusive on success, empty on failure.
    pub path: Vec<Point>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Number of moves along the path, or `None` on failure.
    pub fn steps(&self) -> Option<usize> {
        match self.status {
            Status::Success => Some(self.path.len().saturating_sub(1)),
            Status::Failure => None,
        }
    }

    /// Split into the `(status, path)` pair.
    pub fn into_parts(self) -> (Status, Vec<Point>) {
        (self.status, self.path)
    }
}

/// Single-use A* search over the fixed board.
///
/// Every move to one of the 8 neighbors costs 1, diagonals included, and
/// the estimate is the straight-line distance to the target. Because a
/// diagonal step covers √2 of straight-line distance for the price of 1, the
/// estimate can exceed the true remaining cost: on an open board the result
/// is still a shortest path, but around obstacles it may be a few moves
/// longer than the minimum.
///
/// A settled cell that is later reached more cheaply goes back on the
/// frontier and is expanded again.
///
/// [`AStar::search`] consumes the engine, so a new search always starts from
/// a fresh ledger and frontier.
pub struct AStar {
    target: Point,
    obstacles: HashSet<Point>,
    ledger: Ledger,
    frontier: Frontier,
    neighbors: Neighbors,
    stats: SearchStats,
}

impl AStar {
    /// Prepare a search from `start` to `target` avoiding `obstacles`.
    ///
    /// The obstacle set is copied, so the caller may keep mutating its own.
    /// Both endpoints should be on the board and `start` should not be an
    /// obstacle; [`search_board`] checks this. An off-board start leaves the
    /// frontier empty and the search fails immediately.
    pub fn new(start: Point, target: Point, obstacles: &HashSet<Point>) -> Self {
        let mut ledger = Ledger::new(GRID);
        let mut frontier = Frontier::new();
        let mut stats = SearchStats::default();

        if ledger.contains(start) {
            let h0 = euclidean(start, target);
            ledger.set(
                start,
                CellRecord {
                    predecessor: None,
                    g: 0.0,
                    h: h0,
                    f: h0,
                    state: CellState::Frontier,
                },
            );
            frontier.push(start, h0, h0);
            stats.pushed = 1;
        } else {
            log::warn!("astar: start {start} is off the board");
        }

        Self {
            target,
            obstacles: obstacles.clone(),
            ledger,
            frontier,
            neighbors: Neighbors::new(),
            stats,
        }
    }

    /// Run the search to completion.
    pub fn search(mut self) -> SearchOutcome {
        while let Some(entry) = self.frontier.pop() {
            let p = entry.pos;

            if p == self.target {
                let path = self.reconstruct(p);
                log::debug!(
                    "astar: reached {p} in {} moves ({} expanded, {} stale)",
                    path.len() - 1,
                    self.stats.expanded,
                    self.stats.stale
                );
                return SearchOutcome {
                    status: Status::Success,
                    path,
                    stats: self.stats,
                };
            }

            if self.ledger.get(p).state == CellState::Settled {
                self.stats.stale += 1;
                continue;
            }

            self.expand(p);
        }

        log::debug!(
            "astar: {} unreachable ({} expanded, {} stale)",
            self.target,
            self.stats.expanded,
            self.stats.stale
        );
        SearchOutcome {
            status: Status::Failure,
            path: Vec::new(),
            stats: self.stats,
        }
    }

    /// Settle `p` and relax each passable neighbor.
    fn expand(&mut self, p: Point) {
        let current = self.ledger.get_mut(p);
        current.state = CellState::Settled;
        let g_new = current.g + 1.0;
        self.stats.expanded += 1;
        log::trace!("astar: expanding {p} at g = {}", current.g);

        let obstacles = &self.obstacles;
        let target = self.target;
        for &n in self.neighbors.all(p, |n| !obstacles.contains(&n)) {
            let h_new = euclidean(n, target);
            let f_new = g_new + h_new;
            let old = *self.ledger.get(n);
            if old.state != CellState::Unvisited && old.f <= f_new {
                continue;
            }
            if old.state == CellState::Settled {
                self.stats.reopened += 1;
            }
            self.ledger.set(
                n,
                CellRecord {
                    predecessor: Some(p),
                    g: g_new,
                    h: h_new,
                    f: f_new,
                    state: CellState::Frontier,
                },
            );
            self.frontier.push(n, f_new, h_new);
            self.stats.pushed += 1;
        }
    }

    /// Follow predecessor links back from `goal` and return the path in
    /// start-to-goal order.
    fn reconstruct(&self, goal: Point) -> Vec<Point> {
        let mut path = vec![goal];
        let mut cur = goal;
        while let Some(prev) = self.ledger.get(cur).predecessor {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}

/// Search from `start` to `target` avoiding `obstacles`.
///
/// Shorthand for `AStar::new(start, target, obstacles).search()`.
pub fn search(start: Point, target: Point, obstacles: &HashSet<Point>) -> SearchOutcome {
    AStar::new(start, target, obstacles).search()
}

/// Validate `board`, then search it.
pub fn search_board(board: &Board) -> Result<SearchOutcome, BoardError> {
    board.validate()?;
    Ok(search(board.start(), board.target(), board.obstacles()))
}

//! [`Board`]: an owned snapshot of the search inputs.
//!
//! A front-end mutates its `Board` between frames and hands a shared
//! reference to the search, which copies what it needs up front. Nothing is
//! shared mutably between the two.

use std::collections::HashSet;
use std::fmt;

use crate::geom::{BOUND, Point};

/// Which end of the search a coordinate belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Reasons a board cannot be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The start or target lies outside `[0, BOUND]²`.
    OutOfBounds { what: Endpoint, pos: Point },
    /// The start cell is also marked as an obstacle.
    StartOnObstacle(Point),
    /// An obstacle lies outside the board.
    ObstacleOutOfBounds(Point),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { what, pos } => {
                write!(f, "board: {what} {pos} is outside [0, {BOUND}]")
            }
            Self::StartOnObstacle(pos) => write!(f, "board: start {pos} is an obstacle"),
            Self::ObstacleOutOfBounds(pos) => {
                write!(f, "board: obstacle {pos} is outside [0, {BOUND}]")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Start, target and obstacle set for one search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    start: Point,
    target: Point,
    obstacles: HashSet<Point>,
}

impl Default for Board {
    /// Start in the top-left corner, target in the bottom-right one.
    fn default() -> Self {
        Self::new(Point::ZERO, Point::new(BOUND, BOUND))
    }
}

impl Board {
    /// Create an obstacle-free board.
    pub fn new(start: Point, target: Point) -> Self {
        Self {
            start,
            target,
            obstacles: HashSet::new(),
        }
    }

    /// Builder-style obstacle seeding.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Point>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    #[inline]
    pub fn obstacles(&self) -> &HashSet<Point> {
        &self.obstacles
    }

    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// Move the start to `p`. Refused (returns `false`) when `p` is off the
    /// board, already the start, or an obstacle.
    pub fn set_start(&mut self, p: Point) -> bool {
        if !p.on_board() || p == self.start || self.is_obstacle(p) {
            return false;
        }
        self.start = p;
        true
    }

    /// Move the target to `p`. Returns `false` if `p` is off the board or
    /// unchanged. The target may sit on an obstacle; such a board is simply
    /// unsolvable.
    pub fn set_target(&mut self, p: Point) -> bool {
        if !p.on_board() || p == self.target {
            return false;
        }
        self.target = p;
        true
    }

    /// Add or remove an obstacle at `p`. The start cell and off-board cells
    /// are left untouched and return `false`.
    pub fn toggle_obstacle(&mut self, p: Point) -> bool {
        if !p.on_board() || p == self.start {
            return false;
        }
        if !self.obstacles.remove(&p) {
            self.obstacles.insert(p);
        }
        true
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Check the preconditions the search relies on.
    pub fn validate(&self) -> Result<(), BoardError> {
        if !self.start.on_board() {
            return Err(BoardError::OutOfBounds {
                what: Endpoint::Start,
                pos: self.start,
            });
        }
        if !self.target.on_board() {
            return Err(BoardError::OutOfBounds {
                what: Endpoint::Target,
                pos: self.target,
            });
        }
        if self.is_obstacle(self.start) {
            return Err(BoardError::StartOnObstacle(self.start));
        }
        if let Some(&p) = self.obstacles.iter().find(|p| !p.on_board()) {
            return Err(BoardError::ObstacleOutOfBounds(p));
        }
        Ok(())
    }
}

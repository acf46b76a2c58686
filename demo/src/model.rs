//! Terminal-free visualizer state: input handling and what each cell shows.

use gridstar_core::{Board, BoardError, Point};
use gridstar_paths::{SearchOutcome, search_board};

use crate::config::DemoConfig;

/// Input events, in terminal coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Pointer moved (or dragged) over a terminal cell.
    Hover(Point),
    /// Main (left) button pressed.
    MainClick(Point),
    /// Secondary (right) button pressed.
    SecondaryClick(Point),
    /// Remove every obstacle.
    Clear,
    Quit,
}

/// Whether the main loop keeps going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What a board cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Start,
    Target,
    Obstacle,
    Path,
}

/// Board state plus the result of the latest search.
pub struct Visualizer {
    tile_width: i32,
    board: Board,
    outcome: Option<SearchOutcome>,
}

impl Visualizer {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            tile_width: i32::from(config.tile_width.max(1)),
            board: Board::new(config.start, config.target),
            outcome: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Result of the last [`tick`](Self::tick), if any.
    #[inline]
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    /// Board cell under terminal position `pos`, if any.
    pub fn cell_at(&self, pos: Point) -> Option<Point> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let p = Point::new(pos.x / self.tile_width, pos.y);
        p.on_board().then_some(p)
    }

    /// Apply one input event.
    pub fn update(&mut self, input: Input) -> Flow {
        match input {
            Input::Hover(pos) => {
                if let Some(p) = self.cell_at(pos) {
                    self.board.set_target(p);
                }
            }
            Input::MainClick(pos) => {
                if let Some(p) = self.cell_at(pos) {
                    if self.board.set_start(p) {
                        log::debug!("start moved to {p}");
                    }
                }
            }
            Input::SecondaryClick(pos) => {
                if let Some(p) = self.cell_at(pos) {
                    self.board.toggle_obstacle(p);
                }
            }
            Input::Clear => {
                log::debug!("clearing {} obstacles", self.board.obstacles().len());
                self.board.clear_obstacles();
            }
            Input::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Search the current board snapshot. Called once per frame.
    pub fn tick(&mut self) -> Result<&SearchOutcome, BoardError> {
        let outcome = search_board(&self.board)?;
        Ok(&*self.outcome.insert(outcome))
    }

    /// What cell `p` shows.
    pub fn tile(&self, p: Point) -> Tile {
        if p == self.board.start() {
            Tile::Start
        } else if p == self.board.target() {
            Tile::Target
        } else if self.board.is_obstacle(p) {
            Tile::Obstacle
        } else if self
            .outcome
            .as_ref()
            .is_some_and(|o| o.path.contains(&p))
        {
            Tile::Path
        } else {
            Tile::Empty
        }
    }

    /// One-line summary shown under the board.
    pub fn status_line(&self) -> String {
        let board = &self.board;
        let result = match self.outcome.as_ref().and_then(SearchOutcome::steps) {
            Some(steps) => format!("{steps} moves"),
            None if self.outcome.is_some() => "no path".to_string(),
            None => String::new(),
        };
        format!(
            "start {} target {} obstacles {} | {result} | left: start  right: wall  c: clear  q: quit",
            board.start(),
            board.target(),
            board.obstacles().len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vis() -> Visualizer {
        Visualizer::new(&DemoConfig::default())
    }

    #[test]
    fn terminal_columns_map_to_cells() {
        let v = vis();
        assert_eq!(v.cell_at(Point::new(0, 0)), Some(Point::new(0, 0)));
        assert_eq!(v.cell_at(Point::new(1, 0)), Some(Point::new(0, 0)));
        assert_eq!(v.cell_at(Point::new(7, 3)), Some(Point::new(3, 3)));
        assert_eq!(v.cell_at(Point::new(39, 19)), Some(Point::new(19, 19)));
        assert_eq!(v.cell_at(Point::new(40, 0)), None);
        assert_eq!(v.cell_at(Point::new(0, 20)), None);
    }

    #[test]
    fn hover_moves_target() {
        let mut v = vis();
        assert_eq!(v.update(Input::Hover(Point::new(10, 5))), Flow::Continue);
        assert_eq!(v.board().target(), Point::new(5, 5));
        v.update(Input::Hover(Point::new(60, 5)));
        assert_eq!(v.board().target(), Point::new(5, 5));
    }

    #[test]
    fn clicks_move_start_and_toggle_walls() {
        let mut v = vis();
        v.update(Input::SecondaryClick(Point::new(4, 2)));
        assert!(v.board().is_obstacle(Point::new(2, 2)));

        v.update(Input::MainClick(Point::new(4, 2)));
        assert_eq!(v.board().start(), Point::ZERO);

        v.update(Input::MainClick(Point::new(6, 1)));
        assert_eq!(v.board().start(), Point::new(3, 1));

        v.update(Input::SecondaryClick(Point::new(6, 1)));
        assert!(!v.board().is_obstacle(Point::new(3, 1)));

        v.update(Input::Clear);
        assert!(v.board().obstacles().is_empty());
        assert_eq!(v.update(Input::Quit), Flow::Quit);
    }

    #[test]
    fn tick_marks_the_path() {
        let mut v = vis();
        v.update(Input::Hover(Point::new(6, 0)));
        let steps = v.tick().unwrap().steps();
        assert_eq!(steps, Some(3));
        assert_eq!(v.tile(Point::new(0, 0)), Tile::Start);
        assert_eq!(v.tile(Point::new(3, 0)), Tile::Target);
        assert_eq!(v.tile(Point::new(1, 0)), Tile::Path);
        assert_eq!(v.tile(Point::new(2, 0)), Tile::Path);
        assert_eq!(v.tile(Point::new(9, 9)), Tile::Empty);
        assert!(v.status_line().contains("3 moves"));
    }

    #[test]
    fn walled_off_target_shows_no_path() {
        let mut v = vis();
        for y in 0..20 {
            v.update(Input::SecondaryClick(Point::new(10, y)));
        }
        assert_eq!(v.tile(Point::new(5, 7)), Tile::Obstacle);
        assert!(!v.tick().unwrap().is_success());
        assert!(v.status_line().contains("no path"));
        assert_eq!(v.tile(Point::new(1, 1)), Tile::Empty);
    }

    #[test]
    fn invalid_config_surfaces_as_error() {
        let cfg = DemoConfig::default().with_target(Point::new(25, 0));
        let mut v = Visualizer::new(&cfg);
        assert!(v.tick().is_err());
    }
}

//! Crossterm terminal driver for the visualizer.
//!
//! Translates terminal events into [`Input`]s and paints the board, one
//! `tile_width`-column block per cell, with a status line underneath.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use gridstar_core::{BOUND, GRID, Point};

use crate::config::DemoConfig;
use crate::model::{Input, Tile, Visualizer};

// Colours
const COL_EMPTY: Color = Color::Rgb { r: 60, g: 60, b: 60 };
const COL_EMPTY_ALT: Color = Color::Rgb { r: 50, g: 50, b: 50 };
const COL_START: Color = Color::Rgb { r: 0x37, g: 0xff, b: 0x48 };
const COL_TARGET: Color = Color::Rgb { r: 0xfa, g: 0x27, b: 0x2e };
const COL_PATH: Color = Color::Rgb { r: 0x3c, g: 0x69, b: 0xfa };
const COL_OBSTACLE: Color = Color::Rgb { r: 0x06, g: 0x00, b: 0x28 };

fn tile_color(tile: Tile, p: Point) -> Color {
    match tile {
        // Checkerboard so cell edges stay visible without grid lines.
        Tile::Empty if (p.x + p.y) % 2 == 0 => COL_EMPTY,
        Tile::Empty => COL_EMPTY_ALT,
        Tile::Start => COL_START,
        Tile::Target => COL_TARGET,
        Tile::Obstacle => COL_OBSTACLE,
        Tile::Path => COL_PATH,
    }
}

/// Maps a crossterm key event to an [`Input`].
fn key_input(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Input::Clear),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Maps a crossterm event to an [`Input`].
fn to_input(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(key) => key_input(key),
        Event::Mouse(me) => {
            let pos = Point::new(i32::from(me.column), i32::from(me.row));
            match me.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Input::MainClick(pos)),
                MouseEventKind::Down(MouseButton::Right) => Some(Input::SecondaryClick(pos)),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Input::Hover(pos)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Raw-mode, alternate-screen terminal session.
pub struct TermDriver {
    mouse_enabled: bool,
    tile_width: u16,
    poll_interval: Duration,
    active: bool,
}

impl TermDriver {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            mouse_enabled: config.mouse,
            tile_width: config.tile_width.max(1),
            poll_interval: config.poll_interval,
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            queue!(stdout, event::EnableMouseCapture)?;
        }
        stdout.flush()
    }

    /// Wait up to the poll interval for input, then drain whatever else is
    /// already queued.
    pub fn poll(&mut self) -> io::Result<Vec<Input>> {
        let mut inputs = Vec::new();
        if !event::poll(self.poll_interval)? {
            return Ok(inputs);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(input) = to_input(event::read()?) {
                inputs.push(input);
            }
        }
        Ok(inputs)
    }

    /// Paint every board cell and the status line.
    pub fn draw(&mut self, vis: &Visualizer) -> io::Result<()> {
        let mut stdout = io::stdout();
        let blank = " ".repeat(usize::from(self.tile_width));

        for p in GRID {
            let col = p.x as u16 * self.tile_width;
            queue!(
                stdout,
                cursor::MoveTo(col, p.y as u16),
                SetBackgroundColor(tile_color(vis.tile(p), p)),
                Print(&blank)
            )?;
        }

        queue!(
            stdout,
            ResetColor,
            cursor::MoveTo(0, (BOUND + 1) as u16),
            terminal::Clear(ClearType::CurrentLine),
            Print(vis.status_line())
        )?;
        stdout.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = queue!(stdout, event::DisableMouseCapture);
        }
        let _ = queue!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for TermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn mouse_events_map_to_inputs() {
        assert_eq!(
            to_input(mouse(MouseEventKind::Moved, 5, 3)),
            Some(Input::Hover(Point::new(5, 3)))
        );
        assert_eq!(
            to_input(mouse(MouseEventKind::Down(MouseButton::Left), 1, 2)),
            Some(Input::MainClick(Point::new(1, 2)))
        );
        assert_eq!(
            to_input(mouse(MouseEventKind::Down(MouseButton::Right), 8, 0)),
            Some(Input::SecondaryClick(Point::new(8, 0)))
        );
        assert_eq!(to_input(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn keys_map_to_inputs() {
        assert_eq!(
            to_input(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Input::Clear)
        );
        assert_eq!(
            to_input(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Input::Quit)
        );
        assert_eq!(to_input(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Input::Quit));
        assert_eq!(to_input(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn empty_tiles_alternate() {
        assert_ne!(
            tile_color(Tile::Empty, Point::new(0, 0)),
            tile_color(Tile::Empty, Point::new(1, 0))
        );
        assert_eq!(tile_color(Tile::Path, Point::new(1, 0)), COL_PATH);
    }
}

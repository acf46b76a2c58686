use std::time::Duration;

use gridstar_core::{BOUND, Point};

/// Settings for the terminal visualizer.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Capture mouse movement and clicks.
    pub mouse: bool,
    /// Terminal columns per board cell. Terminal cells are roughly twice as
    /// tall as they are wide, so 2 gives square-looking tiles.
    pub tile_width: u16,
    /// How long to wait for input before drawing the next frame.
    pub poll_interval: Duration,
    pub start: Point,
    pub target: Point,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            tile_width: 2,
            poll_interval: Duration::from_millis(16),
            start: Point::ZERO,
            target: Point::new(BOUND, BOUND),
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    /// Zero is bumped to 1.
    pub fn with_tile_width(mut self, width: u16) -> Self {
        self.tile_width = width.max(1);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_target(mut self, target: Point) -> Self {
        self.target = target;
        self
    }
}

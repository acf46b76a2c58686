//! Terminal visualizer for gridstar.
//!
//! Hover to move the target, left-click to move the start, right-click to
//! toggle a wall, `c` to clear walls and `q` to quit. The board is searched
//! afresh every frame and the path is highlighted.

pub mod config;
pub mod model;
pub mod term;

pub use config::DemoConfig;
pub use model::{Flow, Input, Tile, Visualizer};
pub use term::TermDriver;

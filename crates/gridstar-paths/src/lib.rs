//! A* shortest-path search on the fixed 20×20 gridstar board.
//!
//! The engine moves in all 8 directions at unit cost and steers with the
//! straight-line distance to the target:
//!
//! - [`search`] runs one search from start to target around an obstacle set
//! - [`search_board`] validates a [`gridstar_core::Board`] first
//! - [`AStar`] is the single-use engine behind both
//!
//! Each search owns its [`Ledger`] of per-cell state and its [`Frontier`];
//! both are dropped with the engine, so repeated searches never share state.

mod astar;
mod distance;
mod frontier;
mod ledger;
mod neighbors;

pub use astar::{AStar, SearchOutcome, SearchStats, Status, search, search_board};
pub use distance::{chebyshev, euclidean};
pub use frontier::{Frontier, FrontierEntry};
pub use ledger::{CellRecord, CellState, Ledger};
pub use neighbors::Neighbors;

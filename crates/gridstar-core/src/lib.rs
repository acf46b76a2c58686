//! **gridstar-core** — board geometry and search inputs.
//!
//! This crate provides the types shared by the search engine and any
//! front-end: integer coordinates, the fixed 20×20 board extent, and the
//! [`Board`] snapshot a front-end hands to each search.

pub mod board;
pub mod geom;

pub use board::{Board, BoardError, Endpoint};
pub use geom::{BOUND, GRID, Point, Range};

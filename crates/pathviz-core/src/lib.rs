//! **pathviz-core**: the grid model behind the pathfinding visualizer.
//!
//! This crate provides geometry primitives, the board configuration, and the
//! [`Board`] arena of [`Cell`]s that every search algorithm in
//! `pathviz-search` reads and mutates. Boards can be edited (walls,
//! endpoints), reset, generated at random, and read from or written to a
//! plain ASCII format.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod geom;

pub use board::Board;
pub use cell::{Cell, UNREACHABLE};
pub use config::BoardConfig;
pub use error::BoardError;
pub use geom::{Bounds, Pos, manhattan};

use std::fmt;

use crate::geom::{Bounds, Pos};

/// Errors raised by board construction, editing, parsing and by search entry
/// points when their endpoints are unusable.
///
/// Every operation that returns a `BoardError` leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board has zero rows or zero columns.
    Empty,
    /// A position lies outside the board.
    OutOfBounds { pos: Pos, bounds: Bounds },
    /// An endpoint was placed on, or searched from, a wall.
    Wall(Pos),
    /// A wall edit targeted the start or finish cell.
    Endpoint(Pos),
    /// Start and finish would share a cell.
    SameEndpoints(Pos),
    /// ASCII rows have different widths.
    InconsistentSize(String),
    /// ASCII input has more rows or columns than a board can index.
    TooLarge { rows: usize, cols: usize },
    /// ASCII input contains a character outside `.#SF`.
    InvalidChar { ch: char, pos: Pos },
    /// ASCII input lacks an `S` or an `F`.
    MissingEndpoint(char),
    /// ASCII input contains a second `S` or `F`.
    DuplicateEndpoint { ch: char, pos: Pos },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board has no cells"),
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside the {bounds} board")
            }
            Self::Wall(pos) => write!(f, "cell {pos} is a wall"),
            Self::Endpoint(pos) => write!(f, "cell {pos} holds the start or finish"),
            Self::SameEndpoints(pos) => write!(f, "start and finish both at {pos}"),
            Self::InconsistentSize(s) => write!(f, "board: inconsistent row widths:\n{s}"),
            Self::TooLarge { rows, cols } => write!(f, "board of {rows}x{cols} cells is too large"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "board contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingEndpoint(ch) => write!(f, "board has no \u{201c}{ch}\u{201d} cell"),
            Self::DuplicateEndpoint { ch, pos } => {
                write!(f, "board has a second \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

//! The [`Board`] type: an arena of [`Cell`]s addressed by row-major index.
//!
//! A board always holds exactly one start and one finish cell, neither of
//! which is ever a wall. Every editing method either preserves that or returns
//! a [`BoardError`] without touching the board.

use std::fmt;

use rand::Rng;

use crate::cell::Cell;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::geom::{Bounds, Pos};

const OPEN: char = '.';
const WALL: char = '#';
const START: char = 'S';
const FINISH: char = 'F';

/// A fixed-size grid of [`Cell`]s with one start and one finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    bounds: Bounds,
    cells: Vec<Cell>,
    start: usize,
    finish: usize,
}

impl Board {
    /// Create an empty (wall-free) board from a validated config.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let bounds = config.bounds();
        let mut board = Self {
            config,
            bounds,
            cells: vec![Cell::default(); bounds.len()],
            start: 0,
            finish: 0,
        };
        board.place_endpoints();
        Ok(board)
    }

    /// Parse a board from rows of `.` (open), `#` (wall), `S` (start) and
    /// `F` (finish).
    ///
    /// Surrounding whitespace and blank lines are ignored. The parsed
    /// endpoints become the board's config, so [`reset`](Self::reset) clears
    /// the walls but keeps them.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(first) = lines.first() else {
            return Err(BoardError::Empty);
        };
        let cols = first.chars().count();
        if lines.iter().any(|l| l.chars().count() != cols) {
            return Err(BoardError::InconsistentSize(s.to_string()));
        }
        let (nrows, ncols) = dims(lines.len(), cols)?;

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                // Lossless: both are below the checked dimensions.
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    OPEN => {}
                    WALL => walls.push(pos),
                    START | FINISH => {
                        let slot = if ch == START { &mut start } else { &mut finish };
                        if slot.is_some() {
                            return Err(BoardError::DuplicateEndpoint { ch, pos });
                        }
                        *slot = Some(pos);
                    }
                    _ => return Err(BoardError::InvalidChar { ch, pos }),
                }
            }
        }

        let start = start.ok_or(BoardError::MissingEndpoint(START))?;
        let finish = finish.ok_or(BoardError::MissingEndpoint(FINISH))?;
        let mut board = Self::new(BoardConfig::new(nrows, ncols, start, finish))?;
        for pos in walls {
            board.set_wall(pos, true)?;
        }
        Ok(board)
    }

    fn place_endpoints(&mut self) {
        let bounds = self.bounds;
        // Both endpoints are in bounds: the config was validated.
        self.start = bounds.idx(self.config.start).unwrap_or_default();
        self.finish = bounds.idx(self.config.finish).unwrap_or_default();
        self.cells[self.start].start = true;
        self.cells[self.finish].finish = true;
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The config this board was built from.
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty boards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.bounds.pos(self.start)
    }

    #[inline]
    pub fn finish(&self) -> Pos {
        self.bounds.pos(self.finish)
    }

    /// Arena index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        self.bounds.idx(p)
    }

    /// Like [`idx`](Self::idx) but with an error naming the board size.
    pub fn checked_idx(&self, pos: Pos) -> Result<usize, BoardError> {
        self.bounds.idx(pos).ok_or(BoardError::OutOfBounds {
            pos,
            bounds: self.bounds,
        })
    }

    /// Position of arena index `idx`.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        self.bounds.pos(idx)
    }

    /// The cell at `p`, or `None` when out of bounds.
    #[inline]
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// The cell at arena index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access for search engines. Only the search-scoped fields are
    /// writable from outside this crate.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Whether `p` is on the board and not a wall.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.cell(p).is_some_and(|c| !c.is_wall())
    }

    /// Row-major iterator over `(position, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// Positions of every wall, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Pos> + '_ {
        self.iter().filter(|(_, c)| c.is_wall()).map(|(p, _)| p)
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Reset the search-scoped fields of every cell.
    pub fn reset_search(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_search();
        }
    }

    /// Fail unless `pos` is on the board and open. Used by search entry
    /// points before any state is mutated.
    pub fn checked_endpoint(&self, pos: Pos) -> Result<usize, BoardError> {
        let idx = self.checked_idx(pos)?;
        if self.cells[idx].is_wall() {
            return Err(BoardError::Wall(pos));
        }
        Ok(idx)
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Flip the wall flag at `pos` and return the new state.
    pub fn toggle_wall(&mut self, pos: Pos) -> Result<bool, BoardError> {
        let idx = self.wall_target(pos)?;
        let cell = &mut self.cells[idx];
        cell.wall = !cell.wall;
        Ok(cell.wall)
    }

    /// Set the wall flag at `pos`.
    pub fn set_wall(&mut self, pos: Pos, wall: bool) -> Result<(), BoardError> {
        let idx = self.wall_target(pos)?;
        self.cells[idx].wall = wall;
        Ok(())
    }

    fn wall_target(&self, pos: Pos) -> Result<usize, BoardError> {
        let idx = self.checked_idx(pos)?;
        if self.cells[idx].is_endpoint() {
            return Err(BoardError::Endpoint(pos));
        }
        Ok(idx)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut() {
            c.wall = false;
        }
    }

    /// Relocate the start flag to `pos`.
    pub fn move_start(&mut self, pos: Pos) -> Result<(), BoardError> {
        let idx = self.endpoint_target(pos, self.finish)?;
        self.cells[self.start].start = false;
        self.cells[idx].start = true;
        self.start = idx;
        Ok(())
    }

    /// Relocate the finish flag to `pos`.
    pub fn move_finish(&mut self, pos: Pos) -> Result<(), BoardError> {
        let idx = self.endpoint_target(pos, self.start)?;
        self.cells[self.finish].finish = false;
        self.cells[idx].finish = true;
        self.finish = idx;
        Ok(())
    }

    fn endpoint_target(&self, pos: Pos, other: usize) -> Result<usize, BoardError> {
        let idx = self.checked_endpoint(pos)?;
        if idx == other {
            return Err(BoardError::SameEndpoints(pos));
        }
        Ok(idx)
    }

    /// Return to the configured state: no walls, endpoints at their
    /// configured positions, search fields cleared.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::default();
        }
        self.place_endpoints();
    }

    /// Wall roughly `percent`% of the non-endpoint cells at random. Existing
    /// walls are kept. Returns the number of cells newly walled.
    pub fn scatter_walls(&mut self, rng: &mut impl Rng, percent: u32) -> usize {
        let mut added = 0;
        for c in self.cells.iter_mut() {
            if c.is_endpoint() || c.wall {
                continue;
            }
            if rng.random_range(0..100u32) < percent {
                c.wall = true;
                added += 1;
            }
        }
        added
    }
}

/// Row and column counts of parsed text as board dimensions.
fn dims(rows: usize, cols: usize) -> Result<(i32, i32), BoardError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(BoardError::TooLarge { rows, cols }),
    }
}

impl fmt::Display for Board {
    /// Render in the format accepted by [`Board::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            let ch = if c.is_start() {
                START
            } else if c.is_finish() {
                FINISH
            } else if c.is_wall() {
                WALL
            } else {
                OPEN
            };
            write!(f, "{ch}")?;
            if (i + 1) % self.bounds.cols as usize == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

//! Editing session: a board, the selected algorithm and the last result.
//!
//! This is the model a front end drives. It keeps the re-solve rule of the
//! visualizer: once a board has been solved, moving the start or finish
//! solves it again immediately, while wall edits wait for the next explicit
//! [`Session::solve`].

use pathviz_core::{Board, BoardConfig, BoardError, Pos};

use crate::algorithm::Algorithm;
use crate::solution::Solution;
use crate::solver::Solver;

/// A board being edited, with the algorithm to run and the last solution.
pub struct Session {
    board: Board,
    algorithm: Algorithm,
    solver: Solver,
    solution: Option<Solution>,
}

impl Session {
    /// Start a session on a fresh board built from `config`.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(config)?))
    }

    /// Start a session on an existing board, e.g. one from [`Board::parse`].
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            algorithm: Algorithm::default(),
            solver: Solver::new(),
            solution: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Select the algorithm used by the next solve.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// The result of the last solve, if any.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Solve the board with the selected algorithm and keep the result.
    pub fn solve(&mut self) -> Result<&Solution, BoardError> {
        let solution = self.solver.solve(&mut self.board, self.algorithm)?;
        Ok(&*self.solution.insert(solution))
    }

    pub fn toggle_wall(&mut self, pos: Pos) -> Result<bool, BoardError> {
        self.board.toggle_wall(pos)
    }

    pub fn set_wall(&mut self, pos: Pos, wall: bool) -> Result<(), BoardError> {
        self.board.set_wall(pos, wall)
    }

    pub fn clear_walls(&mut self) {
        self.board.clear_walls();
    }

    /// Move the start, re-solving if the board was solved before.
    pub fn move_start(&mut self, pos: Pos) -> Result<(), BoardError> {
        if let Err(e) = self.board.move_start(pos) {
            log::trace!("start not moved to {pos}: {e}");
            return Err(e);
        }
        self.resolve()
    }

    /// Move the finish, re-solving if the board was solved before.
    pub fn move_finish(&mut self, pos: Pos) -> Result<(), BoardError> {
        if let Err(e) = self.board.move_finish(pos) {
            log::trace!("finish not moved to {pos}: {e}");
            return Err(e);
        }
        self.resolve()
    }

    fn resolve(&mut self) -> Result<(), BoardError> {
        if self.solution.is_some() {
            self.solve()?;
        }
        Ok(())
    }

    /// Rebuild the board from its config and forget the last solution.
    pub fn reset(&mut self) {
        self.board.reset();
        self.solution = None;
    }
}

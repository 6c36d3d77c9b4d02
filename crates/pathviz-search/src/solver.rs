use pathviz_core::{Board, BoardError};

use crate::algorithm::Algorithm;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::solution::Solution;

/// Entry point for every search.
///
/// A `Solver` owns the scratch buffers (neighbor buffer, one frontier per
/// search direction) so that repeated solves reuse their allocations. The
/// board itself is borrowed mutably for the duration of a solve: its
/// search-scoped fields are reset on entry and hold the final distances and
/// back-links on return.
#[derive(Default)]
pub struct Solver {
    pub(crate) nbrs: Neighbors,
    pub(crate) open: Frontier,
    pub(crate) open_end: Frontier,
}

impl Solver {
    /// A solver with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `algorithm` between the board's start and finish cells.
    pub fn solve(&mut self, board: &mut Board, algorithm: Algorithm) -> Result<Solution, BoardError> {
        let start = board.start();
        let finish = board.finish();
        match algorithm {
            Algorithm::Dijkstra => self.dijkstra(board, start, finish),
            Algorithm::Bidirectional => self.bidirectional(board, start, finish),
            Algorithm::Astar => self.astar(board, start, finish),
        }
    }
}

//! Bidirectional Dijkstra.
//!
//! Two frontiers grow in lockstep, one from each endpoint, each round taking
//! one extraction from the start side and then one from the finish side. Both
//! sides write to the same cell records: the start side owns `distance` and
//! `previous`, the finish side `end_distance` and `previous_end`, and they
//! share `visited`. When one side extracts a cell the other side has already
//! visited, that cell carries both back-links and the path is spliced there.

use pathviz_core::{Board, BoardError, Cell, Pos};

use crate::Solver;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::path;
use crate::solution::Solution;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Start,
    Finish,
}

impl Side {
    #[inline]
    fn cost(self, c: &Cell) -> u32 {
        match self {
            Side::Start => c.distance,
            Side::Finish => c.end_distance,
        }
    }

    #[inline]
    fn link(self, c: &mut Cell, cost: u32, from: usize) {
        match self {
            Side::Start => {
                c.distance = cost;
                c.previous = Some(from);
            }
            Side::Finish => {
                c.end_distance = cost;
                c.previous_end = Some(from);
            }
        }
    }
}

/// Outcome of a single extraction on one side.
enum Step {
    Expanded,
    /// The side reached the opposite endpoint or a cell the other side
    /// visited.
    Met(usize),
    /// No reachable cell is left on this side.
    Exhausted,
}

impl Solver {
    /// Bidirectional Dijkstra from `start` and `finish` simultaneously.
    ///
    /// `visited` interleaves both sides, the start side's extraction first in
    /// every round. A side whose frontier runs dry ends the search without a
    /// path, before any meeting test, so a path is only ever spliced from two
    /// complete halves.
    pub fn bidirectional(
        &mut self,
        board: &mut Board,
        start: Pos,
        finish: Pos,
    ) -> Result<Solution, BoardError> {
        let start_idx = board.checked_endpoint(start)?;
        let goal_idx = board.checked_endpoint(finish)?;

        board.reset_search();
        board.cell_at_mut(start_idx).distance = 0;
        board.cell_at_mut(goal_idx).end_distance = 0;

        self.open.clear();
        self.open_end.clear();
        self.open.push(start_idx, 0, (0, 0));
        self.open_end.push(goal_idx, 0, (0, 0));

        let mut visited = Vec::new();
        let meeting = 'search: loop {
            for (side, target) in [(Side::Start, goal_idx), (Side::Finish, start_idx)] {
                let open = match side {
                    Side::Start => &mut self.open,
                    Side::Finish => &mut self.open_end,
                };
                match step(open, &mut self.nbrs, board, side, target, &mut visited) {
                    Step::Expanded => {}
                    Step::Met(idx) => break 'search Some(idx),
                    Step::Exhausted => break 'search None,
                }
            }
        };

        let path = match meeting {
            Some(m) => {
                log::trace!("bidijkstra: frontiers met at {}", board.pos(m));
                path::splice(board, m)
            }
            None => Vec::new(),
        };
        log::debug!(
            "bidijkstra: {start} -> {finish}: {} visited, path {}",
            visited.len(),
            path.len()
        );
        Ok(Solution { visited, path })
    }
}

fn step(
    open: &mut Frontier,
    nbrs: &mut Neighbors,
    board: &mut Board,
    side: Side,
    target: usize,
    visited: &mut Vec<Pos>,
) -> Step {
    let Some(current) = open.pop_current(|i| side.cost(board.cell_at(i))) else {
        return Step::Exhausted;
    };
    let ci = current.idx;
    if ci == target || board.cell_at(ci).visited {
        return Step::Met(ci);
    }

    let bounds = board.bounds();
    let next = current.cost + 1;
    let cp = board.pos(ci);
    for &np in nbrs.cardinal(bounds, cp) {
        let Some(ni) = bounds.idx(np) else {
            continue;
        };
        let n = board.cell_at_mut(ni);
        if n.is_wall() || next >= side.cost(n) {
            continue;
        }
        side.link(n, next, ci);
        open.push(ni, next, (next, 0));
    }

    board.cell_at_mut(ci).visited = true;
    visited.push(cp);
    Step::Expanded
}

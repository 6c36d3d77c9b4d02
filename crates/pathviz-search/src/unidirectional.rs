use pathviz_core::{Board, BoardError, Pos};

use crate::Solver;
use crate::path;
use crate::priority::{Astar, Dijkstra, Priority};
use crate::solution::Solution;

impl Solver {
    /// Dijkstra's shortest path from `start` to `finish`.
    pub fn dijkstra(
        &mut self,
        board: &mut Board,
        start: Pos,
        finish: Pos,
    ) -> Result<Solution, BoardError> {
        self.unidirectional(board, start, finish, &Dijkstra)
    }

    /// A* from `start` to `finish` with the Manhattan heuristic.
    pub fn astar(
        &mut self,
        board: &mut Board,
        start: Pos,
        finish: Pos,
    ) -> Result<Solution, BoardError> {
        self.unidirectional(board, start, finish, &Astar)
    }

    /// Single-frontier search ordered by `priority`.
    ///
    /// Every step extracts the frontier minimum, stops if it is `finish`, and
    /// otherwise relaxes its open neighbors with unit edge cost. The search
    /// also stops once no reachable cell is left, in which case the path is
    /// empty and `visited` covers the start's whole component.
    ///
    /// Both endpoints are checked before the board is touched.
    pub fn unidirectional<P: Priority>(
        &mut self,
        board: &mut Board,
        start: Pos,
        finish: Pos,
        priority: &P,
    ) -> Result<Solution, BoardError> {
        let start_idx = board.checked_endpoint(start)?;
        let goal_idx = board.checked_endpoint(finish)?;

        board.reset_search();
        priority.prepare(board, finish);
        board.cell_at_mut(start_idx).distance = 0;

        self.open.clear();
        self.open.push(start_idx, 0, priority.key(board.cell_at(start_idx)));

        let bounds = board.bounds();
        let mut visited = Vec::new();

        let found = loop {
            let Some(current) = self.open.pop_current(|i| board.cell_at(i).distance) else {
                break false;
            };
            let ci = current.idx;
            if ci == goal_idx {
                break true;
            }

            let next = current.cost + 1;
            let cp = board.pos(ci);
            for &np in self.nbrs.cardinal(bounds, cp) {
                let Some(ni) = bounds.idx(np) else {
                    continue;
                };
                let n = board.cell_at_mut(ni);
                if n.is_wall() || next >= n.distance {
                    continue;
                }
                n.distance = next;
                n.previous = Some(ci);
                self.open.push(ni, next, priority.key(n));
            }

            board.cell_at_mut(ci).visited = true;
            visited.push(cp);
        };

        let path = if found {
            path::trace_back(board, goal_idx)
        } else {
            Vec::new()
        };
        log::debug!(
            "{}: {start} -> {finish}: {} visited, path {}",
            P::NAME,
            visited.len(),
            path.len()
        );
        Ok(Solution { visited, path })
    }
}

use pathviz_core::{Board, Cell, Pos, manhattan};

/// Frontier ordering key: compared lexicographically, smallest first. Ties on
/// the whole key fall back to the smaller arena index.
pub type Key = (u32, u32);

/// Extraction order of the unidirectional engine.
///
/// Dijkstra and A* run the same relaxation loop and differ only here.
pub trait Priority {
    /// Name used in log output.
    const NAME: &'static str;

    /// Called once per solve, after the board reset and before the first
    /// extraction.
    fn prepare(&self, board: &mut Board, finish: Pos) {
        let _ = (board, finish);
    }

    /// Key of a cell whose `distance` is finite.
    fn key(&self, cell: &Cell) -> Key;
}

/// Plain Dijkstra: cost from the start alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Priority for Dijkstra {
    const NAME: &'static str = "dijkstra";

    #[inline]
    fn key(&self, cell: &Cell) -> Key {
        (cell.distance, 0)
    }
}

/// A* with the Manhattan heuristic: `distance + h`, ties going to the cell
/// nearer the finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct Astar;

impl Priority for Astar {
    const NAME: &'static str = "astar";

    fn prepare(&self, board: &mut Board, finish: Pos) {
        for idx in 0..board.len() {
            let p = board.pos(idx);
            board.cell_at_mut(idx).h = manhattan(p, finish);
        }
    }

    #[inline]
    fn key(&self, cell: &Cell) -> Key {
        (cell.distance.saturating_add(cell.h), cell.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::BoardConfig;

    #[test]
    fn astar_precomputes_heuristic_for_every_cell() {
        let mut b = Board::new(BoardConfig::new(3, 4, Pos::new(0, 0), Pos::new(2, 3))).unwrap();
        let finish = b.finish();
        Astar.prepare(&mut b, finish);
        assert_eq!(b.cell(Pos::new(0, 0)).unwrap().h, 5);
        assert_eq!(b.cell(Pos::new(1, 3)).unwrap().h, 1);
        assert_eq!(b.cell(Pos::new(2, 3)).unwrap().h, 0);
    }

    #[test]
    fn astar_key_prefers_smaller_h_on_equal_f() {
        let mut near = Cell::default();
        near.distance = 3;
        near.h = 1;
        let mut far = Cell::default();
        far.distance = 1;
        far.h = 3;
        assert_eq!(Astar.key(&near).0, Astar.key(&far).0);
        assert!(Astar.key(&near) < Astar.key(&far));
    }

    #[test]
    fn dijkstra_ignores_heuristic() {
        let mut c = Cell::default();
        c.distance = 2;
        c.h = 40;
        assert_eq!(Dijkstra.key(&c), (2, 0));
    }
}

//! Path reconstruction from back-links.
//!
//! Paths always run start to finish and include both endpoints.

use pathviz_core::{Board, Pos};

/// Walk `previous` links from `idx` back to the start.
///
/// Returns the chain in start-first order with `idx` last. A cell with no
/// `previous` link yields a one-cell path.
pub fn trace_back(board: &Board, idx: usize) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut cur = Some(idx);
    // Capped at the board size: links written through `cell_at_mut` may cycle.
    while let Some(i) = cur {
        if path.len() == board.len() {
            break;
        }
        path.push(board.pos(i));
        cur = board.cell_at(i).previous;
    }
    path.reverse();
    path
}

/// Append the finish-side chain that follows `idx` (exclusive) to `path`.
pub fn trace_forward(board: &Board, idx: usize, path: &mut Vec<Pos>) {
    let cap = path.len() + board.len();
    let mut cur = board.cell_at(idx).previous_end;
    while let Some(i) = cur {
        if path.len() == cap {
            break;
        }
        path.push(board.pos(i));
        cur = board.cell_at(i).previous_end;
    }
}

/// Join the two halves of a bidirectional search at `meeting`, which
/// appears exactly once.
pub fn splice(board: &Board, meeting: usize) -> Vec<Pos> {
    let mut path = trace_back(board, meeting);
    trace_forward(board, meeting, &mut path);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::BoardConfig;

    // 1x5 corridor, start at col 0, finish at col 4.
    fn corridor() -> Board {
        Board::new(BoardConfig::new(1, 5, Pos::new(0, 0), Pos::new(0, 4))).unwrap()
    }

    #[test]
    fn trace_back_follows_previous() {
        let mut b = corridor();
        for i in 1..5 {
            b.cell_at_mut(i).previous = Some(i - 1);
        }
        let path = trace_back(&b, 4);
        assert_eq!(path, (0..5).map(|c| Pos::new(0, c)).collect::<Vec<_>>());
        assert_eq!(trace_back(&b, 0), vec![Pos::new(0, 0)]);
    }

    #[test]
    fn splice_joins_halves_once() {
        let mut b = corridor();
        // Start side reached col 2, finish side reached col 2 as well.
        b.cell_at_mut(1).previous = Some(0);
        b.cell_at_mut(2).previous = Some(1);
        b.cell_at_mut(3).previous_end = Some(4);
        b.cell_at_mut(2).previous_end = Some(3);
        let path = splice(&b, 2);
        assert_eq!(path, (0..5).map(|c| Pos::new(0, c)).collect::<Vec<_>>());
    }

    #[test]
    fn splice_at_an_endpoint() {
        let mut b = corridor();
        for i in 0..4 {
            b.cell_at_mut(i).previous_end = Some(i + 1);
        }
        // Finish side extracted the start itself: no first half beyond it.
        assert_eq!(splice(&b, 0).len(), 5);
    }

    #[test]
    fn cyclic_links_terminate() {
        let mut b = corridor();
        b.cell_at_mut(1).previous = Some(2);
        b.cell_at_mut(2).previous = Some(1);
        assert_eq!(trace_back(&b, 2).len(), b.len());
    }
}

//! The per-position record shared by every search algorithm.

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: u32 = u32::MAX;

/// One board position: its flags (edited only through the
/// [`Board`](crate::Board) so the endpoint invariants hold) plus the
/// search-scoped fields that a solve resets and then mutates.
///
/// Back-links are arena indices into the owning [`Board`](crate::Board).
/// Both the start-side and finish-side links live on the same record so the
/// bidirectional search can splice its halves at a shared cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) wall: bool,
    pub(crate) start: bool,
    pub(crate) finish: bool,

    /// Extracted from a frontier during the current solve.
    pub visited: bool,
    /// Cost from the start.
    pub distance: u32,
    /// Cost from the finish (bidirectional only).
    pub end_distance: u32,
    pub previous: Option<usize>,
    pub previous_end: Option<usize>,
    /// Manhattan distance to the finish (A* only).
    pub h: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            wall: false,
            start: false,
            finish: false,
            visited: false,
            distance: UNREACHABLE,
            end_distance: UNREACHABLE,
            previous: None,
            previous_end: None,
            h: 0,
        }
    }
}

impl Cell {
    /// Restore every search-scoped field to its initial value.
    #[inline]
    pub fn reset_search(&mut self) {
        self.visited = false;
        self.distance = UNREACHABLE;
        self.end_distance = UNREACHABLE;
        self.previous = None;
        self.previous_end = None;
        self.h = 0;
    }

    /// Whether the cell blocks traversal.
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.wall
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.start
    }

    #[inline]
    pub fn is_finish(&self) -> bool {
        self.finish
    }

    /// Whether the cell carries the start or finish flag.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        self.start || self.finish
    }

    /// Whether the cell was reached from the start during the last solve.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_flags() {
        let mut c = Cell {
            wall: true,
            visited: true,
            distance: 3,
            end_distance: 4,
            previous: Some(1),
            previous_end: Some(2),
            h: 7,
            ..Cell::default()
        };
        c.reset_search();
        assert!(c.is_wall());
        assert!(!c.visited);
        assert!(!c.is_reached());
        assert_eq!(c.end_distance, UNREACHABLE);
        assert_eq!(c.previous, None);
        assert_eq!(c.previous_end, None);
        assert_eq!(c.h, 0);
    }
}

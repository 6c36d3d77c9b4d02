//! Board configuration.

use crate::error::BoardError;
use crate::geom::{Bounds, Pos};

/// Dimensions and initial endpoints of a board.
///
/// [`Board::reset`](crate::Board::reset) returns a board to this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Pos,
    pub finish: Pos,
}

impl Default for BoardConfig {
    /// The classic 25x50 board with start and finish on the middle row.
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 50,
            start: Pos::new(12, 7),
            finish: Pos::new(12, 43),
        }
    }
}

impl BoardConfig {
    /// Create a config, not yet validated.
    pub const fn new(rows: i32, cols: i32, start: Pos, finish: Pos) -> Self {
        Self {
            rows,
            cols,
            start,
            finish,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }

    /// Check that the board is non-empty and both endpoints are distinct cells
    /// on it.
    pub fn validate(&self) -> Result<(), BoardError> {
        let bounds = self.bounds();
        if bounds.is_empty() {
            return Err(BoardError::Empty);
        }
        for pos in [self.start, self.finish] {
            if !bounds.contains(pos) {
                return Err(BoardError::OutOfBounds { pos, bounds });
            }
        }
        if self.start == self.finish {
            return Err(BoardError::SameEndpoints(self.start));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = BoardConfig::default();
        assert_eq!(c.bounds().len(), 25 * 50);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_configs() {
        let empty = BoardConfig::new(0, 5, Pos::ZERO, Pos::new(0, 1));
        assert_eq!(empty.validate(), Err(BoardError::Empty));

        let outside = BoardConfig::new(3, 3, Pos::ZERO, Pos::new(3, 0));
        assert!(matches!(
            outside.validate(),
            Err(BoardError::OutOfBounds { .. })
        ));

        let same = BoardConfig::new(3, 3, Pos::new(1, 1), Pos::new(1, 1));
        assert_eq!(same.validate(), Err(BoardError::SameEndpoints(Pos::new(1, 1))));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = BoardConfig::new(10, 20, Pos::new(1, 2), Pos::new(8, 17));
        let json = serde_json::to_string(&c).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}

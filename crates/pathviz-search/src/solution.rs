use pathviz_core::Pos;

/// Output of one solve: cells in extraction order, and the path.
///
/// `path` runs from start to finish inclusive, and is empty when the finish
/// is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub visited: Vec<Pos>,
    pub path: Vec<Pos>,
}

impl Solution {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps along the path, or `None` without a path.
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

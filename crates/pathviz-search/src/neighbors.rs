use pathviz_core::{Bounds, Pos};

/// Cached neighbor computation helper.
///
/// The single resolver shared by every search engine: it knows nothing about
/// walls or visitation, callers filter the result themselves.
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the in-bounds cardinal neighbors of `p`, in the order up, down,
    /// left, right.
    pub fn cardinal(&mut self, bounds: Bounds, p: Pos) -> &[Pos] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if bounds.contains(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

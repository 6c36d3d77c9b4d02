use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::priority::Key;

/// Reference into the board arena, ordered by `key` then index for use in a
/// `BinaryHeap`.
///
/// `cost` is the cell's cost-so-far when the entry was pushed; an entry whose
/// cost no longer matches the cell has been superseded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: u32,
    pub(crate) key: Key,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first, and
        // among equal keys the smallest row-major index.
        other.key.cmp(&self.key).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set of a search, with lazy deletion of stale entries.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
}

impl Frontier {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }

    pub(crate) fn push(&mut self, idx: usize, cost: u32, key: Key) {
        self.heap.push(NodeRef { idx, cost, key });
    }

    /// Pop the global minimum among entries that are still current, i.e.
    /// whose cost equals `cost_of(idx)`. Returns `None` once every reachable
    /// cell has been extracted.
    pub(crate) fn pop_current(&mut self, cost_of: impl Fn(usize) -> u32) -> Option<NodeRef> {
        while let Some(n) = self.heap.pop() {
            if n.cost == cost_of(n.idx) {
                return Some(n);
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_then_smallest_index() {
        let mut f = Frontier::default();
        f.push(5, 2, (2, 0));
        f.push(3, 1, (1, 0));
        f.push(1, 2, (2, 0));
        f.push(9, 1, (1, 0));
        assert_eq!(f.len(), 4);
        let costs = [0, 2, 0, 1, 0, 2, 0, 0, 0, 1];
        let order: Vec<_> = std::iter::from_fn(|| f.pop_current(|i| costs[i]))
            .map(|n| n.idx)
            .collect();
        assert_eq!(order, vec![3, 9, 1, 5]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let mut f = Frontier::default();
        f.push(0, 0, (4, 3));
        f.push(1, 0, (4, 1));
        f.push(2, 0, (4, 2));
        let order: Vec<_> = std::iter::from_fn(|| f.pop_current(|_| 0))
            .map(|n| n.idx)
            .collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn all_stale_drains_to_none() {
        let mut f = Frontier::default();
        f.push(0, 4, (4, 0));
        f.push(1, 5, (5, 0));
        assert_eq!(f.pop_current(|_| 0), None);
        assert_eq!(f.len(), 0);
    }

    #[test]
    fn superseded_entries_are_skipped() {
        let mut f = Frontier::default();
        let mut cost = [7u32, 7];
        f.push(0, 7, (7, 0));
        // Cell 0 improves to 3 and is pushed again.
        cost[0] = 3;
        f.push(0, 3, (3, 0));
        f.push(1, 7, (7, 0));
        assert_eq!(f.pop_current(|i| cost[i]).map(|n| (n.idx, n.cost)), Some((0, 3)));
        assert_eq!(f.pop_current(|i| cost[i]).map(|n| (n.idx, n.cost)), Some((1, 7)));
        assert_eq!(f.pop_current(|i| cost[i]), None);
    }
}

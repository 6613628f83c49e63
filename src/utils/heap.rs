use std::cmp::Ordering;

use crate::{Node, Weight};

/// Entry of a `std::collections::BinaryHeap` ordered such that the entry with the **smallest**
/// key is popped first. Ties are broken by the smaller node.
///
/// # Examples
/// ```
/// use std::collections::BinaryHeap;
/// use wgraphs::utils::MinHeapEntry;
///
/// let mut heap = BinaryHeap::new();
/// heap.push(MinHeapEntry::new(5.0, 1));
/// heap.push(MinHeapEntry::new(0.5, 2));
/// heap.push(MinHeapEntry::new(5.0, 0));
///
/// assert_eq!(heap.pop().map(|e| e.node), Some(2));
/// assert_eq!(heap.pop().map(|e| e.node), Some(0));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct MinHeapEntry<W> {
    pub key: W,
    pub node: Node,
}

impl<W> MinHeapEntry<W> {
    pub fn new(key: W, node: Node) -> Self {
        Self { key, node }
    }
}

impl<W: Weight> PartialEq for MinHeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for MinHeapEntry<W> {}

impl<W: Weight> PartialOrd for MinHeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for MinHeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp_weight(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn pops_in_ascending_order() {
        let keys = [7i64, -3, 12, 0, 0, 5, -3];
        let mut heap: BinaryHeap<_> = keys
            .iter()
            .enumerate()
            .map(|(i, &k)| MinHeapEntry::new(k, i as Node))
            .collect();

        let mut popped = Vec::new();
        while let Some(e) = heap.pop() {
            popped.push((e.key, e.node));
        }

        assert_eq!(
            popped,
            vec![(-3, 1), (-3, 6), (0, 3), (0, 4), (5, 5), (7, 0), (12, 2)]
        );
    }
}

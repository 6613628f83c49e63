/*!
# Utilities

Provides helper structs used by several algorithms:
- [`UnionFind`]: disjoint sets over nodes with path compression and union by rank (Kruskal),
- [`MinHeapEntry`]: an entry for a `BinaryHeap` that pops the smallest key first (Dijkstra, Prim).

You probably do not need to interact with this module directly.
*/

use num::{One, Zero};

mod heap;
mod union_find;

pub use heap::MinHeapEntry;
pub use union_find::UnionFind;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

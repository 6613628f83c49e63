/*!
# Graph Representation

Graphs are stored as adjacency arrays: every node owns the list of its (outgoing) [`Neighbor`]
entries in the order the edges were inserted, which makes BFS/DFS orders deterministic for a fixed
insertion order. Next to the adjacency arrays, the graph keeps the list of inserted edges so that
edge-centric algorithms (Kruskal, Bellman-Ford, ...) do not have to reconstruct it.

- In a **directed** graph, the edge `(u, v)` yields one entry `v` in the neighborhood of `u`.
- In an **undirected** graph, the edge `{u, v}` yields an entry `v` at `u` and an entry `u` at `v`
  (a self-loop thus appears twice in the neighborhood of its node), but is stored only once in the
  edge list.

Both entries of an undirected edge carry the same [`EdgeIndex`], which allows algorithms to tell
parallel edges apart (see [`Bridges`](crate::algo::Bridges)).
*/

use crate::*;

mod graph;

pub use graph::*;

/// One adjacency entry: the neighbor reached, the weight of the edge used, and the insertion index
/// of that edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Neighbor<W> {
    pub node: Node,
    pub weight: W,
    pub edge: EdgeIndex,
}

impl<W> Neighbor<W> {
    /// Creates a new adjacency entry
    pub fn new(node: Node, weight: W, edge: EdgeIndex) -> Self {
        Self { node, weight, edge }
    }
}

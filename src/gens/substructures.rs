/*!
# Substructures

Inserts deterministic motifs into an existing graph: **paths**, **cycles** and **cliques**.
All inserted edges carry the same weight. Useful to plant known structure into random instances.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = Graph::<u32>::directed(5);
g.connect_path([0, 1, 2], 1);
g.connect_cycle([2, 3, 4], 2);
g.connect_clique(&[0, 2, 4], 3);

assert_eq!(
    g.ordered_edges(false),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 0), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 0), Edge(4, 2), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Adds paths, cycles and cliques to a graph
pub trait GeneratorSubstructures: AdjacencyList {
    /// Connects consecutive nodes of `nodes_on_path` with an edge of weight `weight`.
    ///
    /// # Panics
    /// If a node is out of range.
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Self::Weight)
    where
        P: IntoIterator<Item = Node>;

    /// Like [`GeneratorSubstructures::connect_path`] but also connects the last node to the first.
    /// A single node receives a self-loop.
    ///
    /// # Panics
    /// If a node is out of range.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Self::Weight)
    where
        C: IntoIterator<Item = Node>;

    /// Adds an edge between every pair of distinct nodes in `nodes`.
    /// In undirected graphs each pair is connected once, in directed graphs in both directions.
    ///
    /// # Panics
    /// If a node is out of range.
    fn connect_clique(&mut self, nodes: &[Node], weight: Self::Weight);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Self::Weight)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, weight);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Self::Weight)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur, weight);
                prev = cur;
            }

            self.add_edge(prev, first, weight);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], weight: Self::Weight) {
        let undirected = self.is_undirected();
        for (i, &u) in nodes.iter().enumerate() {
            for (j, &v) in nodes.iter().enumerate() {
                if i == j || (undirected && j < i) {
                    continue;
                }
                self.add_edge(u, v, weight);
            }
        }
    }
}

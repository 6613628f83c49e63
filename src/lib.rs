/*!
`wgraphs` is a graph data structure & algorithms library for **w**eighted graphs whose nodes are
numbered `0` to `n - 1`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
Every edge carries a weight of a numeric type implementing [`Weight`] (all primitive integers and
floats do) and optionally an external [`EdgeId`].

### Directed vs Undirected

A [`Graph`] is either **directed** or **undirected** (see [`Direction`]), decided at construction:

- In an **undirected** graph, the edge `(u, v)` is treated as equivalent to `(v, u)`: both endpoints
  see each other in their neighborhoods, but the edge is stored (and counted) once.
- In a **directed** graph, the edge has orientation, so `(u, v)` and `(v, u)` are considered distinct.

The number of nodes is fixed and edges can only be added; there is no deletion.

# Design

Most functionality is implemented via traits on the graph itself, e.g. `graph.dijkstra(source)` or
`graph.kruskal()`, making it usable without configuring the algorithm beforehand.
Algorithms with options are additionally provided as configurable structs that one can alter to
their needs using either the *Builder* / *Setter* pattern before running them on a provided graph.

Precondition violations (a node out of range, a negative weight fed to Dijkstra, a directed graph
passed to an MST algorithm, ...) are reported as [`GraphError`]. Results that legitimately do not
exist are values instead: an empty topological order for cyclic graphs, `None` for DAG shortest paths
on a cyclic graph, a flag for negative cycles or a disconnected spanning forest.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, errors, basic graph operations and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`), shortest paths, spanning trees, strongly connected components, bridges, ... as well as binary lifting and max-flow,
- [`gens`] includes random weighted graph generators (and deterministic substructures such as paths/cycles),
- [`utils`] includes helper structs such as a union-find data structure.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let mut g = Graph::<u32>::undirected(4);
g.add_edges([(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)]);

assert_eq!(g.dijkstra(0).unwrap().distance_to(3), Some(4));
assert_eq!(g.kruskal().unwrap().total_weight, 4);
assert_eq!(g.prim().unwrap().total_weight, 4);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod weight;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use ops::*;
pub use repr::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, the error type, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}

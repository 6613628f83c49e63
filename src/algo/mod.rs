/*!
# Graph Algorithms

This module provides the algorithms of this crate, built on top of [`AdjacencyList`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, shortest paths, spanning trees, connectivity, ancestry queries
and maximum flows. Most algorithms are exposed as traits with blanket implementations for every
[`AdjacencyList`], so they can be called directly as methods on a graph.

Algorithms with preconditions (e.g. non-negative weights, undirected input) check them up front
and report violations as [`GraphError`]; the graph is never modified.
*/

mod bellman_ford;
mod bridges;
mod connectivity;
mod floyd_warshall;
mod lca;
mod max_flow;
mod mst;
mod shortest_path;
pub mod traversal;

use crate::{prelude::*, utils::*};
use num::{One, Zero};

pub use bellman_ford::*;
pub use bridges::*;
pub use connectivity::*;
pub use floyd_warshall::*;
pub use lca::*;
pub use max_flow::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;

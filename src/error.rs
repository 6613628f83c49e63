/*!
# Errors

All precondition violations detected by the graph store or an algorithm are reported as a
[`GraphError`]. Outcomes that are legitimate answers, such as a cyclic graph having no topological
order or a disconnected graph having no spanning tree, are *not* errors and are encoded in the
returned values instead.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Crate-wide result type
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Precondition violations raised by the graph store and the algorithms.
///
/// Every variant is local to the failing call: the graph is never modified by a call that errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node index outside of `0..num_nodes` was supplied
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: Node, num_nodes: NumNodes },

    /// The algorithm is only defined for undirected graphs
    #[error("{algorithm} requires an undirected graph")]
    RequiresUndirected { algorithm: &'static str },

    /// An algorithm assuming non-negative weights found the negative-weight edge `(from, to)`
    #[error("edge ({from},{to}) has a negative weight")]
    NegativeWeight { from: Node, to: Node },

    /// 0-1 BFS found the edge `(from, to)` whose weight is neither `0` nor `1`
    #[error("edge ({from},{to}) has a weight other than 0 or 1")]
    NonBinaryWeight { from: Node, to: Node },

    /// A shortest-path distance extending over the edge `(from, to)` leaves the range of the
    /// weight type
    #[error("distance over edge ({from},{to}) is out of range for the weight type")]
    DistanceOverflow { from: Node, to: Node },

    /// A flow network edge was given a negative capacity
    #[error("edge ({from},{to}) has a negative capacity")]
    NegativeCapacity { from: Node, to: Node },

    /// The graph handed to the ancestry structure contains the non-tree edge `(from, to)`
    #[error("edge ({from},{to}) closes a cycle, the graph is not a rooted tree")]
    NotATree { from: Node, to: Node },

    /// The node is not part of the tree hanging below the root
    #[error("node {node} is not reachable from the root of the tree")]
    NotInTree { node: Node },
}

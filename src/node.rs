/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space in the many per-node arrays algorithms allocate (distances,
parents, discovery times, ...) and (2) to index those arrays directly without abstracting over
node handles.
*/

use stream_bitset::bitset::BitSetImpl;

use crate::error::{GraphError, Result};

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
/// Used as the *no parent* / *no predecessor* marker in parent arrays.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Returns `Ok(u)` if `u < n` and a [`GraphError::NodeOutOfRange`] otherwise.
///
/// Every public entry point taking a node from the caller runs it through this check before
/// touching any per-node array.
#[inline]
pub fn check_node(u: Node, n: NumNodes) -> Result<Node> {
    if u < n {
        Ok(u)
    } else {
        Err(GraphError::NodeOutOfRange {
            node: u,
            num_nodes: n,
        })
    }
}

/// Follows a parent array from `target` back to its root and returns the path `root ..= target`.
///
/// Roots are marked by `INVALID_NODE` as their parent.
pub fn path_from_parents(parents: &[Node], target: Node) -> Vec<Node> {
    let mut path = Vec::new();
    let mut v = target;
    while v != INVALID_NODE {
        path.push(v);
        v = parents[v as usize];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_node_bounds() {
        assert_eq!(check_node(0, 1), Ok(0));
        assert_eq!(
            check_node(3, 3),
            Err(GraphError::NodeOutOfRange {
                node: 3,
                num_nodes: 3
            })
        );
    }

    #[test]
    fn path_reconstruction() {
        let parents = vec![INVALID_NODE, 0, 1, 1, INVALID_NODE];
        assert_eq!(path_from_parents(&parents, 3), vec![0, 1, 3]);
        assert_eq!(path_from_parents(&parents, 0), vec![0]);
        assert_eq!(path_from_parents(&parents, 4), vec![4]);
    }
}

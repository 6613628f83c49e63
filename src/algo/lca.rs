/*!
# Lowest Common Ancestors

[`BinaryLifting`] answers ancestry queries on a rooted tree after `O(n log n)` preprocessing:
for every node it stores its `2^k`-th ancestor for all `k`, so that any ancestor and the lowest
common ancestor of two nodes are found in `O(log n)` jumps.

The tree is given as a graph together with a root. Undirected trees as well as directed
out-trees (all edges pointing away from the root) are accepted. Nodes not reachable from the
root are simply not part of the tree; queries on them fail with [`GraphError::NotInTree`].
*/

use super::*;

const NOT_IN_TREE: NumNodes = NumNodes::MAX;

/// Ancestor table of a rooted tree.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// //        0
/// //      /   \
/// //     1     2
/// //    / \     \
/// //   3   4     5
/// let g = Graph::<u8>::undirected_from_edges(6, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (4, 1, 1), (2, 5, 1)]);
/// let lift = BinaryLifting::new(&g, 0).unwrap();
///
/// assert_eq!(lift.lca(3, 4), Ok(1));
/// assert_eq!(lift.lca(3, 5), Ok(0));
/// assert_eq!(lift.kth_ancestor(4, 2), Ok(Some(0)));
/// assert_eq!(lift.kth_ancestor(4, 3), Ok(None));
/// assert_eq!(lift.distance(3, 5), Ok(4));
/// ```
#[derive(Debug, Clone)]
pub struct BinaryLifting {
    root: Node,
    depth: Vec<NumNodes>,
    /// `up[k][v]` is the `2^k`-th ancestor of `v`, saturating at the root
    up: Vec<Vec<Node>>,
}

impl BinaryLifting {
    /// Builds the ancestor table of the tree below `root` with one iterative DFS.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `root >= n`
    /// - [`GraphError::NotATree`] if an edge reachable from `root` closes a cycle
    ///   (this includes self-loops and parallel edges)
    pub fn new<G: AdjacencyList>(graph: &G, root: Node) -> Result<Self> {
        graph.check_node(root)?;

        let n = graph.number_of_nodes();
        let mut depth = vec![NOT_IN_TREE; n as usize];
        let mut parent = vec![root; n as usize];

        // entries carry the edge a node was reached by, so that undirected trees do not report
        // the way back to the parent as a cycle
        let mut stack: Vec<(Node, EdgeIndex)> = vec![(root, EdgeIndex::MAX)];
        depth[root as usize] = 0;
        let mut tree_size: NumNodes = 0;

        while let Some((u, via)) = stack.pop() {
            tree_size += 1;
            for nb in graph.neighborhood_of(u) {
                if nb.edge == via {
                    continue;
                }

                let v = nb.node;
                if depth[v as usize] != NOT_IN_TREE {
                    return Err(GraphError::NotATree { from: u, to: v });
                }

                depth[v as usize] = depth[u as usize] + 1;
                parent[v as usize] = u;
                stack.push((v, nb.edge));
            }
        }

        let levels = (NumNodes::BITS - n.leading_zeros()).max(1) as usize;
        let mut up = Vec::with_capacity(levels);
        up.push(parent);
        for k in 1..levels {
            let prev: &Vec<Node> = &up[k - 1];
            let next = prev.iter().map(|&p| prev[p as usize]).collect();
            up.push(next);
        }

        tracing::debug!(root, tree_size, levels, "binary lifting table built");

        Ok(Self { root, depth, up })
    }

    /// Returns the root of the tree
    pub fn root(&self) -> Node {
        self.root
    }

    fn check(&self, v: Node) -> Result<Node> {
        check_node(v, self.depth.len() as NumNodes)?;
        if self.depth[v as usize] == NOT_IN_TREE {
            Err(GraphError::NotInTree { node: v })
        } else {
            Ok(v)
        }
    }

    /// Returns *true* if `v` is reachable from the root
    pub fn contains(&self, v: Node) -> bool {
        self.check(v).is_ok()
    }

    /// Returns the number of edges between the root and `v`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] or [`GraphError::NotInTree`]
    pub fn depth(&self, v: Node) -> Result<NumNodes> {
        Ok(self.depth[self.check(v)? as usize])
    }

    /// Unchecked jump by `k <= depth(v)` levels
    fn lift(&self, mut v: Node, mut k: NumNodes) -> Node {
        let mut level = 0;
        while k > 0 {
            if k & 1 == 1 {
                v = self.up[level][v as usize];
            }
            k >>= 1;
            level += 1;
        }
        v
    }

    /// Returns the ancestor `k` levels above `v` (`v` itself for `k = 0`) or `None` if
    /// `k > depth(v)`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] or [`GraphError::NotInTree`]
    pub fn kth_ancestor(&self, v: Node, k: NumNodes) -> Result<Option<Node>> {
        let d = self.depth(v)?;
        Ok((k <= d).then(|| self.lift(v, k)))
    }

    /// Returns the deepest node that is an ancestor of both `a` and `b`.
    /// Every node is an ancestor of itself.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] or [`GraphError::NotInTree`]
    pub fn lca(&self, a: Node, b: Node) -> Result<Node> {
        let (da, db) = (self.depth(a)?, self.depth(b)?);

        let (mut a, mut b) = if da >= db {
            (self.lift(a, da - db), b)
        } else {
            (a, self.lift(b, db - da))
        };

        if a == b {
            return Ok(a);
        }

        for level in (0..self.up.len()).rev() {
            let (pa, pb) = (self.up[level][a as usize], self.up[level][b as usize]);
            if pa != pb {
                a = pa;
                b = pb;
            }
        }

        Ok(self.up[0][a as usize])
    }

    /// Returns the number of edges on the tree path between `a` and `b`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] or [`GraphError::NotInTree`]
    pub fn distance(&self, a: Node, b: Node) -> Result<NumNodes> {
        let l = self.lca(a, b)?;
        Ok(self.depth[a as usize] + self.depth[b as usize] - 2 * self.depth[l as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Reference lca by walking up parent pointers
    fn naive_lca(parents: &[Node], a: Node, b: Node) -> Node {
        let path_a = path_from_parents(parents, a);
        let path_b = path_from_parents(parents, b);
        path_a
            .iter()
            .zip(&path_b)
            .take_while(|(x, y)| x == y)
            .last()
            .map(|(&x, _)| x)
            .unwrap()
    }

    #[test]
    fn random_trees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(77);

        for i in 0..30 {
            let n = rng.random_range(1..120);
            let root = rng.random_range(0..n);
            let mut generator = RandomTree::new().nodes(n).root(root);
            if i % 2 == 0 {
                generator.set_directed();
            }
            let g: Graph<u32> = generator.generate(rng);

            let lift = BinaryLifting::new(&g, root).unwrap();
            let tree = g.bfs_distances(root).unwrap();

            for v in g.vertices() {
                let d = lift.depth(v).unwrap();
                assert_eq!(Some(d), tree.distance_to(v));
                assert_eq!(lift.kth_ancestor(v, d), Ok(Some(root)));
                assert_eq!(lift.kth_ancestor(v, d + 1), Ok(None));
                assert_eq!(lift.kth_ancestor(v, 0), Ok(Some(v)));
            }

            for _ in 0..50 {
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);
                let l = naive_lca(&tree.parents, a, b);
                assert_eq!(lift.lca(a, b), Ok(l));
                assert_eq!(lift.lca(b, a), Ok(l));
                assert_eq!(
                    lift.distance(a, b).unwrap(),
                    lift.depth(a).unwrap() + lift.depth(b).unwrap() - 2 * lift.depth(l).unwrap()
                );
            }
        }
    }

    #[test]
    fn deep_path() {
        let n: Node = 100_000;
        let mut g = Graph::<u32>::directed(n);
        g.connect_path(0..n, 1);

        let lift = BinaryLifting::new(&g, 0).unwrap();
        assert_eq!(lift.depth(n - 1), Ok(n - 1));
        assert_eq!(lift.kth_ancestor(n - 1, 12_345), Ok(Some(n - 1 - 12_345)));
        assert_eq!(lift.lca(n - 1, 777), Ok(777));
        assert_eq!(lift.distance(5, n - 1), Ok(n - 6));
    }

    #[test]
    fn rejects_non_trees() {
        let cycle = Graph::<u32>::undirected_from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert!(matches!(
            BinaryLifting::new(&cycle, 0),
            Err(GraphError::NotATree { .. })
        ));

        let parallel = Graph::<u32>::undirected_from_edges(2, [(0, 1, 1), (1, 0, 1)]);
        assert!(BinaryLifting::new(&parallel, 1).is_err());

        let looped = Graph::<u32>::undirected_from_edges(2, [(0, 1, 1), (1, 1, 1)]);
        assert!(BinaryLifting::new(&looped, 0).is_err());

        // two paths to node 3
        let diamond = Graph::<u32>::directed_from_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        assert_eq!(
            BinaryLifting::new(&diamond, 0).unwrap_err(),
            GraphError::NotATree { from: 1, to: 3 }
        );

        assert!(BinaryLifting::new(&Graph::<u32>::directed(0), 0).is_err());
    }

    #[test]
    fn nodes_outside_the_tree() {
        // 4 -> 1 enters the tree from outside; 5 is isolated
        let g = Graph::<u32>::directed_from_edges(6, [(0, 1, 1), (1, 2, 1), (1, 3, 1), (4, 1, 1)]);
        let lift = BinaryLifting::new(&g, 0).unwrap();

        assert!(lift.contains(3));
        assert!(!lift.contains(4));
        assert_eq!(lift.lca(2, 3), Ok(1));
        assert_eq!(lift.depth(4), Err(GraphError::NotInTree { node: 4 }));
        assert_eq!(lift.lca(2, 5), Err(GraphError::NotInTree { node: 5 }));
        assert_eq!(
            lift.kth_ancestor(6, 0),
            Err(GraphError::NodeOutOfRange { node: 6, num_nodes: 6 })
        );
    }
}

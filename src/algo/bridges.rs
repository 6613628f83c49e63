/*!
# Bridges and Articulation Points

A *bridge* is an edge whose removal increases the number of connected components; an
*articulation point* is such a node. Both are derived from one low-link DFS (Hopcroft-Tarjan)
that runs on an explicit stack.

The DFS skips only the tree edge it arrived by, identified by its [`EdgeIndex`], and not every
edge to the parent. Parallel edges thus form a cycle and are never bridges.
*/

use super::*;

/// Bridges and articulation points of an undirected graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgesAndArticulationPoints {
    /// Bridges, normalized and sorted
    pub bridges: Vec<Edge>,
    /// Articulation points, sorted
    pub articulation_points: Vec<Node>,
}

pub trait Bridges: AdjacencyList {
    /// Computes all bridges and articulation points in time `O(n + m)`.
    ///
    /// # Errors
    /// [`GraphError::RequiresUndirected`] if the graph is directed
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u8>::undirected_from_edges(
    ///     6,
    ///     [(0, 1, 1), (0, 2, 1), (2, 1, 1), (1, 3, 1), (3, 4, 1), (4, 5, 1), (5, 3, 1)],
    /// );
    /// let res = g.bridges_and_articulation_points().unwrap();
    ///
    /// assert_eq!(res.bridges, vec![Edge(1, 3)]);
    /// assert_eq!(res.articulation_points, vec![1, 3]);
    /// ```
    fn bridges_and_articulation_points(&self) -> Result<BridgesAndArticulationPoints> {
        if self.is_directed() {
            return Err(GraphError::RequiresUndirected {
                algorithm: "bridges",
            });
        }

        let res = BridgeSearch::new(self).compute();
        tracing::debug!(
            bridges = res.bridges.len(),
            articulation_points = res.articulation_points.len(),
            "low-link search finished"
        );
        Ok(res)
    }

    /// Returns the bridges of the graph, see [`Bridges::bridges_and_articulation_points`]
    fn compute_bridges(&self) -> Result<Vec<Edge>> {
        Ok(self.bridges_and_articulation_points()?.bridges)
    }

    /// Returns the articulation points of the graph, see [`Bridges::bridges_and_articulation_points`]
    fn articulation_points(&self) -> Result<Vec<Node>> {
        Ok(self.bridges_and_articulation_points()?.articulation_points)
    }
}

impl<G: AdjacencyList> Bridges for G {}

const NO_EDGE: EdgeIndex = EdgeIndex::MAX;

struct BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    is_articulation_point: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<Edge>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            is_articulation_point: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> BridgesAndArticulationPoints {
        for u in self.graph.vertices_range() {
            if self.visited.set_bit(u) {
                continue;
            }

            self.compute_tree(u);
        }

        self.bridges.sort_unstable();
        BridgesAndArticulationPoints {
            bridges: self.bridges,
            articulation_points: self
                .graph
                .vertices()
                .filter(|&u| self.is_articulation_point.get_bit(u))
                .collect(),
        }
    }

    fn discover(&mut self, u: Node) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };
    }

    /// DFS from `root`; each stack entry stores the node, the edge it was reached by and the
    /// position of the next neighbor to inspect
    fn compute_tree(&mut self, root: Node) {
        let graph = self.graph;
        let mut root_children = 0;
        let mut stack: Vec<(Node, EdgeIndex, usize)> = vec![(root, NO_EDGE, 0)];
        self.discover(root);

        while let Some((u, parent_edge, cursor)) = stack.last_mut() {
            let u = *u;

            if let Some(nb) = graph.neighborhood_of(u).get(*cursor) {
                *cursor += 1;
                if nb.edge == *parent_edge {
                    continue;
                }

                let v = nb.node;
                if !self.visited.set_bit(v) {
                    self.discover(v);
                    stack.push((v, nb.edge, 0));
                } else {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                }
                continue;
            }

            stack.pop();
            let Some(&(parent, _, _)) = stack.last() else {
                break;
            };

            let info_u = self.nodes_info[u as usize];
            self.nodes_info[parent as usize].update_low(info_u.low);

            let parent_disc = self.nodes_info[parent as usize].discovery;
            if info_u.low > parent_disc {
                self.bridges.push(Edge(parent, u).normalized());
            }

            if parent == root {
                root_children += 1;
            } else if info_u.low >= parent_disc {
                self.is_articulation_point.set_bit(parent);
            }
        }

        if root_children > 1 {
            self.is_articulation_point.set_bit(root);
        }
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n`.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Ok(u)` if `u` is a node of this graph.
    fn check_node(&self, u: Node) -> Result<Node> {
        check_node(u, self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Orientation of the edges of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(u, v)` only allows moving from `u` to `v`
    Directed,
    /// `(u, v)` and `(v, u)` denote the same edge
    Undirected,
}

/// Runtime information whether a graph is directed
pub trait GraphType {
    /// Returns the orientation of all edges in the graph
    fn direction(&self) -> Direction;

    /// Returns *true* if the graph is directed
    fn is_directed(&self) -> bool {
        self.direction() == Direction::Directed
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected(&self) -> bool {
        self.direction() == Direction::Undirected
    }
}

/// Gives access to the graph a structure (e.g. an iterator) was created from
pub trait WithGraphRef<G> {
    /// Returns the underlying graph
    fn graph_ref(&self) -> &G;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + GraphType + Sized {
    /// Type of all edge weights in the graph
    type Weight: Weight;

    /// Returns the (outgoing) adjacency entries of `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn neighborhood_of(&self, u: Node) -> &[Neighbor<Self::Weight>];

    /// Returns the stored edges in insertion order.
    /// Undirected edges are stored once with the endpoints in the order they were inserted.
    fn stored_edges(&self) -> &[WeightedEdge<Self::Weight>];

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, these are the out-neighbors
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighborhood_of(u).iter().map(|nb| nb.node)
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_ {
        self.neighborhood_of(u)
            .iter()
            .map(|nb| (nb.node, nb.weight))
    }

    /// Returns the number of (outgoing) adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighborhood_of(u).len() as NumNodes
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the number of incoming adjacency entries of every vertex
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }
        in_degs
    }

    /// Returns for every vertex `v` the list of vertices `u` with an adjacency entry `u -> v`.
    /// Entries are ordered by `u` and repeated for parallel edges.
    fn reverse_adjacency(&self) -> Vec<Vec<Node>> {
        let mut rev = vec![Vec::new(); self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                rev[v as usize].push(u);
            }
        }
        rev
    }

    /// Returns the stored edge at insertion position `idx`
    /// ** Panics if `idx >= m` **
    fn edge(&self, idx: EdgeIndex) -> &WeightedEdge<Self::Weight> {
        &self.stored_edges()[idx as usize]
    }

    /// Returns one entry per inserted edge in insertion order.
    /// For undirected graphs, the endpoints are normalized (`from <= to`).
    fn edge_list(&self) -> Vec<WeightedEdge<Self::Weight>> {
        let undirected = self.is_undirected();
        self.stored_edges()
            .iter()
            .map(|e| if undirected { e.normalized() } else { *e })
            .collect()
    }

    /// Returns an iterator over outgoing (unweighted) edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all adjacency entries as edges.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all adjacency entries as edges in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }

    /// Returns the first stored edge with a negative weight, if any
    fn find_negative_edge(&self) -> Option<&WeightedEdge<Self::Weight>> {
        self.stored_edges().iter().find(|e| e.weight.is_negative())
    }

    /// Returns *true* if any edge has a negative weight
    fn has_negative_weight(&self) -> bool {
        self.find_negative_edge().is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with `n` singleton nodes
    fn new(n: NumNodes, direction: Direction) -> Self;
}

/// Provides functions to insert edges. Edges can never be removed.
pub trait GraphEdgeEditing: GraphNew + AdjacencyList {
    /// Adds the edge `(u, v)` with weight `w` and an optional external identifier.
    /// Returns the insertion index of the new edge.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if `u >= n || v >= n`. The graph is unchanged then.
    fn try_add_edge_with_id(
        &mut self,
        u: Node,
        v: Node,
        w: Self::Weight,
        id: Option<EdgeId>,
    ) -> Result<EdgeIndex>;

    /// Adds the edge `(u, v)` with weight `w`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if `u >= n || v >= n`. The graph is unchanged then.
    fn try_add_edge(&mut self, u: Node, v: Node, w: Self::Weight) -> Result<EdgeIndex> {
        self.try_add_edge_with_id(u, v, w, None)
    }

    /// Adds the edge `(u, v)` with weight `w`.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, w: Self::Weight) -> EdgeIndex {
        match self.try_add_edge(u, v, w) {
            Ok(idx) => idx,
            Err(err) => panic!("{err}"),
        }
    }

    /// Adds all edges in the collection.
    /// ** Panics if any endpoint is out of range **
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        for e in edges.into_iter().map(|e| e.into()) {
            if let Err(err) = self.try_add_edge_with_id(e.from, e.to, e.weight, e.id) {
                panic!("{err}");
            }
        }
    }

    /// Adds all edges in the collection, stopping at the first edge with an invalid endpoint.
    /// Edges before the invalid one remain inserted.
    fn try_add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        for e in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge_with_id(e.from, e.to, e.weight, e.id)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: AdjacencyList {
    /// Create a graph from a number of nodes and an iterator over weighted edges
    /// ** Panics if any endpoint is out of range **
    fn from_edges<I, E>(n: NumNodes, direction: Direction, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>;

    /// Create a directed graph from a number of nodes and an iterator over weighted edges
    fn directed_from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        Self::from_edges(n, Direction::Directed, edges)
    }

    /// Create an undirected graph from a number of nodes and an iterator over weighted edges
    fn undirected_from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        Self::from_edges(n, Direction::Undirected, edges)
    }
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I, E>(n: NumNodes, direction: Direction, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Weight>>,
    {
        let mut graph = Self::new(n, direction);
        graph.add_edges(edges);
        graph
    }
}

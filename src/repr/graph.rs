use fxhash::FxHashMap;

use crate::testing::test_graph_ops;

use super::*;

/// A weighted graph storing adjacency arrays and the insertion-ordered edge list.
///
/// The number of nodes is fixed at construction; edges can only be added.
///
/// # Type parameters
/// - `W`: the [`Weight`] of all edges.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = Graph::<i64>::undirected(3);
/// g.add_edge(0, 1, 4);
/// g.add_edge(1, 2, 1);
///
/// assert_eq!(g.number_of_edges(), 2);
/// assert_eq!(g.weighted_neighbors_of(1).collect::<Vec<_>>(), vec![(0, 4), (2, 1)]);
/// assert!(g.try_add_edge(0, 3, 1).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Graph<W> {
    nbs: Vec<Vec<Neighbor<W>>>,
    edges: Vec<WeightedEdge<W>>,
    ids: FxHashMap<EdgeId, EdgeIndex>,
    direction: Direction,
}

impl<W: Weight> Graph<W> {
    /// Creates an empty directed graph with `n` nodes
    pub fn directed(n: NumNodes) -> Self {
        Self::new(n, Direction::Directed)
    }

    /// Creates an empty undirected graph with `n` nodes
    pub fn undirected(n: NumNodes) -> Self {
        Self::new(n, Direction::Undirected)
    }

    /// Returns the first inserted edge carrying the external identifier `id`
    pub fn edge_by_id(&self, id: EdgeId) -> Option<&WeightedEdge<W>> {
        self.ids.get(&id).map(|&idx| &self.edges[idx as usize])
    }

    /// Returns a graph with every edge reversed (keeping weights, identifiers and insertion order).
    /// An undirected graph is returned unchanged.
    pub fn reversed(&self) -> Self {
        if self.is_undirected() {
            return self.clone();
        }

        let mut rev = Self::new(self.number_of_nodes(), self.direction);
        for e in &self.edges {
            rev.push_edge(e.reverse());
        }
        rev
    }

    /// Appends an edge whose endpoints were already checked
    fn push_edge(&mut self, e: WeightedEdge<W>) -> EdgeIndex {
        let idx = self.edges.len() as EdgeIndex;

        self.nbs[e.from as usize].push(Neighbor::new(e.to, e.weight, idx));
        if self.direction == Direction::Undirected {
            self.nbs[e.to as usize].push(Neighbor::new(e.from, e.weight, idx));
        }

        if let Some(id) = e.id {
            self.ids.entry(id).or_insert(idx);
        }

        self.edges.push(e);
        idx
    }
}

impl<W: Weight> GraphNodeOrder for Graph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<W: Weight> GraphEdgeOrder for Graph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<W: Weight> GraphType for Graph<W> {
    fn direction(&self) -> Direction {
        self.direction
    }
}

impl<W: Weight> AdjacencyList for Graph<W> {
    type Weight = W;

    fn neighborhood_of(&self, u: Node) -> &[Neighbor<W>] {
        &self.nbs[u as usize]
    }

    fn stored_edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }
}

impl<W: Weight> GraphNew for Graph<W> {
    fn new(n: NumNodes, direction: Direction) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            edges: Vec::new(),
            ids: FxHashMap::default(),
            direction,
        }
    }
}

impl<W: Weight> GraphEdgeEditing for Graph<W> {
    fn try_add_edge_with_id(
        &mut self,
        u: Node,
        v: Node,
        w: W,
        id: Option<EdgeId>,
    ) -> Result<EdgeIndex> {
        self.check_node(u)?;
        self.check_node(v)?;

        Ok(self.push_edge(WeightedEdge {
            from: u,
            to: v,
            weight: w,
            id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_entries_share_edge_index() {
        let mut g = Graph::<i32>::undirected(3);
        let e0 = g.add_edge(2, 0, 5);
        let e1 = g.add_edge(1, 1, 2);

        assert_eq!(g.neighborhood_of(0), &[Neighbor::new(2, 5, e0)]);
        assert_eq!(g.neighborhood_of(2), &[Neighbor::new(0, 5, e0)]);
        // a self-loop shows up twice
        assert_eq!(g.degree_of(1), 2);
        assert!(g.neighborhood_of(1).iter().all(|nb| nb.edge == e1));

        let edges = g.edge_list();
        assert_eq!(edges[0].edge(), Edge(0, 2));
        assert_eq!(edges[1].edge(), Edge(1, 1));
    }

    #[test]
    fn edge_ids() {
        let mut g = Graph::<f64>::directed(4);
        g.try_add_edge_with_id(0, 1, 0.5, Some(42)).unwrap();
        g.try_add_edge_with_id(1, 2, 1.5, None).unwrap();
        g.try_add_edge_with_id(2, 3, 2.5, Some(42)).unwrap();

        let e = g.edge_by_id(42).unwrap();
        assert_eq!((e.from, e.to), (0, 1));
        assert!(g.edge_by_id(7).is_none());
    }

    #[test]
    fn reversed() {
        let g = Graph::<u32>::directed_from_edges(3, [(0, 1, 1), (1, 2, 2)]);
        let rev = g.reversed();

        assert_eq!(rev.ordered_edges(false), vec![Edge(1, 0), Edge(2, 1)]);
        assert_eq!(rev.weighted_neighbors_of(2).collect::<Vec<_>>(), vec![(1, 2)]);

        let undir = Graph::<u32>::undirected_from_edges(3, [(0, 1, 1)]);
        assert_eq!(undir.reversed().ordered_edges(true), vec![Edge(0, 1)]);
    }

    #[test]
    fn rejected_edges_leave_graph_untouched() {
        let mut g = Graph::<i64>::directed(2);
        g.add_edge(0, 1, 3);

        assert_eq!(
            g.try_add_edge(1, 2, 1),
            Err(GraphError::NodeOutOfRange {
                node: 2,
                num_nodes: 2
            })
        );
        assert!(g.try_add_edge(5, 0, 1).is_err());
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.degree_of(1), 0);

        assert!(
            g.try_add_edges([(1, 0, 1), (0, 9, 1), (1, 1, 1)])
                .is_err()
        );
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    #[should_panic]
    fn add_edge_panics_out_of_range() {
        let mut g = Graph::<i64>::undirected(2);
        g.add_edge(0, 2, 1);
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_graph_directed,
    Directed,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

test_graph_ops!(
    test_graph_undirected,
    Undirected,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

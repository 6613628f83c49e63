/*!
# Minimum Spanning Trees

Kruskal's and Prim's algorithm for undirected graphs. Both return a [`SpanningTree`]; on a
disconnected graph, this is a minimum spanning *forest* (one tree per component) and
[`SpanningTree::is_connected`] returns *false*. Self-loops never enter a tree; of parallel
edges only the lightest can.

Ties between edges of equal weight may be broken differently by both algorithms, so the chosen
edges can differ. The total weight is always the same.
*/

use std::collections::BinaryHeap;

use super::*;

/// A minimum spanning tree (or forest) of an undirected graph
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    /// Sum of the weights of all tree edges
    pub total_weight: W,
    /// Tree edges in the order they were selected; endpoints are normalized
    pub edges: Vec<WeightedEdge<W>>,
    /// Number of nodes of the underlying graph
    pub num_nodes: NumNodes,
}

impl<W: Weight> SpanningTree<W> {
    fn empty(num_nodes: NumNodes) -> Self {
        Self {
            total_weight: W::zero(),
            edges: Vec::with_capacity(num_nodes.saturating_sub(1) as usize),
            num_nodes,
        }
    }

    fn push(&mut self, edge: WeightedEdge<W>) {
        self.total_weight = self.total_weight + edge.weight;
        self.edges.push(edge);
    }

    /// Returns *true* if the edges span all nodes, i.e. the graph is connected.
    /// The empty graph is considered connected.
    pub fn is_connected(&self) -> bool {
        self.num_nodes == 0 || self.edges.len() + 1 == self.num_nodes as usize
    }

    /// Returns the number of trees in the forest
    pub fn number_of_components(&self) -> NumNodes {
        self.num_nodes - self.edges.len() as NumNodes
    }

    fn log_if_disconnected(&self, algorithm: &'static str) {
        if !self.is_connected() {
            tracing::debug!(
                algorithm,
                components = self.number_of_components(),
                "graph is disconnected; returning a minimum spanning forest"
            );
        }
    }
}

fn require_undirected<G: GraphType>(graph: &G, algorithm: &'static str) -> Result<()> {
    if graph.is_directed() {
        Err(GraphError::RequiresUndirected { algorithm })
    } else {
        Ok(())
    }
}

/// Configurable Kruskal.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Graph::<u32>::undirected_from_edges(4, [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)]);
/// let mst = Kruskal::new().stop_when_spanning(false).run(&g).unwrap();
///
/// assert_eq!(mst.total_weight, 4);
/// assert!(mst.is_connected());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Kruskal {
    stop_when_spanning: bool,
}

impl Default for Kruskal {
    fn default() -> Self {
        Self {
            stop_when_spanning: true,
        }
    }
}

impl Kruskal {
    /// Creates an instance that stops scanning edges as soon as `n - 1` edges were selected
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, all edges are scanned even if the tree is already complete
    pub fn set_stop_when_spanning(&mut self, stop: bool) {
        self.stop_when_spanning = stop;
    }

    /// If *false*, all edges are scanned even if the tree is already complete
    pub fn stop_when_spanning(mut self, stop: bool) -> Self {
        self.set_stop_when_spanning(stop);
        self
    }

    /// Sorts all edges by weight and greedily adds every edge that connects two different
    /// components (tracked in a [`UnionFind`]). Runs in time `O(m log m)`.
    ///
    /// # Errors
    /// [`GraphError::RequiresUndirected`] if the graph is directed
    pub fn run<G: AdjacencyList>(&self, graph: &G) -> Result<SpanningTree<G::Weight>> {
        require_undirected(graph, "Kruskal")?;

        let n = graph.number_of_nodes();
        let mut edges = graph.edge_list();
        edges.sort_by(|a, b| a.weight.cmp_weight(&b.weight));

        let mut uf = UnionFind::new(n);
        let mut tree = SpanningTree::empty(n);

        for e in edges {
            if self.stop_when_spanning && tree.edges.len() + 1 >= n as usize {
                break;
            }

            if !e.edge().is_loop() && uf.union(e.from, e.to) {
                tree.push(e);
            }
        }

        tree.log_if_disconnected("Kruskal");
        Ok(tree)
    }
}

pub trait MinimumSpanningTree: AdjacencyList {
    /// Runs [`Kruskal`] with its default configuration.
    ///
    /// # Errors
    /// [`GraphError::RequiresUndirected`] if the graph is directed
    fn kruskal(&self) -> Result<SpanningTree<Self::Weight>> {
        Kruskal::new().run(self)
    }

    /// Prim's algorithm starting at node `0`, see [`MinimumSpanningTree::prim_from`].
    ///
    /// # Errors
    /// [`GraphError::RequiresUndirected`] if the graph is directed
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::undirected_from_edges(5, [(0, 1, 3), (1, 2, 1), (0, 2, 1), (3, 4, 7)]);
    /// let forest = g.prim().unwrap();
    ///
    /// assert_eq!(forest.total_weight, 9);
    /// assert!(!forest.is_connected());
    /// assert_eq!(forest.number_of_components(), 2);
    /// ```
    fn prim(&self) -> Result<SpanningTree<Self::Weight>> {
        if self.is_empty() {
            require_undirected(self, "Prim")?;
            return Ok(SpanningTree::empty(0));
        }
        self.prim_from(0)
    }

    /// Grows a tree from `start` by repeatedly adding the lightest edge leaving it, using a
    /// binary heap with lazy deletion. Once the component of `start` is exhausted, the search
    /// restarts at the smallest node not covered yet. Runs in time `O(m log m)`.
    ///
    /// # Errors
    /// [`GraphError::RequiresUndirected`] if the graph is directed,
    /// [`GraphError::NodeOutOfRange`] if `start >= n`
    fn prim_from(&self, start: Node) -> Result<SpanningTree<Self::Weight>> {
        require_undirected(self, "Prim")?;
        self.check_node(start)?;

        let mut tree = SpanningTree::empty(self.number_of_nodes());
        let mut in_tree = self.vertex_bitset_unset();
        let mut best: Vec<Option<(Self::Weight, EdgeIndex)>> = vec![None; self.len()];
        let mut heap = BinaryHeap::new();

        for root in std::iter::once(start).chain(self.vertices_range()) {
            if in_tree.get_bit(root) {
                continue;
            }

            heap.push(MinHeapEntry::new(Self::Weight::zero(), root));
            while let Some(MinHeapEntry { node: u, .. }) = heap.pop() {
                if in_tree.set_bit(u) {
                    continue;
                }

                if let Some((_, idx)) = best[u as usize] {
                    tree.push(self.edge(idx).normalized());
                }

                for nb in self.neighborhood_of(u) {
                    let v = nb.node;
                    if in_tree.get_bit(v) {
                        continue;
                    }

                    if best[v as usize].is_none_or(|(w, _)| nb.weight < w) {
                        best[v as usize] = Some((nb.weight, nb.edge));
                        heap.push(MinHeapEntry::new(nb.weight, v));
                    }
                }
            }
        }

        tree.log_if_disconnected("Prim");
        Ok(tree)
    }
}

impl<G: AdjacencyList> MinimumSpanningTree for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_distr::Uniform;
    use rand_pcg::Pcg64Mcg;

    fn example() -> Graph<u32> {
        Graph::undirected_from_edges(4, [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)])
    }

    fn assert_is_forest<W: Weight>(g: &Graph<W>, tree: &SpanningTree<W>) {
        let mut uf = UnionFind::new(g.number_of_nodes());
        for e in &tree.edges {
            assert!(e.is_normalized());
            assert!(uf.union(e.from, e.to), "{e:?} closes a cycle");
        }

        let components = g.connected_components().unwrap().count() as NumNodes;
        assert_eq!(tree.number_of_components(), components);
    }

    #[test]
    fn example_graph() {
        let g = example();

        let kruskal = g.kruskal().unwrap();
        assert_eq!(kruskal.total_weight, 4);
        assert_eq!(
            kruskal.edges.iter().map(|e| e.edge()).sorted().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );
        assert!(kruskal.is_connected());

        for start in g.vertices() {
            let prim = g.prim_from(start).unwrap();
            assert_eq!(prim.total_weight, 4);
            assert!(prim.is_connected());
            assert_is_forest(&g, &prim);
        }
    }

    #[test]
    fn directed_is_rejected() {
        let g = Graph::<u32>::directed_from_edges(2, [(0, 1, 1)]);
        assert_eq!(
            g.kruskal(),
            Err(GraphError::RequiresUndirected { algorithm: "Kruskal" })
        );
        assert_eq!(
            g.prim(),
            Err(GraphError::RequiresUndirected { algorithm: "Prim" })
        );
        assert!(Graph::<u32>::directed(0).prim().is_err());
    }

    #[test]
    fn degenerate_graphs() {
        let empty = Graph::<u32>::undirected(0);
        assert!(empty.kruskal().unwrap().is_connected());
        assert!(empty.prim().unwrap().is_connected());
        assert!(empty.prim_from(0).is_err());

        let single = Graph::<u32>::undirected_from_edges(1, [(0, 0, 3)]);
        let tree = single.prim().unwrap();
        assert!(tree.edges.is_empty());
        assert!(tree.is_connected());
        assert_eq!(single.kruskal().unwrap(), tree);
    }

    #[test]
    fn parallel_edges_and_loops() {
        let g = Graph::<i32>::undirected_from_edges(
            3,
            [(0, 1, 5), (1, 0, -2), (1, 1, -10), (2, 1, 3), (1, 2, 7)],
        );

        for tree in [g.kruskal().unwrap(), g.prim().unwrap(), g.prim_from(2).unwrap()] {
            assert_eq!(tree.total_weight, 1);
            assert_eq!(
                tree.edges.iter().map(|e| (e.from, e.to, e.weight)).sorted().collect_vec(),
                vec![(0, 1, -2), (1, 2, 3)]
            );
        }
    }

    #[test]
    fn forests() {
        let g = Graph::<f64>::undirected_from_edges(6, [(0, 1, 0.5), (2, 3, 1.5), (3, 4, 0.25), (2, 4, 1.0)]);

        let kruskal = g.kruskal().unwrap();
        let prim = g.prim_from(3).unwrap();
        for tree in [&kruskal, &prim] {
            assert!(!tree.is_connected());
            assert_eq!(tree.number_of_components(), 3);
            assert_eq!(tree.total_weight, 1.75);
            assert_is_forest(&g, tree);
        }
    }

    #[test]
    fn kruskal_and_prim_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        let weights = Uniform::new(0u64, 20).unwrap();

        for _ in 0..50 {
            let n = rng.random_range(1..80);
            let avg_deg = rng.random_range(0.5..6.0);
            let g: Graph<u64> = Gnp::new()
                .nodes(n)
                .avg_deg(avg_deg)
                .generate_weighted(rng, &weights);

            let kruskal = g.kruskal().unwrap();
            let exhaustive = Kruskal::new().stop_when_spanning(false).run(&g).unwrap();
            let prim = g.prim_from(rng.random_range(0..n)).unwrap();

            assert_eq!(kruskal, exhaustive);
            assert_eq!(kruskal.total_weight, prim.total_weight);
            assert_eq!(kruskal.edges.len(), prim.edges.len());
            assert_is_forest(&g, &kruskal);
            assert_is_forest(&g, &prim);
        }
    }

    #[test]
    fn random_trees_are_their_own_mst() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        let weights = Uniform::new_inclusive(1u32, 9).unwrap();

        for n in 1..30 {
            let g: Graph<u32> = RandomTree::new().nodes(n).generate_weighted(rng, &weights);
            let total: u32 = g.edge_list().iter().map(|e| e.weight).sum();

            let tree = g.prim().unwrap();
            assert!(tree.is_connected());
            assert_eq!(tree.total_weight, total);
        }
    }
}

/*!
# Bellman-Ford

Single-source shortest paths for arbitrary (also negative) weights.

Every pass relaxes all adjacency entries of all nodes reached so far; after at most `n - 1` passes
all distances are final unless a negative cycle is reachable from the source. One further pass
detects such a cycle: if any edge can still be relaxed, the result is flagged with
[`BellmanFordResult::negative_cycle`]. In that pass, a sum below the range of the weight type also
counts as relaxable, since final distances cannot produce one.

If a distance would drop below the range of the weight type during the passes, it is left
unchanged but the parent pointer still moves. Once the parent pointers close a cycle, that cycle is
negative and the search stops. If they never do, the call fails with
[`GraphError::DistanceOverflow`].

On undirected graphs, each edge is relaxed in both directions. Parallel edges are all relaxed
(and the lightest wins); a single undirected edge of negative weight already forms a negative
cycle `u -> v -> u`.
*/

use super::*;

/// Result of [`BellmanFord::run`]
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordResult<W> {
    /// Distances and parents after the last pass.
    /// If `negative_cycle` is set, distances of nodes reachable from the cycle are not final.
    pub paths: ShortestPaths<W>,
    /// *true* iff a negative cycle is reachable from the source
    pub negative_cycle: bool,
    /// Number of relaxation passes executed (without the detection pass)
    pub passes: NumNodes,
}

/// Configurable Bellman-Ford.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Graph::<i32>::directed_from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, -3)]);
/// let res = BellmanFord::new().run(&g, 0).unwrap();
/// assert!(res.negative_cycle);
///
/// let h = Graph::<i32>::directed_from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, -2)]);
/// let res = h.bellman_ford(0).unwrap();
/// assert!(!res.negative_cycle);
/// assert_eq!(res.paths.distances, vec![0, -1, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    early_exit: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Edges whose relaxation left the range of the weight type
struct OutOfRange {
    /// First edge per head that overflowed while the head had no distance
    above: Vec<(Node, Node)>,
    recorded: NodeBitSet,
    below: Option<(Node, Node)>,
}

impl BellmanFord {
    /// Creates a new instance that stops after the first pass without any relaxation
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, always runs all `n - 1` passes
    pub fn set_early_exit(&mut self, early_exit: bool) {
        self.early_exit = early_exit;
    }

    /// If *false*, always runs all `n - 1` passes
    pub fn early_exit(mut self, early_exit: bool) -> Self {
        self.set_early_exit(early_exit);
        self
    }

    /// Runs Bellman-Ford on `graph` from `source`.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `source >= n`
    /// - [`GraphError::DistanceOverflow`] if the distance of a reachable node is not representable
    ///   and no negative cycle is found
    pub fn run<G: AdjacencyList>(
        &self,
        graph: &G,
        source: Node,
    ) -> Result<BellmanFordResult<G::Weight>> {
        graph.check_node(source)?;

        let mut paths = ShortestPaths::<G::Weight>::new(source, graph.number_of_nodes());
        let mut out_of_range = OutOfRange {
            above: Vec::new(),
            recorded: graph.vertex_bitset_unset(),
            below: None,
        };
        let mut passes = 0;

        let mut parent_cycle = false;
        for _ in 1..graph.number_of_nodes() {
            passes += 1;
            let changed = Self::relax_all(graph, &mut paths, &mut out_of_range);
            if out_of_range.below.is_some() && Self::has_parent_cycle(&paths) {
                parent_cycle = true;
                break;
            }
            if !changed && self.early_exit {
                break;
            }
        }

        let negative_cycle = match out_of_range.below {
            Some(_) if parent_cycle => true,
            Some((from, to)) => {
                tracing::debug!(source, from, to, "bellman-ford distance below the weight type");
                return Err(GraphError::DistanceOverflow { from, to });
            }
            None => Self::can_relax(graph, &paths),
        };

        if negative_cycle {
            tracing::debug!(source, passes, "bellman-ford found a reachable negative cycle");
        } else {
            paths.check_overflows(&out_of_range.above)?;
            tracing::trace!(source, passes, "bellman-ford converged");
        }

        Ok(BellmanFordResult {
            paths,
            negative_cycle,
            passes,
        })
    }

    /// One pass over all adjacency entries leaving reached nodes. Returns *true* if any distance changed.
    fn relax_all<G: AdjacencyList>(
        graph: &G,
        paths: &mut ShortestPaths<G::Weight>,
        out_of_range: &mut OutOfRange,
    ) -> bool {
        let mut changed = false;
        for u in graph.vertices() {
            if !paths.is_reachable(u) {
                continue;
            }

            for (v, w) in graph.weighted_neighbors_of(u) {
                match paths.relax(u, v, w) {
                    Relaxation::Improved => changed = true,
                    Relaxation::Unchanged => {}
                    Relaxation::Overflow => {
                        if !out_of_range.recorded.set_bit(v) {
                            out_of_range.above.push((u, v));
                        }
                    }
                    Relaxation::Underflow => {
                        out_of_range.below.get_or_insert((u, v));
                        if paths.is_reachable(v) {
                            paths.parents[v as usize] = u;
                        }
                    }
                }
            }
        }
        changed
    }

    /// Returns *true* if some edge leaving a reached node can still be relaxed
    fn can_relax<G: AdjacencyList>(graph: &G, paths: &ShortestPaths<G::Weight>) -> bool {
        graph.vertices().filter(|&u| paths.is_reachable(u)).any(|u| {
            let du = paths.distances[u as usize];
            graph
                .weighted_neighbors_of(u)
                .any(|(v, w)| match du.checked_sum(w) {
                    Some(dist) => !paths.is_reachable(v) || dist < paths.distances[v as usize],
                    None => w.is_negative(),
                })
        })
    }

    /// Returns *true* if following parent pointers runs into a cycle.
    /// Every parent edge `(p, x)` satisfies `d(x) >= d(p) + w` (exactly, also for edges taken on
    /// underflow) and the edge closing a cycle was strictly relaxing, so such a cycle has negative
    /// weight.
    fn has_parent_cycle<W>(paths: &ShortestPaths<W>) -> bool {
        // node -> start of the walk that visited it first
        let mut walk = vec![INVALID_NODE; paths.parents.len()];
        for start in 0..paths.parents.len() as Node {
            let mut u = start;
            while u != INVALID_NODE && walk[u as usize] == INVALID_NODE {
                walk[u as usize] = start;
                u = paths.parents[u as usize];
            }
            if u != INVALID_NODE && walk[u as usize] == start {
                return true;
            }
        }
        false
    }
}

/// Shortest paths with arbitrary weights
pub trait NegativeWeightShortestPath: AdjacencyList {
    /// Runs [`BellmanFord`] with its default configuration from `source`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `source >= n`
    fn bellman_ford(&self, source: Node) -> Result<BellmanFordResult<Self::Weight>> {
        BellmanFord::new().run(self, source)
    }
}

impl<G: AdjacencyList> NegativeWeightShortestPath for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_distr::Uniform;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn negative_cycle() {
        let g = Graph::<i32>::directed_from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, -3)]);
        assert!(g.bellman_ford(0).unwrap().negative_cycle);

        let h = Graph::<i32>::directed_from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, -2)]);
        let res = h.bellman_ford(0).unwrap();
        assert!(!res.negative_cycle);
        assert_eq!(res.paths.distances, vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let g = Graph::<i64>::directed_from_edges(
            5,
            [(0, 1, 2), (2, 3, -1), (3, 4, -1), (4, 2, -1), (1, 0, 3)],
        );

        let res = g.bellman_ford(0).unwrap();
        assert!(!res.negative_cycle);
        assert_eq!(res.paths.distance_to(1), Some(2));
        assert_eq!(res.paths.distance_to(2), None);

        assert!(g.bellman_ford(3).unwrap().negative_cycle);
    }

    #[test]
    fn undirected_edges() {
        let g = Graph::<i32>::undirected_from_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 7)]);
        let res = g.bellman_ford(2).unwrap();
        assert!(!res.negative_cycle);
        assert_eq!(res.paths.distances, vec![5, 1, 0]);

        let mut h = g.clone();
        h.add_edge(1, 2, -1);
        assert!(h.bellman_ford(0).unwrap().negative_cycle);
    }

    #[test]
    fn parallel_edges_keep_the_lightest() {
        let g = Graph::<i32>::undirected_from_edges(2, [(0, 1, 5), (1, 0, 2), (0, 1, 9)]);
        let res = g.bellman_ford(0).unwrap();
        assert_eq!(res.paths.distances, vec![0, 2]);
    }

    #[test]
    fn early_exit() {
        let mut g = Graph::<u32>::directed(10);
        g.connect_path(0..10, 1);

        let res = g.bellman_ford(0).unwrap();
        assert_eq!(res.passes, 2);
        assert_eq!(res.paths.distance_to(9), Some(9));

        let res = BellmanFord::new().early_exit(false).run(&g, 9).unwrap();
        assert_eq!(res.passes, 9);
        assert_eq!(res.paths.distance_to(0), None);

        let single = Graph::<u32>::directed(1);
        assert_eq!(single.bellman_ford(0).unwrap().passes, 0);
        assert!(single.bellman_ford(1).is_err());
    }

    #[test]
    fn distances_near_the_weight_limits() {
        let g = Graph::<u8>::directed_from_edges(4, [(0, 1, 22), (1, 2, 22), (2, 3, 22)]);
        let res = g.bellman_ford(0).unwrap();
        assert!(!res.negative_cycle);
        assert_eq!(res.paths.distance_to(3), Some(66));

        let g = Graph::<u32>::directed_from_edges(2, [(0, 1, 2_000_000_000)]);
        assert_eq!(g.bellman_ford(0).unwrap().paths.distance_to(1), Some(2_000_000_000));

        let g = Graph::<u8>::directed_from_edges(3, [(0, 1, 200), (1, 2, 100)]);
        assert_eq!(
            g.bellman_ford(0),
            Err(GraphError::DistanceOverflow { from: 1, to: 2 })
        );

        // no cycle, the distance of 2 is below `i8::MIN`
        let g = Graph::<i8>::directed_from_edges(3, [(0, 1, -100), (1, 2, -100)]);
        assert_eq!(
            g.bellman_ford(0),
            Err(GraphError::DistanceOverflow { from: 1, to: 2 })
        );
    }

    #[test]
    fn heavy_negative_cycles() {
        let two = Graph::<i32>::directed_from_edges(2, [(0, 1, -1_000_000_000), (1, 0, -1_000_000_000)]);
        assert!(two.bellman_ford(0).unwrap().negative_cycle);

        let mut three = Graph::<i32>::directed(4);
        three.connect_cycle(0..3, -1_000_000_000);
        three.add_edge(3, 0, 5);
        assert!(three.bellman_ford(3).unwrap().negative_cycle);
        assert!(three.bellman_ford(0).unwrap().negative_cycle);

        let looped = Graph::<i8>::directed_from_edges(2, [(0, 1, -100), (1, 1, -100)]);
        assert!(looped.bellman_ford(0).unwrap().negative_cycle);

        let mut dense = Graph::<i32>::directed(40);
        dense.connect_clique(&(0..40).collect::<Vec<Node>>(), -1);
        let res = BellmanFord::new().early_exit(false).run(&dense, 0).unwrap();
        assert!(res.negative_cycle);
        assert_eq!(res.passes, 39);
    }

    #[test]
    fn agrees_with_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        let weights = Uniform::new(0u64, 1000).unwrap();

        for i in 0..40 {
            let n = rng.random_range(1..60);
            let mut generator = Gnp::new().nodes(n).avg_deg(4.0);
            if i % 2 == 0 {
                generator.set_directed();
            }
            let g: Graph<u64> = generator.generate_weighted(rng, &weights);

            let source = rng.random_range(0..n);
            let bf = g.bellman_ford(source).unwrap();
            assert!(!bf.negative_cycle);
            assert_eq!(bf.paths.distances, g.dijkstra(source).unwrap().distances);
        }
    }

    #[test]
    fn detects_negative_cycles_iff_present() {
        let rng = &mut Pcg64Mcg::seed_from_u64(22);

        for _ in 0..40 {
            let n = rng.random_range(2..30);
            let mut g = Graph::<i64>::directed(n);
            for _ in 0..2 * n {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u < v {
                    g.add_edge(u, v, rng.random_range(-10..10));
                }
            }

            // without back edges the graph is acyclic
            let dag = g.bellman_ford(0).unwrap();
            assert!(!dag.negative_cycle);

            let u = rng.random_range(1..n);
            let weight = rng.random_range(-30..30);
            g.add_edge(u, 0, weight);

            let cycle_through_0 =
                dag.paths.is_reachable(u) && dag.paths.distances[u as usize] + weight < 0;
            assert_eq!(g.bellman_ford(0).unwrap().negative_cycle, cycle_through_0);
        }
    }
}

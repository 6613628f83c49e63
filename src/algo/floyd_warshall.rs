use super::*;

/// Distance and next-hop matrices of all pairs of nodes, computed by
/// [`AllPairsShortestPath::floyd_warshall`].
///
/// Both matrices are stored row-major in a single allocation each. A pair `(i, j)` is connected
/// iff its next hop is set.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsShortestPaths<W> {
    n: NumNodes,
    dist: Vec<W>,
    next: Vec<Node>,
    negative_cycle: bool,
}

impl<W: Weight> AllPairsShortestPaths<W> {
    #[inline]
    fn idx(&self, i: Node, j: Node) -> usize {
        i as usize * self.n as usize + j as usize
    }

    /// Returns the number of nodes of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the row of distances from `i`; unreachable nodes have distance [`Weight::infinity`].
    /// ** Panics if `i >= n` **
    pub fn distances_from(&self, i: Node) -> &[W] {
        let start = self.idx(i, 0);
        &self.dist[start..start + self.n as usize]
    }

    /// Returns the length of a shortest path from `i` to `j` or `None` if there is none.
    /// ** Panics if `i >= n || j >= n` **
    pub fn distance(&self, i: Node, j: Node) -> Option<W> {
        let ij = self.idx(i, j);
        (self.next[ij] != INVALID_NODE).then(|| self.dist[ij])
    }

    /// Returns *true* if the graph contains a negative cycle.
    /// In that case the computation stopped early and the matrices are not final.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Returns the nodes on a shortest path from `i` to `j` (both included) by following the
    /// next-hop matrix. Returns `None` if `j` is unreachable from `i` or if the walk does not reach
    /// `j` within `n` steps (possible only in the presence of negative cycles).
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `i >= n || j >= n`
    pub fn path(&self, i: Node, j: Node) -> Result<Option<Vec<Node>>> {
        check_node(i, self.n)?;
        check_node(j, self.n)?;

        if self.distance(i, j).is_none() {
            return Ok(None);
        }

        let mut path = vec![i];
        let mut u = i;
        while u != j {
            if path.len() > self.n as usize {
                return Ok(None);
            }
            u = self.next[self.idx(u, j)];
            path.push(u);
        }

        Ok(Some(path))
    }
}

/// All-pairs shortest paths
pub trait AllPairsShortestPath: AdjacencyList {
    /// Computes the distances between all pairs of nodes with the Floyd-Warshall algorithm in
    /// time `O(n^3)` and space `O(n^2)`; only sensible for small graphs.
    ///
    /// Negative weights are supported. The computation stops after the first round that closes a
    /// negative cycle, which is then reported by [`AllPairsShortestPaths::has_negative_cycle`].
    /// Of parallel edges, only the lightest is considered.
    ///
    /// # Errors
    /// [`GraphError::DistanceOverflow`] if the distance of a connected pair is not representable
    /// in the weight type
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<i32>::directed_from_edges(4, [(0, 1, 5), (1, 2, -2), (0, 2, 4), (2, 3, 1)]);
    /// let apsp = g.floyd_warshall().unwrap();
    ///
    /// assert_eq!(apsp.distance(0, 3), Some(4));
    /// assert_eq!(apsp.distance(3, 0), None);
    /// assert_eq!(apsp.path(0, 3), Ok(Some(vec![0, 1, 2, 3])));
    /// assert!(!apsp.has_negative_cycle());
    /// ```
    fn floyd_warshall(&self) -> Result<AllPairsShortestPaths<Self::Weight>> {
        let n = self.number_of_nodes();
        let len = self.len();

        let mut apsp = AllPairsShortestPaths {
            n,
            dist: vec![Self::Weight::infinity(); len * len],
            next: vec![INVALID_NODE; len * len],
            negative_cycle: false,
        };

        for u in self.vertices_range() {
            let uu = apsp.idx(u, u);
            apsp.dist[uu] = Self::Weight::zero();
            apsp.next[uu] = u;

            for (v, w) in self.weighted_neighbors_of(u) {
                let uv = apsp.idx(u, v);
                if w < apsp.dist[uv] || apsp.next[uv] == INVALID_NODE {
                    apsp.dist[uv] = w;
                    apsp.next[uv] = v;
                }
            }

            apsp.negative_cycle |= apsp.dist[uu].is_negative();
        }

        // pairs whose only candidates so far exceed the largest weight
        let mut overflows = Vec::new();

        for k in 0..len {
            if apsp.negative_cycle {
                tracing::debug!(round = k, "floyd-warshall found a negative cycle");
                return Ok(apsp);
            }

            // without negative cycles through `0..=k`, a sum below the range is a real distance
            let mut underflow = None;

            for i in 0..len {
                let ik = i * len + k;
                if apsp.next[ik] == INVALID_NODE {
                    continue;
                }
                let dik = apsp.dist[ik];

                for j in 0..len {
                    let kj = k * len + j;
                    if apsp.next[kj] == INVALID_NODE {
                        continue;
                    }

                    let ij = i * len + j;
                    let connected = apsp.next[ij] != INVALID_NODE;
                    match dik.checked_sum(apsp.dist[kj]) {
                        Some(nd) if !connected || nd < apsp.dist[ij] => {
                            apsp.dist[ij] = nd;
                            apsp.next[ij] = apsp.next[ik];
                            apsp.negative_cycle |= i == j && nd.is_negative();
                        }
                        Some(_) => {}
                        None if dik.is_negative() => {
                            if i == j {
                                apsp.negative_cycle = true;
                            } else {
                                underflow.get_or_insert((i, j));
                            }
                        }
                        None if connected => {}
                        None => overflows.push((i, j)),
                    }
                }
            }

            if let (Some((i, j)), false) = (underflow, apsp.negative_cycle) {
                return Err(GraphError::DistanceOverflow {
                    from: i as Node,
                    to: j as Node,
                });
            }
        }

        if apsp.negative_cycle {
            tracing::debug!("floyd-warshall found a negative cycle");
        } else if let Some(&(i, j)) = overflows
            .iter()
            .find(|&&(i, j)| apsp.next[i * len + j] == INVALID_NODE)
        {
            return Err(GraphError::DistanceOverflow {
                from: i as Node,
                to: j as Node,
            });
        }

        Ok(apsp)
    }
}

impl<G: AdjacencyList> AllPairsShortestPath for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_distr::Uniform;
    use rand_pcg::Pcg64Mcg;

    fn path_weight(g: &Graph<i64>, path: &[Node]) -> i64 {
        path.iter()
            .tuple_windows()
            .map(|(&u, &v)| {
                g.weighted_neighbors_of(u)
                    .filter(|&(x, _)| x == v)
                    .map(|(_, w)| w)
                    .min()
                    .unwrap()
            })
            .sum()
    }

    #[test]
    fn matches_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);
        let weights = Uniform::new(0i64, 100).unwrap();

        for i in 0..30 {
            let n = rng.random_range(1..35);
            let mut generator = Gnp::new().nodes(n).avg_deg(3.0);
            if i % 2 == 0 {
                generator.set_directed();
            }
            let g: Graph<i64> = generator.generate_weighted(rng, &weights);

            let apsp = g.floyd_warshall().unwrap();
            assert!(!apsp.has_negative_cycle());

            for s in g.vertices() {
                let sp = g.dijkstra(s).unwrap();
                assert_eq!(apsp.distances_from(s), sp.distances.as_slice());

                for t in g.vertices() {
                    match apsp.path(s, t).unwrap() {
                        Some(path) => {
                            assert_eq!(path.first(), Some(&s));
                            assert_eq!(path.last(), Some(&t));
                            assert_eq!(Some(path_weight(&g, &path)), apsp.distance(s, t));
                        }
                        None => assert!(!sp.is_reachable(t)),
                    }
                }
            }
        }
    }

    #[test]
    fn parallel_edges_and_loops() {
        let g = Graph::<i64>::undirected_from_edges(3, [(0, 1, 7), (1, 0, 3), (1, 1, 5), (1, 2, 1)]);
        let apsp = g.floyd_warshall().unwrap();

        assert_eq!(apsp.distance(0, 1), Some(3));
        assert_eq!(apsp.distance(2, 0), Some(4));
        assert_eq!(apsp.distance(1, 1), Some(0));
        assert_eq!(apsp.path(2, 0), Ok(Some(vec![2, 1, 0])));
        assert_eq!(apsp.path(1, 1), Ok(Some(vec![1])));
        assert!(apsp.path(0, 3).is_err());
    }

    #[test]
    fn negative_cycles() {
        let g = Graph::<i64>::directed_from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 0, -3), (2, 3, 1)]);
        let apsp = g.floyd_warshall().unwrap();
        assert!(apsp.has_negative_cycle());
        assert!(g.vertices().any(|v| apsp.distance(v, v).is_some_and(|d| d < 0)));
        assert_eq!(apsp.distance(3, 0), None);

        let looped = Graph::<i64>::directed_from_edges(1, [(0, 0, -1)]);
        assert!(looped.floyd_warshall().unwrap().has_negative_cycle());

        let fine = Graph::<i64>::directed_from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, -2)]);
        let apsp = fine.floyd_warshall().unwrap();
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.distance(2, 1), Some(-1));
    }

    #[test]
    fn empty_graph() {
        let g = Graph::<f64>::directed(0);
        let apsp = g.floyd_warshall().unwrap();
        assert_eq!(apsp.number_of_nodes(), 0);
        assert!(!apsp.has_negative_cycle());
    }

    #[test]
    fn heavy_negative_cycles() {
        let mut dense = Graph::<i32>::directed(40);
        dense.connect_clique(&(0..40).collect::<Vec<Node>>(), -1);
        assert!(dense.floyd_warshall().unwrap().has_negative_cycle());

        let mut heavy = Graph::<i32>::directed(3);
        heavy.connect_cycle(0..3, -1_000_000_000);
        assert!(heavy.floyd_warshall().unwrap().has_negative_cycle());

        let looped = Graph::<i8>::directed_from_edges(2, [(0, 1, -100), (1, 1, -100)]);
        assert!(looped.floyd_warshall().unwrap().has_negative_cycle());
    }

    #[test]
    fn distances_near_the_weight_limits() {
        let g = Graph::<u8>::directed_from_edges(4, [(0, 1, 85), (1, 2, 85), (2, 3, 85)]);
        let apsp = g.floyd_warshall().unwrap();
        assert_eq!(apsp.distance(0, 3), Some(u8::MAX));
        assert_eq!(apsp.distance(3, 0), None);
        assert_eq!(apsp.distances_from(3)[0], u8::MAX);

        let g = Graph::<u8>::directed_from_edges(4, [(0, 1, 86), (1, 2, 86), (2, 3, 86)]);
        assert_eq!(
            g.floyd_warshall(),
            Err(GraphError::DistanceOverflow { from: 0, to: 3 })
        );

        let g = Graph::<i8>::directed_from_edges(3, [(0, 1, -100), (1, 2, -100)]);
        assert_eq!(
            g.floyd_warshall(),
            Err(GraphError::DistanceOverflow { from: 0, to: 2 })
        );
    }
}

/*!
# Single-Source Shortest Paths

Weighted single-source shortest paths for graphs whose weights satisfy the precondition of the
respective algorithm:

| algorithm                               | weights              | time              |
|-----------------------------------------|----------------------|-------------------|
| [`ShortestPath::dijkstra`]              | non-negative         | `O((n + m) log n)`|
| [`ShortestPath::zero_one_bfs`]          | `0` or `1`           | `O(n + m)`        |
| [`ShortestPath::dag_shortest_paths`]    | arbitrary, acyclic   | `O(n + m)`        |
| [`BellmanFord`](super::BellmanFord)     | arbitrary            | `O(n * m)`        |

All of them report their result as [`ShortestPaths`]. A node is reachable iff it is the source or
has a parent; unreachable nodes keep the distance [`Weight::infinity`] and the parent
[`INVALID_NODE`]. Sums of weights are checked: a node whose distance is not representable in the
weight type yields [`GraphError::DistanceOverflow`] instead of a wrapped or saturated value.
*/

use std::collections::{BinaryHeap, VecDeque};

use super::*;

/// Distances and shortest path tree from a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    /// The node all distances are measured from
    pub source: Node,
    /// `distances[v]` is the length of a shortest path to `v`, [`Weight::infinity`] if unreachable
    pub distances: Vec<W>,
    /// Predecessor of `v` on a shortest path, [`INVALID_NODE`] for the source and unreachable nodes
    pub parents: Vec<Node>,
}

/// Outcome of relaxing a single edge `(u, v)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relaxation {
    Improved,
    Unchanged,
    /// `d(u) + w` exceeds the largest weight and `v` has no distance yet
    Overflow,
    /// `d(u) + w` is below the smallest weight
    Underflow,
}

impl<W: Weight> ShortestPaths<W> {
    /// Only the source is reached (at distance `0`)
    pub(crate) fn new(source: Node, n: NumNodes) -> Self {
        let mut distances = vec![W::infinity(); n as usize];
        distances[source as usize] = W::zero();
        Self {
            source,
            distances,
            parents: vec![INVALID_NODE; n as usize],
        }
    }

    /// Tries to improve the distance of `v` via the edge `(u, v)` of weight `w`.
    /// `u` must be reachable.
    #[inline]
    pub(crate) fn relax(&mut self, u: Node, v: Node, w: W) -> Relaxation {
        let reached = self.is_reachable(v);
        match self.distances[u as usize].checked_sum(w) {
            Some(dist) if !reached || dist < self.distances[v as usize] => {
                self.distances[v as usize] = dist;
                self.parents[v as usize] = u;
                Relaxation::Improved
            }
            Some(_) => Relaxation::Unchanged,
            None if w.is_negative() => Relaxation::Underflow,
            None if reached => Relaxation::Unchanged,
            None => Relaxation::Overflow,
        }
    }

    /// Fails for the first edge in `overflows` whose head never received a distance
    pub(crate) fn check_overflows(&self, overflows: &[(Node, Node)]) -> Result<()> {
        match overflows.iter().find(|&&(_, v)| !self.is_reachable(v)) {
            Some(&(from, to)) => {
                tracing::debug!(from, to, "shortest path distance exceeds the weight type");
                Err(GraphError::DistanceOverflow { from, to })
            }
            None => Ok(()),
        }
    }

    /// Returns the distance to `v` or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<W> {
        self.is_reachable(v).then(|| self.distances[v as usize])
    }

    /// Returns *true* if there is a path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        v == self.source || self.parents[v as usize] != INVALID_NODE
    }

    /// Returns the nodes on a shortest path from the source to `v` (both included)
    /// or `None` if `v` is unreachable.
    ///
    /// Also returns `None` if following the parents of `v` runs into a cycle, which can only happen
    /// for results of Bellman-Ford with a negative cycle.
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while u != self.source {
            if path.len() >= self.distances.len() {
                return None;
            }
            u = self.parents[u as usize];
            path.push(u);
        }

        path.reverse();
        Some(path)
    }
}

/// Shortest path algorithms for graphs with restricted weights
pub trait ShortestPath: AdjacencyList {
    /// Computes shortest paths from `source` with Dijkstra's algorithm using a binary heap with
    /// lazy deletion: stale heap entries are skipped when popped.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `source >= n`
    /// - [`GraphError::NegativeWeight`] if any edge has a negative weight
    /// - [`GraphError::DistanceOverflow`] if a reachable node is farther away than the largest weight
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::directed_from_edges(4, [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)]);
    /// let sp = g.dijkstra(0).unwrap();
    ///
    /// assert_eq!(sp.distances, vec![0, 3, 1, 4]);
    /// assert_eq!(sp.path_to(3), Some(vec![0, 2, 1, 3]));
    /// ```
    fn dijkstra(&self, source: Node) -> Result<ShortestPaths<Self::Weight>> {
        self.check_node(source)?;
        if let Some(e) = self.find_negative_edge() {
            return Err(GraphError::NegativeWeight {
                from: e.from,
                to: e.to,
            });
        }

        let mut sp = ShortestPaths::<Self::Weight>::new(source, self.number_of_nodes());
        let mut heap = BinaryHeap::with_capacity(self.len());
        heap.push(MinHeapEntry::new(Self::Weight::zero(), source));
        let mut overflows = Vec::new();

        while let Some(MinHeapEntry { key: dist, node: u }) = heap.pop() {
            if dist > sp.distances[u as usize] {
                continue;
            }

            for (v, w) in self.weighted_neighbors_of(u) {
                match sp.relax(u, v, w) {
                    Relaxation::Improved => heap.push(MinHeapEntry::new(sp.distances[v as usize], v)),
                    Relaxation::Overflow => overflows.push((u, v)),
                    Relaxation::Unchanged | Relaxation::Underflow => {}
                }
            }
        }

        sp.check_overflows(&overflows)?;
        Ok(sp)
    }

    /// Computes shortest paths from `source` in a graph whose weights are all `0` or `1`.
    /// Nodes reached via a `0`-edge are pushed to the front of a deque, nodes reached via a `1`-edge
    /// to its back.
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `source >= n`
    /// - [`GraphError::NonBinaryWeight`] if any edge has a weight other than `0` or `1`
    /// - [`GraphError::DistanceOverflow`] if a reachable node is farther away than the largest weight
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u8>::undirected_from_edges(4, [(0, 1, 1), (1, 2, 0), (0, 3, 1), (3, 2, 1)]);
    /// assert_eq!(g.zero_one_bfs(0).unwrap().distances, vec![0, 1, 1, 1]);
    ///
    /// let h = Graph::<u8>::directed_from_edges(2, [(0, 1, 2)]);
    /// assert!(h.zero_one_bfs(0).is_err());
    /// ```
    fn zero_one_bfs(&self, source: Node) -> Result<ShortestPaths<Self::Weight>> {
        self.check_node(source)?;

        let zero = Self::Weight::zero();
        let one = Self::Weight::one();
        if let Some(e) = self
            .stored_edges()
            .iter()
            .find(|e| e.weight != zero && e.weight != one)
        {
            return Err(GraphError::NonBinaryWeight {
                from: e.from,
                to: e.to,
            });
        }

        let mut sp = ShortestPaths::<Self::Weight>::new(source, self.number_of_nodes());
        let mut deque = VecDeque::from(vec![source]);
        let mut overflows = Vec::new();

        while let Some(u) = deque.pop_front() {
            for (v, w) in self.weighted_neighbors_of(u) {
                match sp.relax(u, v, w) {
                    Relaxation::Improved if w == zero => deque.push_front(v),
                    Relaxation::Improved => deque.push_back(v),
                    Relaxation::Overflow => overflows.push((u, v)),
                    Relaxation::Unchanged | Relaxation::Underflow => {}
                }
            }
        }

        sp.check_overflows(&overflows)?;
        Ok(sp)
    }

    /// Computes shortest paths from `source` by relaxing the edges of every node once in
    /// topological order. Negative weights are allowed.
    ///
    /// Returns `Ok(None)` if the graph has no topological order (i.e. it contains a cycle;
    /// every edge of an undirected graph counts as one).
    ///
    /// # Errors
    /// - [`GraphError::NodeOutOfRange`] if `source >= n`
    /// - [`GraphError::DistanceOverflow`] if the distance of a reachable node is not representable
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let dag = Graph::<i32>::directed_from_edges(4, [(0, 1, 5), (0, 2, 3), (2, 1, -4), (1, 3, 1)]);
    /// let sp = dag.dag_shortest_paths(0).unwrap().unwrap();
    /// assert_eq!(sp.distances, vec![0, -1, 3, 0]);
    ///
    /// let cyclic = Graph::<i32>::directed_from_edges(2, [(0, 1, 1), (1, 0, 1)]);
    /// assert_eq!(cyclic.dag_shortest_paths(0), Ok(None));
    /// ```
    fn dag_shortest_paths(&self, source: Node) -> Result<Option<ShortestPaths<Self::Weight>>> {
        self.check_node(source)?;

        let order = self.topological_sort_dfs();
        if order.is_empty() {
            return Ok(None);
        }

        let mut sp = ShortestPaths::<Self::Weight>::new(source, self.number_of_nodes());
        let mut overflows = Vec::new();
        for u in order {
            if !sp.is_reachable(u) {
                continue;
            }

            for (v, w) in self.weighted_neighbors_of(u) {
                match sp.relax(u, v, w) {
                    // acyclic, so the distance of `v` itself is out of range
                    Relaxation::Underflow => return Err(GraphError::DistanceOverflow { from: u, to: v }),
                    Relaxation::Overflow => overflows.push((u, v)),
                    Relaxation::Improved | Relaxation::Unchanged => {}
                }
            }
        }

        sp.check_overflows(&overflows)?;
        Ok(Some(sp))
    }
}

impl<G: AdjacencyList> ShortestPath for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_distr::Uniform;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn dijkstra_small() {
        let g = Graph::<u32>::undirected_from_edges(
            5,
            [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)],
        );
        let sp = g.dijkstra(0).unwrap();

        assert_eq!(sp.source, 0);
        assert_eq!(sp.distances[..4], [0, 1, 3, 4]);
        assert_eq!(sp.distance_to(4), None);
        assert_eq!(sp.distances[4], u32::MAX);
        assert_eq!(sp.path_to(3), Some(vec![0, 1, 2, 3]));
        assert_eq!(sp.path_to(0), Some(vec![0]));
        assert_eq!(sp.path_to(4), None);
    }

    #[test]
    fn dijkstra_floats_and_parallel_edges() {
        let g = Graph::<f64>::directed_from_edges(3, [(0, 1, 2.5), (0, 1, 0.5), (1, 2, 0.25)]);
        let sp = g.dijkstra(0).unwrap();

        assert_eq!(sp.distances, vec![0.0, 0.5, 0.75]);
        assert!(g.dijkstra(1).unwrap().distance_to(0).is_none());
        assert_eq!(g.dijkstra(1).unwrap().distances[0], f64::INFINITY);
    }

    #[test]
    fn dijkstra_rejects_negative_weights() {
        let g = Graph::<i64>::directed_from_edges(3, [(0, 1, 2), (1, 2, -1)]);
        assert_eq!(
            g.dijkstra(0),
            Err(GraphError::NegativeWeight { from: 1, to: 2 })
        );
        assert!(matches!(
            g.dijkstra(3),
            Err(GraphError::NodeOutOfRange { .. })
        ));
    }

    #[test]
    fn distances_up_to_the_largest_weight() {
        let g = Graph::<u8>::directed_from_edges(4, [(0, 1, 22), (1, 2, 22), (2, 3, 22)]);
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.distances, vec![0, 22, 44, 66]);
        assert_eq!(sp.distance_to(3), Some(66));

        let g = Graph::<u8>::directed_from_edges(4, [(0, 1, 85), (1, 2, 85), (2, 3, 85)]);
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.distance_to(3), Some(u8::MAX));
        assert_eq!(sp.path_to(3), Some(vec![0, 1, 2, 3]));

        let g = Graph::<u32>::directed_from_edges(3, [(0, 1, 2_000_000_000)]);
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.distance_to(1), Some(2_000_000_000));
        assert_eq!(sp.path_to(1), Some(vec![0, 1]));
        assert_eq!(sp.distance_to(2), None);
        assert_eq!(sp.distances[2], u32::MAX);
    }

    #[test]
    fn distances_beyond_the_largest_weight() {
        let g = Graph::<u8>::directed_from_edges(4, [(0, 1, 86), (1, 2, 86), (2, 3, 86)]);
        assert_eq!(
            g.dijkstra(0),
            Err(GraphError::DistanceOverflow { from: 2, to: 3 })
        );
        assert_eq!(
            g.dag_shortest_paths(0),
            Err(GraphError::DistanceOverflow { from: 2, to: 3 })
        );

        // the overflowing path to 2 is not the only one
        let g = Graph::<u8>::directed_from_edges(4, [(0, 1, 10), (1, 2, 250), (0, 3, 100), (3, 2, 100)]);
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.distances, vec![0, 10, 200, 100]);
        assert_eq!(sp.path_to(2), Some(vec![0, 3, 2]));

        let mut path = Graph::<u8>::directed(257);
        path.connect_path(0..257, 1);
        assert_eq!(
            path.zero_one_bfs(0),
            Err(GraphError::DistanceOverflow { from: 255, to: 256 })
        );
        assert_eq!(path.zero_one_bfs(1).unwrap().distance_to(256), Some(255));

        let negative = Graph::<i8>::directed_from_edges(3, [(0, 1, -100), (1, 2, -100)]);
        assert_eq!(
            negative.dag_shortest_paths(0),
            Err(GraphError::DistanceOverflow { from: 1, to: 2 })
        );
        assert_eq!(
            negative.dag_shortest_paths(1).unwrap().unwrap().distance_to(2),
            Some(-100)
        );
    }

    #[test]
    fn zero_one_bfs_matches_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let binary = Uniform::new_inclusive(0u32, 1).unwrap();

        for i in 0..40 {
            let n = rng.random_range(1..50);
            let mut generator = Gnp::new().nodes(n).avg_deg(3.0);
            if i % 2 == 0 {
                generator.set_directed();
            }
            let g: Graph<u32> = generator.generate_weighted(rng, &binary);

            let source = rng.random_range(0..n);
            assert_eq!(
                g.zero_one_bfs(source).unwrap().distances,
                g.dijkstra(source).unwrap().distances
            );
        }
    }

    #[test]
    fn zero_one_bfs_rejects_other_weights() {
        let g = Graph::<i32>::directed_from_edges(3, [(0, 1, 1), (1, 2, -1)]);
        assert_eq!(
            g.zero_one_bfs(0),
            Err(GraphError::NonBinaryWeight { from: 1, to: 2 })
        );
    }

    #[test]
    fn dag_shortest_paths() {
        let g = Graph::<i32>::directed_from_edges(
            6,
            [(0, 1, 5), (0, 2, 3), (1, 3, 6), (1, 2, 2), (2, 4, 4), (2, 5, 2), (2, 3, 7), (3, 4, -1), (4, 5, -2)],
        );

        let sp = g.dag_shortest_paths(1).unwrap().unwrap();
        assert_eq!(sp.distance_to(0), None);
        assert_eq!(sp.distances[1..], [0, 2, 6, 5, 3]);
        assert_eq!(sp.path_to(5), Some(vec![1, 3, 4, 5]));

        let undirected = Graph::<i32>::undirected_from_edges(2, [(0, 1, 1)]);
        assert_eq!(undirected.dag_shortest_paths(0), Ok(None));
        assert!(g.dag_shortest_paths(6).is_err());
    }

    #[test]
    fn dag_shortest_paths_match_dijkstra_on_random_dags() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for _ in 0..30 {
            let n = rng.random_range(1..40);
            let mut g = Graph::<u64>::directed(n);
            for _ in 0..3 * n {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u < v {
                    g.add_edge(u, v, rng.random_range(0..100));
                }
            }

            let source = rng.random_range(0..n);
            assert_eq!(
                g.dag_shortest_paths(source).unwrap().unwrap().distances,
                g.dijkstra(source).unwrap().distances
            );
        }
    }
}

/*!
# Maximum Flow

[`FlowNetwork`] stores a directed network with capacities as a residual graph and computes a
maximum `s-t` flow with Dinic's algorithm: each phase builds the BFS level graph of the residual
network and saturates it with a blocking flow. The blocking flow is found by an iterative DFS
that keeps a cursor per node, so every arc is discarded at most once per phase.

After [`FlowNetwork::max_flow`], the flow on each edge and a minimum cut can be queried.
By max-flow/min-cut duality, the capacity of that cut equals the flow value.
*/

use std::collections::VecDeque;

use super::*;

/// One direction of an edge in the residual network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualArc<C> {
    /// Head of the arc
    pub to: Node,
    /// Remaining capacity
    pub capacity: C,
    /// Position of the reverse arc in the residual adjacency of `to`
    pub rev: usize,
}

/// Handle of an edge added to a [`FlowNetwork`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowEdge(usize);

#[derive(Debug, Clone, Copy)]
struct EdgeInfo<C> {
    from: Node,
    arc: usize,
    capacity: C,
}

const UNLEVELED: NumNodes = NumNodes::MAX;

/// Directed flow network with residual capacities.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut net = FlowNetwork::new(4);
/// let a = net.try_add_edge(0, 1, 3).unwrap();
/// net.try_add_edge(0, 2, 2).unwrap();
/// net.try_add_edge(1, 2, 5).unwrap();
/// net.try_add_edge(1, 3, 2).unwrap();
/// net.try_add_edge(2, 3, 3).unwrap();
///
/// assert_eq!(net.max_flow(0, 3), Ok(5));
/// assert_eq!(net.min_cut_value(), 5);
/// assert_eq!(net.min_cut(), vec![0]);
/// assert_eq!(net.flow_on(a), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FlowNetwork<C> {
    adjacency: Vec<Vec<ResidualArc<C>>>,
    edges: Vec<EdgeInfo<C>>,
    level: Vec<NumNodes>,
    cursor: Vec<usize>,
    source: Option<Node>,
}

impl<C: Weight> FlowNetwork<C> {
    /// Creates a network with `n` nodes and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            adjacency: vec![Vec::new(); n as usize],
            edges: Vec::new(),
            level: vec![UNLEVELED; n as usize],
            cursor: vec![0; n as usize],
            source: None,
        }
    }

    /// Creates a network whose capacities are the weights of `graph`.
    /// An undirected edge `{u, v}` becomes the two arcs `(u, v)` and `(v, u)` with the same
    /// capacity each.
    ///
    /// # Errors
    /// [`GraphError::NegativeCapacity`] if an edge has a negative weight
    pub fn from_graph<G>(graph: &G) -> Result<Self>
    where
        G: AdjacencyList<Weight = C>,
    {
        let mut net = Self::new(graph.number_of_nodes());
        for e in graph.stored_edges() {
            net.try_add_edge(e.from, e.to, e.weight)?;
            if graph.is_undirected() && !e.edge().is_loop() {
                net.try_add_edge(e.to, e.from, e.weight)?;
            }
        }
        Ok(net)
    }

    /// Returns the number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.adjacency.len() as NumNodes
    }

    /// Returns the number of edges added so far
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the residual arcs leaving `u`
    /// ** Panics if `u >= n` **
    pub fn residual_arcs_of(&self, u: Node) -> &[ResidualArc<C>] {
        &self.adjacency[u as usize]
    }

    /// Adds the directed edge `(u, v)` with capacity `capacity`.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `u >= n || v >= n`,
    /// [`GraphError::NegativeCapacity`] if `capacity < 0`
    pub fn try_add_edge(&mut self, u: Node, v: Node, capacity: C) -> Result<FlowEdge> {
        let n = self.number_of_nodes();
        check_node(u, n)?;
        check_node(v, n)?;
        if capacity.is_negative() {
            return Err(GraphError::NegativeCapacity { from: u, to: v });
        }

        let arc = self.adjacency[u as usize].len();
        // for a loop, the reverse arc is pushed to the same list right after the forward arc
        let rev = self.adjacency[v as usize].len() + usize::from(u == v);

        self.adjacency[u as usize].push(ResidualArc {
            to: v,
            capacity,
            rev,
        });
        self.adjacency[v as usize].push(ResidualArc {
            to: u,
            capacity: C::zero(),
            rev: arc,
        });

        self.edges.push(EdgeInfo {
            from: u,
            arc,
            capacity,
        });
        Ok(FlowEdge(self.edges.len() - 1))
    }

    /// Returns the capacity `edge` was created with
    /// ** Panics if `edge` belongs to another network **
    pub fn capacity_of(&self, edge: FlowEdge) -> C {
        self.edges[edge.0].capacity
    }

    /// Returns the flow routed over `edge` by the last call to [`FlowNetwork::max_flow`]
    /// ** Panics if `edge` belongs to another network **
    pub fn flow_on(&self, edge: FlowEdge) -> C {
        let info = self.edges[edge.0];
        info.capacity - self.adjacency[info.from as usize][info.arc].capacity
    }

    /// Restores all residual capacities to the original capacities (zero flow)
    fn reset(&mut self) {
        for info in &self.edges {
            let arc = self.adjacency[info.from as usize][info.arc];
            self.adjacency[info.from as usize][info.arc].capacity = info.capacity;
            self.adjacency[arc.to as usize][arc.rev].capacity = C::zero();
        }
    }

    /// Computes a maximum flow from `s` to `t` with Dinic's algorithm and returns its value.
    /// Every call starts from the zero flow. For `s == t`, the flow is zero.
    ///
    /// # Errors
    /// [`GraphError::NodeOutOfRange`] if `s >= n || t >= n`
    pub fn max_flow(&mut self, s: Node, t: Node) -> Result<C> {
        let n = self.number_of_nodes();
        check_node(s, n)?;
        check_node(t, n)?;

        self.reset();
        self.source = Some(s);

        let mut flow = C::zero();
        if s == t {
            return Ok(flow);
        }

        let mut phases = 0;
        while self.compute_levels(s, t) {
            phases += 1;
            self.cursor.fill(0);

            let mut phase_flow = C::zero();
            while let Some(pushed) = self.augment(s, t) {
                phase_flow = phase_flow + pushed;
            }

            tracing::trace!(phase = phases, depth = self.level[t as usize], "blocking flow saturated");
            flow = flow + phase_flow;
        }

        tracing::debug!(s, t, phases, "dinic finished");
        Ok(flow)
    }

    /// BFS on arcs with positive residual capacity. Returns *true* if `t` is reachable from `s`.
    fn compute_levels(&mut self, s: Node, t: Node) -> bool {
        self.level.fill(UNLEVELED);
        self.level[s as usize] = 0;

        let mut queue = VecDeque::from([s]);
        while let Some(u) = queue.pop_front() {
            for arc in &self.adjacency[u as usize] {
                if arc.capacity > C::zero() && self.level[arc.to as usize] == UNLEVELED {
                    self.level[arc.to as usize] = self.level[u as usize] + 1;
                    queue.push_back(arc.to);
                }
            }
        }

        self.level[t as usize] != UNLEVELED
    }

    /// Finds one augmenting path in the level graph and saturates it.
    /// Arcs ruled out are skipped permanently by advancing the cursor of their tail.
    fn augment(&mut self, s: Node, t: Node) -> Option<C> {
        let mut path: Vec<(Node, usize)> = Vec::new();
        let mut u = s;

        while u != t {
            let arcs = &self.adjacency[u as usize];
            let next_level = self.level[u as usize] + 1;

            let cursor = &mut self.cursor[u as usize];
            while *cursor < arcs.len() {
                let arc = arcs[*cursor];
                if arc.capacity > C::zero() && self.level[arc.to as usize] == next_level {
                    break;
                }
                *cursor += 1;
            }

            if *cursor < arcs.len() {
                path.push((u, *cursor));
                u = arcs[*cursor].to;
            } else {
                // dead end: no path to t passes through u in this phase
                self.level[u as usize] = UNLEVELED;
                let (parent, _) = path.pop()?;
                self.cursor[parent as usize] += 1;
                u = parent;
            }
        }

        let bottleneck = path
            .iter()
            .map(|&(v, i)| self.adjacency[v as usize][i].capacity)
            .reduce(|a, b| a.min_weight(b))?;

        for &(v, i) in &path {
            let arc = &mut self.adjacency[v as usize][i];
            arc.capacity = arc.capacity - bottleneck;
            let (to, rev) = (arc.to, arc.rev);
            let back = &mut self.adjacency[to as usize][rev];
            back.capacity = back.capacity + bottleneck;
        }

        Some(bottleneck)
    }

    /// Returns the nodes reachable from the source of the last [`FlowNetwork::max_flow`] call in
    /// the residual network, in increasing order. Empty if no flow was computed yet.
    pub fn min_cut(&self) -> Vec<Node> {
        let Some(s) = self.source else {
            return Vec::new();
        };

        let mut reached = NodeBitSet::new(self.number_of_nodes());
        reached.set_bit(s);
        let mut stack = vec![s];
        while let Some(u) = stack.pop() {
            for arc in &self.adjacency[u as usize] {
                if arc.capacity > C::zero() && !reached.set_bit(arc.to) {
                    stack.push(arc.to);
                }
            }
        }

        (0..self.number_of_nodes())
            .filter(|&u| reached.get_bit(u))
            .collect()
    }

    /// Returns the total capacity of all edges leaving [`FlowNetwork::min_cut`]
    pub fn min_cut_value(&self) -> C {
        let mut source_side = NodeBitSet::new(self.number_of_nodes());
        for u in self.min_cut() {
            source_side.set_bit(u);
        }

        self.edges
            .iter()
            .filter(|info| {
                let to = self.adjacency[info.from as usize][info.arc].to;
                source_side.get_bit(info.from) && !source_side.get_bit(to)
            })
            .fold(C::zero(), |acc, info| acc + info.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_distr::Uniform;
    use rand_pcg::Pcg64Mcg;

    fn clrs_network() -> FlowNetwork<u32> {
        let mut net = FlowNetwork::new(6);
        for (u, v, c) in [
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (2, 1, 4),
            (1, 3, 12),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ] {
            net.try_add_edge(u, v, c).unwrap();
        }
        net
    }

    /// Checks capacity constraints and flow conservation; returns the net outflow of `s`
    fn check_flow(net: &FlowNetwork<i64>, s: Node, t: Node) -> i64 {
        let mut excess = vec![0i64; net.number_of_nodes() as usize];
        for (i, info) in net.edges.iter().enumerate() {
            let f = net.flow_on(FlowEdge(i));
            assert!(0 <= f && f <= info.capacity);
            let to = net.residual_arcs_of(info.from)[info.arc].to;
            excess[info.from as usize] -= f;
            excess[to as usize] += f;
        }

        for u in 0..net.number_of_nodes() {
            if u != s && u != t {
                assert_eq!(excess[u as usize], 0);
            }
        }
        -excess[s as usize]
    }

    /// Minimum over all `s-t` cuts by enumerating all node subsets
    fn brute_force_min_cut(n: NumNodes, edges: &[(Node, Node, i64)], s: Node, t: Node) -> i64 {
        (0u32..1 << n)
            .filter(|set| set & (1 << s) != 0 && set & (1 << t) == 0)
            .map(|set| {
                edges
                    .iter()
                    .filter(|&&(u, v, _)| set & (1 << u) != 0 && set & (1 << v) == 0)
                    .map(|&(_, _, c)| c)
                    .sum::<i64>()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn textbook_network() {
        let mut net = clrs_network();
        assert_eq!(net.max_flow(0, 5), Ok(23));
        assert_eq!(net.min_cut_value(), 23);
        assert_eq!(net.min_cut(), vec![0, 1, 2, 4]);

        // flows are recomputed from scratch
        assert_eq!(net.max_flow(0, 5), Ok(23));
        assert_eq!(net.max_flow(5, 0), Ok(0));
        assert_eq!(net.min_cut(), vec![5]);
    }

    #[test]
    fn degenerate_inputs() {
        let mut net = clrs_network();
        assert_eq!(net.max_flow(3, 3), Ok(0));
        assert_eq!(net.min_cut_value(), 0);

        assert!(net.max_flow(0, 6).is_err());
        assert_eq!(
            net.try_add_edge(0, 7, 1),
            Err(GraphError::NodeOutOfRange { node: 7, num_nodes: 6 })
        );

        let mut net = FlowNetwork::<i32>::new(2);
        assert_eq!(
            net.try_add_edge(1, 0, -1),
            Err(GraphError::NegativeCapacity { from: 1, to: 0 })
        );
        assert_eq!(net.number_of_edges(), 0);
        assert!(net.min_cut().is_empty());

        let loop_edge = net.try_add_edge(0, 0, 5).unwrap();
        assert_eq!(
            net.residual_arcs_of(0),
            &[
                ResidualArc { to: 0, capacity: 5, rev: 1 },
                ResidualArc { to: 0, capacity: 0, rev: 0 }
            ]
        );
        let edge = net.try_add_edge(0, 1, 2).unwrap();
        assert_eq!(net.max_flow(0, 1), Ok(2));
        assert_eq!(net.flow_on(loop_edge), 0);
        assert_eq!(net.flow_on(edge), 2);
        assert_eq!(net.capacity_of(edge), 2);
    }

    #[test]
    fn from_undirected_graph() {
        let g = Graph::<f64>::undirected_from_edges(4, [(0, 1, 1.5), (1, 3, 1.0), (2, 0, 2.0), (3, 2, 0.25)]);
        let mut net = FlowNetwork::from_graph(&g).unwrap();
        assert_eq!(net.number_of_edges(), 8);
        assert_eq!(net.max_flow(3, 0), Ok(1.25));
        assert_eq!(net.min_cut_value(), 1.25);

        let negative = Graph::<i32>::directed_from_edges(2, [(0, 1, -3)]);
        assert!(FlowNetwork::from_graph(&negative).is_err());
    }

    #[test]
    fn matches_brute_force_min_cut() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);
        let capacities = Uniform::new_inclusive(0i64, 10).unwrap();

        for i in 0..100 {
            let n = rng.random_range(2..9);
            let mut generator = Gnp::new().nodes(n).prob(0.4).loops(true);
            if i % 3 != 0 {
                generator.set_directed();
            }
            let g: Graph<i64> = generator.generate_weighted(rng, &capacities);

            let mut edges: Vec<_> = g.edge_list().iter().map(|e| (e.from, e.to, e.weight)).collect();
            if g.is_undirected() {
                edges.extend(edges.clone().into_iter().map(|(u, v, c)| (v, u, c)));
            }

            let s = rng.random_range(0..n);
            let t = (s + rng.random_range(1..n)) % n;

            let mut net = FlowNetwork::from_graph(&g).unwrap();
            let flow = net.max_flow(s, t).unwrap();

            assert_eq!(flow, brute_force_min_cut(n, &edges, s, t));
            assert_eq!(flow, net.min_cut_value());
            assert_eq!(flow, check_flow(&net, s, t));

            let cut = net.min_cut();
            assert!(cut.contains(&s));
            assert!(!cut.contains(&t));
        }
    }

    #[test]
    fn long_path() {
        let n: Node = 50_000;
        let mut g = Graph::<u64>::directed(n);
        g.connect_path(0..n, 3);
        g.add_edge(0, n - 1, 4);

        let mut net = FlowNetwork::from_graph(&g).unwrap();
        assert_eq!(net.max_flow(0, n - 1), Ok(7));
        assert_eq!(net.max_flow(n - 1, 0), Ok(0));
    }
}

/*!
# Connectivity

Connected components of undirected graphs and strongly connected components (SCCs) of directed
graphs. SCCs are computed either by Tarjan's algorithm, exposed as an iterator, or by Kosaraju's
two-pass algorithm. Both are iterative and thus safe on very deep graphs.

On an undirected graph every edge can be traversed in both directions, so its SCCs coincide
with its connected components.
*/

use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components of an undirected graph.
    /// Each component is emitted in BFS order starting at its smallest node.
    ///
    /// # Errors
    /// [`GraphError::RequiresUndirected`] if the graph is directed
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u8>::undirected_from_edges(5, [(0, 1, 1), (3, 2, 1)]);
    /// let ccs: Vec<_> = g.connected_components().unwrap().collect();
    /// assert_eq!(ccs, vec![vec![0, 1], vec![2, 3], vec![4]]);
    /// ```
    fn connected_components(&self) -> Result<ConnectedComponents<'_, Self>> {
        if self.is_directed() {
            return Err(GraphError::RequiresUndirected {
                algorithm: "connected components",
            });
        }
        Ok(ConnectedComponents::new(self))
    }

    /// Returns the strongly connected components in reverse topological order (Tarjan)
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns the strongly connected components of the graph.
    /// In contrast to [`Connectivity::strongly_connected_components`], this methods includes SCCs of size 1
    /// if and only if the node has a self-loop
    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self).include_singletons(false)
    }

    /// Collects [`Connectivity::strongly_connected_components`]
    fn tarjan_scc(&self) -> Vec<Vec<Node>> {
        self.strongly_connected_components().collect()
    }

    /// Computes the strongly connected components with Kosaraju's algorithm.
    ///
    /// A first DFS records the finishing order; a second DFS on the reversed adjacency, started
    /// in reverse finishing order, discovers one component per start node. Components are
    /// returned in topological order of the condensation.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u8>::directed_from_edges(5, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 3, 1), (3, 4, 1)]);
    ///
    /// let sccs = sort_components(g.kosaraju_scc());
    /// assert_eq!(sccs, vec![vec![0, 1, 2], vec![3], vec![4]]);
    /// assert_eq!(sccs, sort_components(g.tarjan_scc()));
    /// ```
    fn kosaraju_scc(&self) -> Vec<Vec<Node>> {
        let mut visited = self.vertex_bitset_unset();
        let mut finished = Vec::with_capacity(self.len());
        let mut stack: Vec<(Node, usize)> = Vec::new();

        for s in self.vertices_range() {
            if visited.set_bit(s) {
                continue;
            }
            stack.push((s, 0));

            while let Some((u, cursor)) = stack.last_mut() {
                let u = *u;
                if let Some(nb) = self.neighborhood_of(u).get(*cursor) {
                    *cursor += 1;
                    if !visited.set_bit(nb.node) {
                        stack.push((nb.node, 0));
                    }
                } else {
                    finished.push(u);
                    stack.pop();
                }
            }
        }

        let reverse = self.reverse_adjacency();
        visited.clear_all();

        let mut components = Vec::new();
        let mut frontier = Vec::new();
        for &s in finished.iter().rev() {
            if visited.set_bit(s) {
                continue;
            }

            let mut component = Vec::new();
            frontier.push(s);
            while let Some(u) = frontier.pop() {
                component.push(u);
                for &v in &reverse[u as usize] {
                    if !visited.set_bit(v) {
                        frontier.push(v);
                    }
                }
            }
            components.push(component);
        }

        components
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Implementation of Tarjan's Algorithm for Strongly Connected Components.
/// It is designed as an iterator that emits the nodes of one strongly connected component at a
/// time. Observe that the order of nodes within a component is non-deterministic; the order of the
/// components themselves are in the reverse topological order of the SCCs (i.e. if each SCC
/// were contracted into a single node).
pub struct StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    idx: Node,

    states: Vec<NodeState>,
    potentially_unvisited: usize,

    include_singletons: bool,

    path_stack: Vec<Node>,

    call_stack: Vec<StackFrame<'a, G::Weight>>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            idx: 0,
            states: vec![Default::default(); graph.len()],
            potentially_unvisited: 0,

            include_singletons: true,

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Each node that is not part of a circle is returned as its own SCC.
    /// By setting `include = false`, those nodes are not returned.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    /// Each node that is not part of a circle is returned as its own SCC.
    /// By setting `include = false`, those nodes are not returned.
    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Starts a new search tree at the next node not visited so far
    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.graph.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited as Node;
                self.push_node(v, None);
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Pushes a pristine frame; the equivalent of a recursive call
    fn push_node(&mut self, node: Node, parent: Option<Node>) {
        self.call_stack.push(StackFrame {
            node,
            parent: parent.unwrap_or(node),
            initial_stack_len: 0,
            first_call: true,
            has_loop: false,
            neighbors: self.graph.neighborhood_of(node).iter(),
        });
    }

    fn search(&mut self) -> Option<Vec<Node>> {
        // Recursive Tarjan simulated on `call_stack`. A frame keeps its neighbor iterator, so the
        // search can be paused after emitting a component and resumed on the next call.
        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len() as Node;

                self.states[v as usize].visit(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            for nb in frame.neighbors.by_ref() {
                let w = nb.node;
                let w_state = self.states[w as usize];
                frame.has_loop |= w == v;

                if !w_state.visited {
                    self.push_node(w, Some(v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v as usize].try_lower_link(w_state.index);
                }
            }

            let (parent, initial_stack_len, has_loop) =
                (frame.parent, frame.initial_stack_len as usize, frame.has_loop);
            self.call_stack.pop();

            let state = self.states[v as usize];
            self.states[parent as usize].try_lower_link(state.low_link);

            if !state.is_root() {
                continue;
            }

            if !self.include_singletons && self.path_stack.len() == initial_stack_len + 1 && !has_loop {
                // singleton without loop: only undo the stack
                self.states[v as usize].on_stack = false;
                self.path_stack.pop();
                continue;
            }

            let component = self.path_stack.split_off(initial_stack_len);
            for &w in &component {
                self.states[w as usize].on_stack = false;
            }

            debug_assert_eq!(component.first(), Some(&v));
            return Some(component);
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    /// Returns either a vector of node ids that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: AdjacencyList {}

struct StackFrame<'a, W> {
    node: Node,
    parent: Node,
    initial_stack_len: Node,
    first_call: bool,
    has_loop: bool,
    neighbors: std::slice::Iter<'a, Neighbor<W>>,
}

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    on_stack: bool,
    index: Node,
    low_link: Node,
}

impl NodeState {
    fn visit(&mut self, u: Node) {
        debug_assert!(!self.visited);
        self.index = u;
        self.low_link = u;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: Node) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_unstable();
    components
}

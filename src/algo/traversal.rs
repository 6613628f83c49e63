/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- Abstractions (`TraversalSearch`, `TraversalTree`, `RankFromOrder`) that
  turn traversals into useful structures such as parent arrays, rankings,
  or depth arrays.
- Hop distances from one or many sources ([`BfsTree`]).
- DFS preorders, once recursive and once with an explicit stack.
- Topological ordering for directed acyclic graphs (Kahn and DFS based).
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

Traversals follow the insertion order of the adjacency arrays, so all orders are
deterministic for a fixed sequence of edge insertions. On undirected graphs every
edge can be traversed in both directions.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit,
/// a set of visited nodes, and optionally records predecessor information.
/// Parameterized by the container type for the frontier and the type of
/// items yielded (either `Node` or `PredecessorOfNode`).
///
/// Nodes are marked as visited when they are pushed. With a stack, the order is thus a valid
/// graph search order, but not necessarily the preorder of a recursive DFS; see
/// [`Traversal::dfs_preorder`] for the latter.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> = TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> WithGraphRef<G> for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), Some(self.graph.len()))
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(x) => {
                self.visited.set_bit(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Returns *true* if `u` was already discovered by the search
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken. If the node was already visited,
    /// this is a non-op.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Builder variant of [`TraversalSearch::exclude_node`].
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_nodes`].
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Consumes the traversal search and returns true iff the requested node can be visited, i.e.
    /// if there exists a (directed) path with at least one edge from the start node to u.
    ///
    /// # Warning
    /// It is undefined behavior to call the method on a partially executed iterator.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        assert_eq!(self.sequencer.cardinality(), 1);
        self.visited.clear_bit(u);
        self.next();
        self.any(|v| v.item() == u)
    }
}

/// Extension trait for traversal iterators that allows computing a ranking (iteration order)
/// of the nodes in the graph.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = Node> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position (rank, starting at 0) at which node `u`
    /// was visited.
    ///
    /// - Returns `Some(ranking)` if **all nodes of the graph** were visited.
    /// - Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::undirected_from_edges(3, [(0, 1, 1), (1, 2, 1)]);
    ///
    /// let ranking = g.bfs(0).ranking().unwrap();
    /// assert_eq!(ranking, vec![0, 1, 2]);
    /// ```
    fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE); // assert no item is repeated by iterator
            ranking[u as usize] = rank;
            rank += 1;
        }

        if rank == self.graph_ref().number_of_nodes() {
            Some(ranking)
        } else {
            None
        }
    }
}

impl<'a, G, S> RankFromOrder<'a, G> for TraversalSearch<'a, G, S, Node>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each node in the implied
    /// traversal tree into the provided slice `tree`.
    ///
    /// - For each visited node `v`, `tree[v]` is set to its predecessor.
    /// - Unvisited entries remain unchanged.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array of size `graph.len()` where
    /// each node is initially set to be its own parent.
    /// Then fills in the traversal tree structure using `parent_array_into`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::undirected_from_edges(2, [(0, 1, 1)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the iterator and computes the depth of each visited node in
    /// the traversal tree (root depth = 0).
    ///
    /// - For each visited node `v`, `depths[v]` is set accordingly.
    /// - Unvisited entries remain unchanged.
    fn depths_into(&mut self, depths: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Constructs a fresh depth array of size `graph.len()` initialized with 0.
    /// Then fills in the traversal tree depths using `depths_into`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::undirected_from_edges(3, [(0, 1, 1), (1, 2, 1)]);
    ///
    /// let depths = g.bfs_with_predecessor(0).depths();
    /// assert_eq!(depths, vec![0, 1, 2]);
    /// ```
    fn depths(&mut self) -> Vec<Node> {
        let mut depths: Vec<_> = vec![0; self.graph_ref().len()];
        self.depths_into(&mut depths);
        depths
    }
}

impl<'a, G, S> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// Iterator implementing Kahn's algorithm for topological ordering.
///
/// - Initializes a FIFO queue with all nodes of in-degree 0 (in increasing order).
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or only nodes on or behind a cycle remain.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let queue = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<'a, G> RankFromOrder<'a, G> for TopoSearch<'a, G> where G: AdjacencyList {}

/// Marker for nodes not reachable from any source in a [`BfsTree`]
pub const UNREACHABLE: NumNodes = NumNodes::MAX;

/// Hop distances and BFS parents computed by [`Traversal::bfs_distances`] and
/// [`Traversal::multi_source_bfs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    /// Number of edges on a shortest path from the nearest source, [`UNREACHABLE`] if there is none
    pub distances: Vec<NumNodes>,
    /// BFS parent of every node, [`INVALID_NODE`] for sources and unreachable nodes
    pub parents: Vec<Node>,
}

impl BfsTree {
    /// Returns the hop distance to `v` or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<NumNodes> {
        let d = self.distances[v as usize];
        (d != UNREACHABLE).then_some(d)
    }

    /// Returns *true* if `v` is reachable from some source
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize] != UNREACHABLE
    }

    /// Returns the nodes on a shortest path from the nearest source to `v` (both included)
    /// or `None` if `v` is unreachable.
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.is_reachable(v)
            .then(|| path_from_parents(&self.parents, v))
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::undirected_from_edges(2, [(0, 1, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// using a stack as frontier.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::{*, traversal::SequencedItem}};
    ///
    /// let g = Graph::<u32>::undirected_from_edges(2, [(0, 1, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a stack-based search iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Computes the number of edges on a shortest path from `source` to every node.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if `source >= n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::directed_from_edges(4, [(0, 1, 7), (1, 2, 7), (0, 2, 7)]);
    /// let tree = g.bfs_distances(0).unwrap();
    ///
    /// assert_eq!(tree.distances, vec![0, 1, 1, UNREACHABLE]);
    /// assert_eq!(tree.path_to(2), Some(vec![0, 2]));
    /// assert_eq!(tree.path_to(3), None);
    /// ```
    fn bfs_distances(&self, source: Node) -> Result<BfsTree> {
        self.multi_source_bfs([source])
    }

    /// Computes for every node the number of edges to its nearest source.
    /// All sources start at distance `0`; duplicates are ignored.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if any source is `>= n`.
    fn multi_source_bfs<I>(&self, sources: I) -> Result<BfsTree>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut distances = vec![UNREACHABLE; self.len()];
        let mut parents = vec![INVALID_NODE; self.len()];
        let mut queue = VecDeque::new();

        for s in sources {
            self.check_node(s)?;
            if distances[s as usize] == UNREACHABLE {
                distances[s as usize] = 0;
                queue.push_back(s);
            }
        }

        while let Some(u) = queue.pop_front() {
            let du = distances[u as usize];
            for v in self.neighbors_of(u) {
                if distances[v as usize] == UNREACHABLE {
                    distances[v as usize] = du + 1;
                    parents[v as usize] = u;
                    queue.push_back(v);
                }
            }
        }

        Ok(BfsTree { distances, parents })
    }

    /// Returns the nodes reachable from `source` in the preorder of a recursive depth-first
    /// search following the adjacency order.
    ///
    /// Recursion depth equals the depth of the DFS tree; prefer [`Traversal::dfs_preorder`]
    /// for deep graphs.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if `source >= n`.
    fn dfs_preorder_recursive(&self, source: Node) -> Result<Vec<Node>> {
        fn visit<G: AdjacencyList>(graph: &G, u: Node, visited: &mut NodeBitSet, order: &mut Vec<Node>) {
            visited.set_bit(u);
            order.push(u);
            for v in graph.neighbors_of(u) {
                if !visited.get_bit(v) {
                    visit(graph, v, visited, order);
                }
            }
        }

        self.check_node(source)?;
        let mut visited = self.vertex_bitset_unset();
        let mut order = Vec::new();
        visit(self, source, &mut visited, &mut order);
        Ok(order)
    }

    /// Returns the same preorder as [`Traversal::dfs_preorder_recursive`] using an explicit stack.
    /// Neighbors are pushed in reverse adjacency order and nodes are marked when popped.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if `source >= n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::undirected_from_edges(5, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (3, 4, 1)]);
    ///
    /// assert_eq!(g.dfs_preorder(0).unwrap(), vec![0, 1, 3, 2, 4]);
    /// assert_eq!(g.dfs_preorder(0), g.dfs_preorder_recursive(0));
    /// ```
    fn dfs_preorder(&self, source: Node) -> Result<Vec<Node>> {
        self.check_node(source)?;
        let mut visited = self.vertex_bitset_unset();
        let mut order = Vec::new();
        let mut stack = vec![source];

        while let Some(u) = stack.pop() {
            if visited.set_bit(u) {
                continue;
            }
            order.push(u);

            stack.extend(
                self.neighborhood_of(u)
                    .iter()
                    .rev()
                    .map(|nb| nb.node)
                    .filter(|&v| !visited.get_bit(v)),
            );
        }

        Ok(order)
    }

    /// Returns an iterator yielding nodes in topological order (Kahn's algorithm).
    ///
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns a topological order computed with Kahn's algorithm, processing nodes of in-degree
    /// zero in FIFO order, or an empty vector if the graph contains a cycle.
    ///
    /// Every undirected edge counts as a cycle of length two.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let dag = Graph::<u32>::directed_from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
    /// assert_eq!(dag.topological_sort_kahn(), vec![0, 1, 2, 3]);
    ///
    /// let cyclic = Graph::<u32>::directed_from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    /// assert!(cyclic.topological_sort_kahn().is_empty());
    /// ```
    fn topological_sort_kahn(&self) -> Vec<Node> {
        let order: Vec<Node> = self.topo_search().collect();
        if order.len() == self.len() {
            order
        } else {
            Vec::new()
        }
    }

    /// Returns a topological order computed as the reversed DFS finishing order or an empty
    /// vector if the DFS runs into a node still on its current path (i.e. the graph is cyclic).
    ///
    /// Uses an explicit stack.
    fn topological_sort_dfs(&self) -> Vec<Node> {
        const UNSEEN: u8 = 0;
        const ON_PATH: u8 = 1;
        const FINISHED: u8 = 2;

        let mut state = vec![UNSEEN; self.len()];
        let mut finished = Vec::with_capacity(self.len());
        let mut stack: Vec<(Node, usize)> = Vec::new();

        for root in self.vertices_range() {
            if state[root as usize] != UNSEEN {
                continue;
            }

            state[root as usize] = ON_PATH;
            stack.push((root, 0));

            while let Some((u, cursor)) = stack.last_mut() {
                let u = *u;
                if let Some(nb) = self.neighborhood_of(u).get(*cursor) {
                    *cursor += 1;
                    let v = nb.node;
                    match state[v as usize] {
                        ON_PATH => return Vec::new(),
                        UNSEEN => {
                            state[v as usize] = ON_PATH;
                            stack.push((v, 0));
                        }
                        _ => {}
                    }
                } else {
                    stack.pop();
                    state[u as usize] = FINISHED;
                    finished.push(u);
                }
            }
        }

        finished.reverse();
        finished
    }

    /// Returns `true` if the graph is **acyclic** (viewing undirected edges as two arcs).
    ///
    /// Implementation: runs a topological search and checks whether
    /// all nodes were output.
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }

    /// Returns `true` if node `u` lies on a directed cycle
    /// (i.e. if there is a non-trivial strongly connected component
    /// containing `u` or `u` has a self-loop).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::<u32>::directed_from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 1, 1)]);
    /// assert!(!g.is_node_on_cycle(0));
    /// assert!(g.is_node_on_cycle(1));
    /// ```
    fn is_node_on_cycle(&self, u: Node) -> bool {
        self.bfs(u).is_node_reachable(u)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

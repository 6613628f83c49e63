/*!
# Graph Generators

This module provides builder-style random graph generators and helpers to insert deterministic
substructures into existing graphs. They are mostly used to create instances for tests and
benchmarks.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p).directed()`).
3. Generate the edges via `stream()`/`generate_edges()` or a complete graph via `generate()`
   (every edge gets weight `1`) or `generate_weighted()` (weights drawn from a distribution).

Supported models include:
- G(n,p): Erdős–Rényi model with independent edge probability
- RandomTree: random trees with edges oriented away from a root

In addition, the [`RandomGraph`] trait provides one-call constructors for graphs implementing
[`GraphEdgeEditing`].

# Examples
```
use wgraphs::{prelude::*, gens::*};
use rand_distr::Uniform;

let mut rng = rand::rng();
let weights = Uniform::new(1u32, 10).unwrap();

let g: Graph<u32> = Gnp::new().nodes(20).prob(0.2).generate_weighted(&mut rng, &weights);
assert!(g.is_undirected());
assert!(g.edge_list().iter().all(|e| (1..10).contains(&e.weight)));
```
*/

use num::One;
use rand::Rng;
use rand_distr::Distribution;

use crate::prelude::*;

mod gnp;
mod random_tree;
mod substructures;

pub use gnp::*;
pub use random_tree::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen: Sized {
    /// Sets the average degree of this generator.
    fn set_avg_deg(&mut self, deg: f64);

    /// Sets the average degree of this generator.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.set_avg_deg(deg);
        self
    }
}

/// Trait for generators that can produce directed or undirected graphs.
pub trait DirectionGen: Sized {
    /// Sets the direction of the generated edges
    fn set_direction(&mut self, direction: Direction);

    /// Generate a directed graph
    fn set_directed(&mut self) {
        self.set_direction(Direction::Directed);
    }

    /// Generate an undirected graph
    fn set_undirected(&mut self) {
        self.set_direction(Direction::Undirected);
    }

    /// Sets the direction of the generated edges
    fn with_direction(mut self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    /// Generate a directed graph
    fn directed(mut self) -> Self {
        self.set_directed();
        self
    }

    /// Generate an undirected graph
    fn undirected(mut self) -> Self {
        self.set_undirected();
        self
    }
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Number of nodes of generated graphs
    fn number_of_nodes(&self) -> NumNodes;

    /// Direction of generated graphs
    fn edge_direction(&self) -> Direction;

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;

    /// Generates a list of random edges.
    fn generate_edges<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Generates a graph in which every edge has weight `1`.
    fn generate<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphEdgeEditing,
        R: Rng,
    {
        let mut graph = G::new(self.number_of_nodes(), self.edge_direction());
        graph.add_edges(
            self.stream(rng)
                .map(|Edge(u, v)| (u, v, G::Weight::one())),
        );
        graph
    }

    /// Generates a graph whose edge weights are drawn independently from `distr`.
    fn generate_weighted<G, R, D>(&self, rng: &mut R, distr: &D) -> G
    where
        G: GraphEdgeEditing,
        R: Rng,
        D: Distribution<G::Weight>,
    {
        let edges = self.generate_edges(rng);

        let mut graph = G::new(self.number_of_nodes(), self.edge_direction());
        graph.add_edges(
            edges
                .into_iter()
                .map(|Edge(u, v)| (u, v, distr.sample(rng))),
        );
        graph
    }
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: AdjacencyList {
    /// Creates a `G(n,p)` graph without self-loops where every edge has weight `1`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, direction: Direction) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph without self-loops with weights drawn from `distr`.
    fn gnp_weighted<R, D>(rng: &mut R, n: NumNodes, p: f64, direction: Direction, distr: &D) -> Self
    where
        R: Rng,
        D: Distribution<Self::Weight>;

    /// Creates a random tree with `n` nodes rooted at `0` where every edge has weight `1`.
    /// In a directed graph, all edges point away from the root.
    fn random_tree<R>(rng: &mut R, n: NumNodes, direction: Direction) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphEdgeEditing,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, direction: Direction) -> Self
    where
        R: Rng,
    {
        Gnp::new()
            .nodes(n)
            .prob(p)
            .with_direction(direction)
            .generate(rng)
    }

    fn gnp_weighted<R, D>(rng: &mut R, n: NumNodes, p: f64, direction: Direction, distr: &D) -> Self
    where
        R: Rng,
        D: Distribution<Self::Weight>,
    {
        Gnp::new()
            .nodes(n)
            .prob(p)
            .with_direction(direction)
            .generate_weighted(rng, distr)
    }

    fn random_tree<R>(rng: &mut R, n: NumNodes, direction: Direction) -> Self
    where
        R: Rng,
    {
        RandomTree::new()
            .nodes(n)
            .with_direction(direction)
            .generate(rng)
    }
}

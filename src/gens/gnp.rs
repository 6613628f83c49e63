use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge of a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// For undirected graphs, every unordered pair `{u, v}` is considered once; for directed graphs,
/// both `(u, v)` and `(v, u)` are considered. Self-loops are only generated if enabled via
/// [`Gnp::loops`]. The generated graph is undirected unless configured otherwise.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, gens::*};
///
/// let mut rng = rand::rng();
/// let g: Graph<u8> = Gnp::new().nodes(10).prob(1.0).directed().generate(&mut rng);
///
/// assert_eq!(g.number_of_edges(), 90);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
    direction: Direction,
    loops: bool,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            direction: Direction::Undirected,
            loops: false,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not within `[0, 1]` **
    pub fn set_prob(&mut self, prob: f64) {
        assert!(prob.is_valid_probility());
        self.p = GnpType::Prob(prob);
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        self.set_prob(prob);
        self
    }

    /// Whether self-loops `(u, u)` may be generated
    pub fn set_loops(&mut self, loops: bool) {
        self.loops = loops;
    }

    /// Whether self-loops `(u, u)` may be generated
    pub fn loops(mut self, loops: bool) -> Self {
        self.set_loops(loops);
        self
    }

    /// Returns the edge probability.
    /// An average degree `d` is converted to `p = min(d / n, 1)`.
    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probility of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => (d / self.n.max(1) as f64).clamp(0.0, 1.0),
        }
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn set_avg_deg(&mut self, deg: f64) {
        self.p = GnpType::AvgDeg(deg);
    }
}

impl DirectionGen for Gnp {
    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

impl GraphGenerator for Gnp {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn edge_direction(&self) -> Direction {
        self.direction
    }

    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n;
        let p = self.probability();
        let directed = self.direction == Direction::Directed;
        let loops = self.loops;

        (0..n)
            .flat_map(move |u| (if directed { 0 } else { u }..n).map(move |v| Edge(u, v)))
            .filter(move |e| loops || !e.is_loop())
            .filter(move |_| rng.random_bool(p))
    }
}

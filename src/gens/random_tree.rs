/*!
# Random Trees

Generates uniformly shuffled random recursive trees: the nodes are visited in a random order
starting at the root and every node is attached to a uniformly chosen node visited before it.

The generated edge list always
- connects all `n` nodes,
- contains exactly `n - 1` edges,
- has every edge oriented away from the root (default `0`).

# Examples

```
use wgraphs::{prelude::*, gens::*};

let mut rng = rand::rng();
let edges = RandomTree::new().nodes(5).root(2).generate_edges(&mut rng);

assert_eq!(edges.len(), 4);
assert!(edges.iter().all(|e| e.1 != 2));
```
*/

use rand::seq::SliceRandom;

use super::*;

/// Generator for random trees
#[derive(Debug, Copy, Clone)]
pub struct RandomTree {
    n: NumNodes,
    root: Node,
    direction: Direction,
}

impl Default for RandomTree {
    fn default() -> Self {
        Self {
            n: 0,
            root: 0,
            direction: Direction::Undirected,
        }
    }
}

impl RandomTree {
    /// Creates a new generator with `n = 0` and `root = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root of the tree.
    ///
    /// # Panics
    /// Generating panics if `root >= n` for `n > 0`.
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the root of the tree.
    ///
    /// # Panics
    /// Generating panics if `root >= n` for `n > 0`.
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }
}

impl NumNodesGen for RandomTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl DirectionGen for RandomTree {
    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}

impl GraphGenerator for RandomTree {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn edge_direction(&self) -> Direction {
        self.direction
    }

    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let mut order: Vec<Node> = (0..self.n).filter(|&u| u != self.root).collect();
        if self.n > 0 {
            assert!(self.root < self.n, "root {} out of range", self.root);
            order.shuffle(rng);
            order.insert(0, self.root);
        }

        (1..order.len()).map(move |i| Edge(order[rng.random_range(0..i)], order[i]))
    }
}

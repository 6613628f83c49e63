use crate::{Node, NumNodes};

/// Disjoint-set forest over the nodes `0..n` with path compression and union by rank.
///
/// # Examples
/// ```
/// use wgraphs::utils::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 0));
///
/// assert!(uf.same_set(0, 1));
/// assert!(!uf.same_set(1, 2));
/// assert_eq!(uf.number_of_sets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Returns the representative of the set containing `u`.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // path compression
        let mut v = u;
        while self.parent[v as usize] != root {
            let next = self.parent[v as usize];
            self.parent[v as usize] = root;
            v = next;
        }

        root
    }

    /// Merges the sets of `u` and `v`. Returns *false* if both already were in the same set.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);

        if ru == rv {
            return false;
        }

        let (rank_u, rank_v) = (self.rank[ru as usize], self.rank[rv as usize]);
        if rank_u < rank_v {
            self.parent[ru as usize] = rv;
        } else {
            self.parent[rv as usize] = ru;
            if rank_u == rank_v {
                self.rank[ru as usize] += 1;
            }
        }

        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Returns the current number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_of_unions() {
        let n = 100;
        let mut uf = UnionFind::new(n);

        for u in 1..n {
            assert!(uf.union(u - 1, u));
            assert_eq!(uf.number_of_sets(), n - u);
        }

        let root = uf.find(0);
        assert!((0..n).all(|u| uf.find(u) == root));
        assert!(!uf.union(0, n - 1));
    }

    #[test]
    fn ranks_stay_logarithmic() {
        let n = 1 << 10;
        let mut uf = UnionFind::new(n);

        let mut width = 1;
        while width < n {
            for u in (0..n).step_by(2 * width as usize) {
                uf.union(u, u + width);
            }
            width *= 2;
        }

        assert_eq!(uf.number_of_sets(), 1);
        assert!(uf.rank.iter().all(|&r| r <= 10));
    }
}

use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Position of an edge in the insertion order of its graph.
/// Adjacency entries refer back to their edge by this index.
pub type EdgeIndex = NumEdges;

/// Optional external identifier a caller may attach to an edge
pub type EdgeId = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge together with its weight and an optional external identifier.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge<W> {
    pub from: Node,
    pub to: Node,
    pub weight: W,
    pub id: Option<EdgeId>,
}

impl<W: Copy> WeightedEdge<W> {
    /// Creates an edge without external identifier
    pub fn new(from: Node, to: Node, weight: W) -> Self {
        Self {
            from,
            to,
            weight,
            id: None,
        }
    }

    /// Attaches the external identifier `id`
    pub fn with_id(mut self, id: EdgeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Drops the weight and returns the endpoints
    pub fn edge(&self) -> Edge {
        Edge(self.from, self.to)
    }

    /// Returns *true* if `from <= to`
    pub fn is_normalized(&self) -> bool {
        self.from <= self.to
    }

    /// Swaps endpoints such that `from <= to`
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            *self
        } else {
            self.reverse()
        }
    }

    /// Swaps both endpoints, keeping weight and identifier
    pub fn reverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.from, self.to, self.weight)
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{:?})", self.from, self.to, self.weight)?;
        if let Some(id) = self.id {
            write!(f, "#{id}")?;
        }
        Ok(())
    }
}

impl<W: Copy> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl<W: Copy> From<&WeightedEdge<W>> for WeightedEdge<W> {
    fn from(value: &WeightedEdge<W>) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(2, 2).is_loop());

        let e = WeightedEdge::new(5, 2, 7i32).with_id(11);
        let n = e.normalized();
        assert_eq!((n.from, n.to, n.weight, n.id), (2, 5, 7, Some(11)));
        assert_eq!(e.edge(), Edge(5, 2));
        assert_eq!(format!("{e:?}"), "(5,2;7)#11");
    }
}

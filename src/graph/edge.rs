//! Weighted edge representation.
//!
//! This module provides [`Edge`], a `(src, dest, weight)` triple. Edges are the
//! input format of the edge-list algorithms (Kruskal, Karger) and the output
//! format of [`Graph::edges`](crate::Graph::edges) and spanning-forest results.

use std::fmt;

use crate::graph::{VertexId, Weight};

/// A weighted edge between two vertices.
///
/// Whether an edge is directed is a property of how it is inserted into a
/// [`Graph`](crate::Graph), not of the edge value itself. The edge-list
/// algorithms treat every edge as undirected.
///
/// # Examples
///
/// ```rust
/// use edgewise::Edge;
///
/// let edge = Edge::new(0, 3, 7u32);
/// assert_eq!(edge.src.index(), 0);
/// assert_eq!(edge.dest.index(), 3);
/// assert_eq!(edge.weight, 7);
/// assert_eq!(edge.to_string(), "v0 -- v3 == 7");
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Edge<W> {
    /// Source vertex
    pub src: VertexId,
    /// Destination vertex
    pub dest: VertexId,
    /// Edge weight
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    /// Creates a new edge.
    ///
    /// # Arguments
    ///
    /// * `src` - Source vertex
    /// * `dest` - Destination vertex
    /// * `weight` - Edge weight
    #[must_use]
    pub fn new(src: usize, dest: usize, weight: W) -> Self {
        Edge {
            src: VertexId::new(src),
            dest: VertexId::new(dest),
            weight,
        }
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dest
    }
}

impl<W: Weight> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.src, self.dest, self.weight)
    }
}

impl<W: Weight> From<(usize, usize, W)> for Edge<W> {
    fn from((src, dest, weight): (usize, usize, W)) -> Self {
        Edge::new(src, dest, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_from_tuple() {
        let edge: Edge<i64> = (1usize, 2usize, -4i64).into();
        assert_eq!(edge.src, VertexId::new(1));
        assert_eq!(edge.dest, VertexId::new(2));
        assert_eq!(edge.weight, -4);
    }

    #[test]
    fn test_edge_self_loop() {
        assert!(Edge::new(2, 2, 0u32).is_self_loop());
        assert!(!Edge::new(2, 3, 0u32).is_self_loop());
    }
}

use thiserror::Error;

use crate::graph::VertexId;

/// Builds an [`Error::InvalidVertex`] for `vertex` against a graph of `count` vertices.
macro_rules! invalid_vertex {
    ($vertex:expr, $count:expr) => {
        crate::Error::InvalidVertex {
            vertex: ::core::convert::Into::<crate::graph::VertexId>::into($vertex),
            vertex_count: $count,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every public entry point validates its arguments once and reports problems through this
/// enum. Internal helpers operate on already-validated input and never produce these errors
/// themselves.
///
/// # Error Categories
///
/// ## Input Validation
/// - [`Error::InvalidVertex`] - A vertex index outside `[0, V)`
/// - [`Error::InvalidWeight`] - A non-finite float weight (NaN or infinite)
/// - [`Error::EmptyGraph`] - An algorithm was asked to run on zero vertices
///
/// ## Algorithm Preconditions
/// - [`Error::NegativeWeight`] - Dijkstra found an edge with a negative weight
/// - [`Error::RecursionLimit`] - A recursive reference implementation would exceed its depth budget
///
/// A disconnected input to Kruskal is deliberately *not* an error; see
/// [`SpanningForest::is_spanning_tree`](crate::graph::algorithms::SpanningForest::is_spanning_tree).
///
/// # Examples
///
/// ```rust
/// use edgewise::{Error, Graph};
///
/// let mut graph: Graph<u32> = Graph::new(3);
/// match graph.add_edge(0, 7, 1) {
///     Err(Error::InvalidVertex { vertex, vertex_count }) => {
///         assert_eq!(vertex.index(), 7);
///         assert_eq!(vertex_count, 3);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index was outside the valid range of the graph.
    ///
    /// Vertex identity is positional, so any index `>= vertex_count` refers to a vertex
    /// that does not exist.
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex
        vertex: VertexId,
        /// The number of vertices the operation was validated against
        vertex_count: usize,
    },

    /// The operation requires at least one vertex.
    #[error("Operation requires a graph with at least one vertex")]
    EmptyGraph,

    /// Dijkstra's algorithm was run on a graph containing a negative edge weight.
    ///
    /// Greedy frontier selection is only correct for non-negative weights, so the
    /// computation is refused instead of silently producing wrong distances.
    #[error("Edge {src} -> {dest} has a negative weight")]
    NegativeWeight {
        /// Source vertex of the offending edge
        src: VertexId,
        /// Destination vertex of the offending edge
        dest: VertexId,
    },

    /// An edge weight is not a finite value (e.g. `f64::NAN` or `f64::INFINITY`).
    #[error("Edge {src} -> {dest} has a non-finite weight")]
    InvalidWeight {
        /// Source vertex of the offending edge
        src: VertexId,
        /// Destination vertex of the offending edge
        dest: VertexId,
    },

    /// Reached the configured maximum recursion depth.
    ///
    /// Only the recursive reference implementations can produce this; the iterative
    /// defaults have no depth limit.
    #[error("Reached the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vertex_macro() {
        let err = invalid_vertex!(9usize, 4);
        assert_eq!(
            err,
            Error::InvalidVertex {
                vertex: VertexId::new(9),
                vertex_count: 4
            }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidVertex {
            vertex: VertexId::new(5),
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Vertex v5 is out of range for a graph with 3 vertices"
        );

        let err = Error::NegativeWeight {
            src: VertexId::new(0),
            dest: VertexId::new(2),
        };
        assert_eq!(err.to_string(), "Edge v0 -> v2 has a negative weight");

        assert_eq!(
            Error::RecursionLimit(64).to_string(),
            "Reached the maximum recursion level allowed - 64"
        );
    }
}

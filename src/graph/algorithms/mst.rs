//! Minimum spanning forest by Kruskal's algorithm.
//!
//! Edges are sorted by ascending weight and accepted greedily whenever their
//! endpoints lie in different [`DisjointSet`] components. Acceptance stops once
//! `V - 1` edges are taken or the list is exhausted.
//!
//! A disconnected input does not fail: the result is then a spanning *forest*
//! with one tree per component, and [`SpanningForest::is_spanning_tree`] reports
//! `false`.

use crate::{
    graph::{Edge, Weight},
    utils::DisjointSet,
    Error, Result,
};

/// Edges accepted by Kruskal's algorithm.
///
/// Edges are stored in acceptance order, which is ascending weight order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    vertex_count: usize,
}

impl<W: Weight> SpanningForest<W> {
    /// Returns the accepted edges in ascending weight order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the forest is a single tree spanning every vertex.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.accepted_count() + 1 == self.vertex_count
    }

    /// Returns the number of trees in the forest, i.e. the number of connected
    /// components of the input.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.accepted_count()
    }
}

/// Builds a minimum spanning forest from an edge list.
///
/// Every edge is treated as undirected. Self-loops are never accepted, and of
/// several parallel edges at most the lightest is.
///
/// # Arguments
///
/// * `edges` - The edge list; it is copied and sorted, the slice is untouched
/// * `vertex_count` - Number of vertices `V`; endpoints must lie in `[0, V)`
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if `vertex_count == 0`
/// - [`Error::InvalidVertex`] if an endpoint is out of range
/// - [`Error::InvalidWeight`] if a weight is not finite (NaN or infinite)
///
/// # Examples
///
/// ```rust
/// use edgewise::{graph::algorithms::kruskal_mst, Edge};
///
/// let edges = [
///     Edge::new(0, 1, 10),
///     Edge::new(0, 2, 6),
///     Edge::new(0, 3, 5),
///     Edge::new(1, 3, 15),
///     Edge::new(2, 3, 4),
/// ];
///
/// let forest = kruskal_mst(&edges, 4)?;
/// assert_eq!(forest.total_weight(), 19);
/// assert!(forest.is_spanning_tree());
/// # Ok::<(), edgewise::Error>(())
/// ```
pub fn kruskal_mst<W: Weight>(edges: &[Edge<W>], vertex_count: usize) -> Result<SpanningForest<W>> {
    if vertex_count == 0 {
        return Err(Error::EmptyGraph);
    }
    validate_edges(edges, vertex_count)?;

    let mut sorted = edges.to_vec();
    sorted.sort_unstable_by(|a, b| a.weight.cmp_weight(&b.weight));

    let target = vertex_count - 1;
    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(target);
    let mut total_weight = W::zero();

    for edge in sorted {
        if accepted.len() == target {
            break;
        }

        let root_src = sets.root(edge.src.index());
        let root_dest = sets.root(edge.dest.index());
        if root_src == root_dest {
            continue;
        }

        sets.link(root_src, root_dest);
        total_weight = total_weight.add_weight(edge.weight);
        tracing::trace!(%edge, "accepted spanning edge");
        accepted.push(edge);
    }

    tracing::debug!(
        vertex_count,
        edge_count = edges.len(),
        accepted = accepted.len(),
        %total_weight,
        "kruskal finished"
    );

    Ok(SpanningForest {
        edges: accepted,
        total_weight,
        vertex_count,
    })
}

/// Checks every endpoint against `vertex_count` and every weight for orderability.
pub(crate) fn validate_edges<W: Weight>(edges: &[Edge<W>], vertex_count: usize) -> Result<()> {
    for edge in edges {
        for endpoint in [edge.src, edge.dest] {
            if endpoint.index() >= vertex_count {
                return Err(invalid_vertex!(endpoint, vertex_count));
            }
        }
        if !edge.weight.is_valid() {
            return Err(Error::InvalidWeight {
                src: edge.src,
                dest: edge.dest,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    fn classic() -> Vec<Edge<i32>> {
        vec![
            Edge::new(0, 1, 10),
            Edge::new(0, 2, 6),
            Edge::new(0, 3, 5),
            Edge::new(1, 3, 15),
            Edge::new(2, 3, 4),
        ]
    }

    #[test]
    fn test_classic_tree() {
        let forest = kruskal_mst(&classic(), 4).unwrap();

        assert_eq!(forest.total_weight(), 19);
        assert_eq!(forest.accepted_count(), 3);
        assert!(forest.is_spanning_tree());
        assert_eq!(forest.component_count(), 1);

        let weights: Vec<i32> = forest.edges().iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![4, 5, 10]);
    }

    #[test]
    fn test_disconnected_input_yields_forest() {
        let edges = [Edge::new(0, 1, 3u32), Edge::new(2, 3, 1u32)];
        let forest = kruskal_mst(&edges, 5).unwrap();

        assert_eq!(forest.accepted_count(), 2);
        assert_eq!(forest.total_weight(), 4);
        assert!(!forest.is_spanning_tree());
        assert_eq!(forest.component_count(), 3);
    }

    #[test]
    fn test_single_vertex_is_spanning() {
        let forest = kruskal_mst::<u32>(&[], 1).unwrap();
        assert_eq!(forest.accepted_count(), 0);
        assert!(forest.is_spanning_tree());
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let edges = [
            Edge::new(0, 0, 1u64),
            Edge::new(0, 1, 7u64),
            Edge::new(1, 0, 2u64),
            Edge::new(1, 1, 0u64),
        ];
        let forest = kruskal_mst(&edges, 2).unwrap();

        assert_eq!(forest.accepted_count(), 1);
        assert_eq!(forest.total_weight(), 2);
        assert!(forest.edges().iter().all(|e| !e.is_self_loop()));
    }

    #[test]
    fn test_negative_weights_allowed() {
        let edges = [
            Edge::new(0, 1, -3),
            Edge::new(1, 2, -1),
            Edge::new(0, 2, 2),
        ];
        let forest = kruskal_mst(&edges, 3).unwrap();
        assert_eq!(forest.total_weight(), -4);
    }

    #[test]
    fn test_float_weights() {
        let edges = [
            Edge::new(0, 1, 0.5f64),
            Edge::new(1, 2, 0.25f64),
            Edge::new(0, 2, 2.0f64),
        ];
        let forest = kruskal_mst(&edges, 3).unwrap();
        assert_eq!(forest.total_weight(), 0.75);
    }

    #[test]
    fn test_errors() {
        assert_eq!(kruskal_mst::<u32>(&[], 0), Err(Error::EmptyGraph));

        assert_eq!(
            kruskal_mst(&[Edge::new(0, 4, 1u32)], 3),
            Err(Error::InvalidVertex {
                vertex: VertexId::new(4),
                vertex_count: 3
            })
        );

        assert_eq!(
            kruskal_mst(&[Edge::new(0, 1, f64::NAN)], 2),
            Err(Error::InvalidWeight {
                src: VertexId::new(0),
                dest: VertexId::new(1)
            })
        );

        assert_eq!(
            kruskal_mst(&[Edge::new(0, 1, 1.0), Edge::new(1, 2, f64::INFINITY)], 3),
            Err(Error::InvalidWeight {
                src: VertexId::new(1),
                dest: VertexId::new(2)
            })
        );
    }

    #[test]
    fn test_input_slice_untouched() {
        let edges = classic();
        let before = edges.clone();
        kruskal_mst(&edges, 4).unwrap();
        assert_eq!(edges, before);
    }
}

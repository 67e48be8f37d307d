//! Connected components by repeated breadth-first search.
//!
//! Vertices are scanned in index order; every vertex not yet reached launches a
//! new search that floods its whole component. The visited set is shared across
//! launches within one call, so each vertex is expanded exactly once.
//!
//! Searches follow adjacency entries as stored. For graphs built from undirected
//! edges this yields the usual connected components; on directed graphs a
//! component is everything reachable from its lowest-index unvisited vertex.

use std::collections::VecDeque;

use crate::{
    graph::{Adjacency, VertexId},
    utils::BitSet,
};

/// Counts the connected components of the graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use edgewise::{graph::algorithms::count_connected_components, Graph};
///
/// let mut graph: Graph<u32> = Graph::new(5);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(2, 3, 1)?;
/// // vertex 4 is isolated
///
/// assert_eq!(count_connected_components(&graph), 3);
/// # Ok::<(), edgewise::Error>(())
/// ```
pub fn count_connected_components<G: Adjacency>(graph: &G) -> usize {
    let mut visited = BitSet::new(graph.vertex_count());
    let mut queue = VecDeque::new();
    let mut count = 0;

    for root in 0..graph.vertex_count() {
        if visited.insert(root) {
            count += 1;
            flood(graph, VertexId::new(root), &mut visited, &mut queue, |_| {});
        }
    }

    count
}

/// Returns the connected components of the graph.
///
/// Components are ordered by their lowest vertex; vertices inside a component
/// appear in the BFS order of the launch that discovered them.
pub fn connected_components<G: Adjacency>(graph: &G) -> Vec<Vec<VertexId>> {
    let mut visited = BitSet::new(graph.vertex_count());
    let mut queue = VecDeque::new();
    let mut components = Vec::new();

    for root in 0..graph.vertex_count() {
        if visited.insert(root) {
            let mut members = Vec::new();
            flood(graph, VertexId::new(root), &mut visited, &mut queue, |v| {
                members.push(v);
            });
            components.push(members);
        }
    }

    components
}

/// BFS from an already-marked `root`, calling `on_visit` for every dequeued vertex.
fn flood<G, F>(
    graph: &G,
    root: VertexId,
    visited: &mut BitSet,
    queue: &mut VecDeque<VertexId>,
    mut on_visit: F,
) where
    G: Adjacency,
    F: FnMut(VertexId),
{
    queue.push_back(root);
    while let Some(vertex) = queue.pop_front() {
        on_visit(vertex);
        for &(neighbor, _) in graph.adjacent(vertex) {
            if visited.insert(neighbor.index()) {
                queue.push_back(neighbor);
            }
        }
    }
}

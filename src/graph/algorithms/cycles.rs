//! Cycle detection by three-colour depth-first search.
//!
//! Every vertex starts white. Entering a vertex paints it
//! gray (it is on the active path); leaving it after all neighbours
//! are explored paints it black. An edge into a gray vertex is a
//! back-edge and closes a cycle. Black vertices are never entered again.
//!
//! The search keeps an explicit stack of `(vertex, next neighbour)` frames
//! instead of recursing, so deep graphs cannot exhaust the call stack.
//!
//! The colouring is defined on directed adjacency. An undirected edge is stored
//! as two opposite entries and is therefore reported as a cycle of length two.

use crate::graph::{Adjacency, VertexId};

/// Search state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet reached
    White,
    /// On the active search path
    Gray,
    /// Fully processed
    Black,
}

/// Returns `true` if the graph contains a directed cycle.
///
/// All vertices are used as search roots, so cycles unreachable from vertex 0
/// are still found.
///
/// # Examples
///
/// ```rust
/// use edgewise::{graph::algorithms::has_cycle, Graph};
///
/// let mut graph: Graph<u32> = Graph::new(3);
/// graph.add_directed_edge(0, 1, 1)?;
/// graph.add_directed_edge(1, 2, 1)?;
/// assert!(!has_cycle(&graph));
///
/// graph.add_directed_edge(2, 0, 1)?;
/// assert!(has_cycle(&graph));
/// # Ok::<(), edgewise::Error>(())
/// ```
pub fn has_cycle<G: Adjacency>(graph: &G) -> bool {
    find_cycle(graph).is_some()
}

/// Finds a directed cycle, if one exists.
///
/// # Returns
///
/// The vertices of the first cycle found, in edge order and closed: the first
/// and last entries are the same vertex. A self-loop on `v` yields `[v, v]`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn find_cycle<G: Adjacency>(graph: &G) -> Option<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();
    let mut color = vec![Color::White; vertex_count];
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..vertex_count {
        if color[root] != Color::White {
            continue;
        }

        color[root] = Color::Gray;
        stack.push((VertexId::new(root), 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            let neighbors = graph.adjacent(vertex);

            let Some(&(next, _)) = neighbors.get(cursor) else {
                color[vertex.index()] = Color::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match color[next.index()] {
                Color::White => {
                    color[next.index()] = Color::Gray;
                    stack.push((next, 0));
                }
                Color::Gray => {
                    // Gray vertices are exactly the ones on the stack
                    let start = stack.iter().position(|&(v, _)| v == next).unwrap_or(0);
                    let mut cycle: Vec<VertexId> = stack[start..].iter().map(|&(v, _)| v).collect();
                    cycle.push(next);
                    return Some(cycle);
                }
                Color::Black => {}
            }
        }
    }

    None
}

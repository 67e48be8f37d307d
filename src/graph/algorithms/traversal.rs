//! Breadth-first and depth-first traversal.
//!
//! # Algorithms
//!
//! - [`bfs`] - Breadth-first search iterator
//! - [`dfs`] - Iterative depth-first search iterator (pre-order)
//! - [`dfs_recursive`] - Recursive reference DFS, depth-bounded
//! - [`hop_distances`] - BFS level of every vertex
//! - [`shortest_hop_path`] - Unweighted shortest path via BFS parents
//!
//! # Ordering guarantees
//!
//! [`bfs`] marks a vertex visited when it is enqueued, so each reachable vertex is
//! yielded exactly once and in non-decreasing hop distance from the start.
//!
//! [`dfs`] marks a vertex visited when it is popped and pushes unvisited
//! neighbours in reverse adjacency order. Its output is therefore identical to
//! [`dfs_recursive`] for the same adjacency insertion order.

use std::collections::VecDeque;

use crate::{
    graph::{Adjacency, VertexId},
    utils::BitSet,
    Error, Result,
};

/// Depth-first search iterator over graph vertices.
///
/// Performs an iterative pre-order traversal with an explicit stack, visiting
/// every vertex reachable from the start exactly once. A vertex may sit on the
/// stack more than once; duplicates are discarded when popped.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Adjacency`]
pub struct DfsIterator<'g, G: Adjacency> {
    graph: &'g G,
    stack: Vec<VertexId>,
    visited: BitSet,
}

impl<'g, G: Adjacency> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        let stack = if start.index() < vertex_count {
            vec![start]
        } else {
            Vec::new()
        };

        DfsIterator {
            graph,
            stack,
            visited: BitSet::new(vertex_count),
        }
    }
}

impl<G: Adjacency> Iterator for DfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if !self.visited.insert(vertex.index()) {
                continue;
            }

            // Reverse push so the first neighbour is popped first
            for &(neighbor, _) in self.graph.adjacent(vertex).iter().rev() {
                if !self.visited.contains(neighbor.index()) {
                    self.stack.push(neighbor);
                }
            }

            return Some(vertex);
        }
        None
    }
}

/// Returns an iterative depth-first search iterator starting from `start`.
///
/// If `start` is not a vertex of the graph the iterator is empty.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) worst case for the stack, which may hold duplicates
///
/// # Examples
///
/// ```rust
/// use edgewise::{graph::algorithms::dfs, Graph, VertexId};
///
/// let mut graph: Graph<u32> = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(1, 3, 1)?;
///
/// let order: Vec<usize> = dfs(&graph, VertexId::new(0)).map(VertexId::index).collect();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// # Ok::<(), edgewise::Error>(())
/// ```
pub fn dfs<G: Adjacency>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph vertices.
///
/// Explores all vertices at hop distance `d` before any vertex at distance `d + 1`.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Adjacency`]
pub struct BfsIterator<'g, G: Adjacency> {
    graph: &'g G,
    queue: VecDeque<VertexId>,
    visited: BitSet,
}

impl<'g, G: Adjacency> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        let mut visited = BitSet::new(vertex_count);
        let mut queue = VecDeque::new();

        if start.index() < vertex_count {
            visited.insert(start.index());
            queue.push_back(start);
        }

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Adjacency> Iterator for BfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        // Mark on enqueue so no vertex is queued twice
        for &(neighbor, _) in self.graph.adjacent(vertex) {
            if self.visited.insert(neighbor.index()) {
                self.queue.push_back(neighbor);
            }
        }

        Some(vertex)
    }
}

/// Returns a breadth-first search iterator starting from `start`.
///
/// If `start` is not a vertex of the graph the iterator is empty.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use edgewise::{graph::algorithms::bfs, Graph, VertexId};
///
/// let mut graph: Graph<u32> = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(1, 3, 1)?;
///
/// let order: Vec<usize> = bfs(&graph, VertexId::new(0)).map(VertexId::index).collect();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// # Ok::<(), edgewise::Error>(())
/// ```
pub fn bfs<G: Adjacency>(graph: &G, start: VertexId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Recursive depth-first search, kept as the reference for [`dfs`].
///
/// Marks the current vertex, records it, then recurses into each unvisited
/// neighbour in adjacency insertion order.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting vertex; an out-of-range start yields an empty order
/// * `max_depth` - Maximum recursion depth; the start vertex is depth 1
///
/// # Errors
///
/// Returns [`Error::RecursionLimit`] if the traversal would nest deeper than
/// `max_depth` frames.
pub fn dfs_recursive<G: Adjacency>(
    graph: &G,
    start: VertexId,
    max_depth: usize,
) -> Result<Vec<VertexId>> {
    fn visit<G: Adjacency>(
        graph: &G,
        vertex: VertexId,
        depth: usize,
        max_depth: usize,
        visited: &mut BitSet,
        order: &mut Vec<VertexId>,
    ) -> Result<()> {
        if depth > max_depth {
            return Err(Error::RecursionLimit(max_depth));
        }

        visited.insert(vertex.index());
        order.push(vertex);

        for &(neighbor, _) in graph.adjacent(vertex) {
            if !visited.contains(neighbor.index()) {
                visit(graph, neighbor, depth + 1, max_depth, visited, order)?;
            }
        }
        Ok(())
    }

    let mut order = Vec::new();
    if start.index() >= graph.vertex_count() {
        return Ok(order);
    }

    let mut visited = BitSet::new(graph.vertex_count());
    visit(graph, start, 1, max_depth, &mut visited, &mut order)?;
    Ok(order)
}

/// Computes the BFS level (number of edges on a shortest path) of every vertex.
///
/// # Returns
///
/// A table of size `V` where entry `v` is `Some(hops)` if `v` is reachable from
/// `start` and `None` otherwise. An out-of-range `start` reaches nothing.
pub fn hop_distances<G: Adjacency>(graph: &G, start: VertexId) -> Vec<Option<usize>> {
    let mut levels = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    if start.index() >= levels.len() {
        return levels;
    }

    levels[start.index()] = Some(0);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        let next_level = levels[vertex.index()].map(|level| level + 1);
        for &(neighbor, _) in graph.adjacent(vertex) {
            if levels[neighbor.index()].is_none() {
                levels[neighbor.index()] = next_level;
                queue.push_back(neighbor);
            }
        }
    }

    levels
}

/// Finds a path with the fewest edges from `start` to `end`, ignoring weights.
///
/// The search stops as soon as `end` is dequeued; the path is rebuilt by walking
/// BFS parent pointers back from `end`.
///
/// # Returns
///
/// `Some(path)` with `path[0] == start` and `path.last() == end`, or `None` if
/// `end` is unreachable or either endpoint is out of range.
pub fn shortest_hop_path<G: Adjacency>(
    graph: &G,
    start: VertexId,
    end: VertexId,
) -> Option<Vec<VertexId>> {
    if start.index() >= graph.vertex_count() || end.index() >= graph.vertex_count() {
        return None;
    }

    let mut parent: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut visited = BitSet::new(graph.vertex_count());
    let mut queue = VecDeque::new();

    visited.insert(start.index());
    queue.push_back(start);

    let mut found = false;
    while let Some(vertex) = queue.pop_front() {
        if vertex == end {
            found = true;
            break;
        }
        for &(neighbor, _) in graph.adjacent(vertex) {
            if visited.insert(neighbor.index()) {
                parent[neighbor.index()] = Some(vertex);
                queue.push_back(neighbor);
            }
        }
    }

    if !found {
        return None;
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(previous) = parent[current.index()] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Some(path)
}

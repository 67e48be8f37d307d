//! Single-source shortest paths (Dijkstra).
//!
//! Distances start at "unreachable" everywhere except the source, which is zero.
//! The engine repeatedly finalizes the non-finalized vertex with the smallest
//! tentative distance and relaxes its non-finalized neighbours:
//!
//! ```text
//! dist[v] = min(dist[v], dist[u] + w(u, v))
//! ```
//!
//! Two frontier strategies are available (see [`FrontierSelection`]):
//!
//! | Strategy | Time | Notes |
//! |----------|------|-------|
//! | Linear scan | O(V² + E) | Exactly `V - 1` selection rounds; default |
//! | Binary heap | O((V + E) log V) | Lazy deletion of stale entries |
//!
//! Both produce identical distances. Greedy finalization is only correct for
//! non-negative weights; [`find_negative_edge`] lets callers reject other inputs
//! up front.

use std::{cmp::Ordering, collections::BinaryHeap, fmt};

use crate::{
    config::FrontierSelection,
    graph::{Adjacency, VertexId, Weight},
    utils::BitSet,
};

/// Tentative or final distance of a vertex from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance<W> {
    /// Reachable at the given total weight
    Finite(W),
    /// No path from the source
    Unreachable,
}

impl<W: Weight> Distance<W> {
    /// Returns `true` for [`Distance::Finite`].
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite distance, if any.
    #[must_use]
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(weight) => Some(weight),
            Distance::Unreachable => None,
        }
    }
}

impl<W: Weight> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{weight}"),
            Distance::Unreachable => write!(f, "INFINITY"),
        }
    }
}

/// Result of a single-source shortest path computation.
///
/// Holds one [`Distance`] and one predecessor per vertex. The predecessor of a
/// vertex is its parent in the shortest-path tree; the source and unreachable
/// vertices have none.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: VertexId,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<VertexId>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the distance table, indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// Consumes the result and returns the distance table.
    #[must_use]
    pub fn into_distances(self) -> Vec<Distance<W>> {
        self.distances
    }

    /// Returns the distance of `vertex`, or `None` if `vertex` is out of range.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<Distance<W>> {
        self.distances.get(vertex).copied()
    }

    /// Returns `true` if `vertex` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some_and(|d| d.is_reachable())
    }

    /// Returns the shortest-path-tree parent of `vertex`.
    #[must_use]
    pub fn predecessor(&self, vertex: usize) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Reconstructs a shortest path from the source to `vertex`.
    ///
    /// # Returns
    ///
    /// The vertices from the source to `vertex` inclusive, or `None` if `vertex`
    /// is unreachable or out of range.
    #[must_use]
    pub fn path_to(&self, vertex: usize) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![VertexId::new(vertex)];
        let mut current = vertex;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous.index();
        }
        path.reverse();
        Some(path)
    }
}

/// Returns the first adjacency entry with a negative weight, as `(src, dest)`.
pub fn find_negative_edge<G: Adjacency>(graph: &G) -> Option<(VertexId, VertexId)> {
    (0..graph.vertex_count()).find_map(|u| {
        let src = VertexId::new(u);
        graph
            .adjacent(src)
            .iter()
            .find(|(_, weight)| weight.is_negative())
            .map(|&(dest, _)| (src, dest))
    })
}

/// Computes shortest distances from `source` to every vertex.
///
/// # Arguments
///
/// * `graph` - The graph; all weights must be non-negative
/// * `source` - The source vertex; if out of range every vertex is unreachable
/// * `frontier` - How the next vertex to finalize is chosen
///
/// # Examples
///
/// ```rust
/// use edgewise::{
///     graph::algorithms::{dijkstra, Distance},
///     FrontierSelection, Graph, VertexId,
/// };
///
/// let mut graph: Graph<u32> = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(0, 2, 4)?;
/// graph.add_edge(2, 3, 1)?;
///
/// let paths = dijkstra(&graph, VertexId::new(0), FrontierSelection::LinearScan);
/// let expected: Vec<Distance<u32>> = [0, 1, 3, 4].into_iter().map(Distance::Finite).collect();
/// assert_eq!(paths.distances(), expected.as_slice());
/// # Ok::<(), edgewise::Error>(())
/// ```
pub fn dijkstra<G: Adjacency>(
    graph: &G,
    source: VertexId,
    frontier: FrontierSelection,
) -> ShortestPaths<G::Weight> {
    let vertex_count = graph.vertex_count();
    let mut state = DijkstraState {
        dist: vec![None; vertex_count],
        predecessors: vec![None; vertex_count],
        finalized: BitSet::new(vertex_count),
    };

    // An out-of-range source leaves every vertex unreachable
    if source.index() < vertex_count {
        state.dist[source.index()] = Some(G::Weight::zero());
        match frontier {
            FrontierSelection::LinearScan => state.run_linear(graph),
            FrontierSelection::BinaryHeap => state.run_heap(graph, source),
        }
    }

    tracing::debug!(
        source = %source,
        reachable = state.dist.iter().filter(|d| d.is_some()).count(),
        %frontier,
        "dijkstra finished"
    );

    ShortestPaths {
        source,
        distances: state
            .dist
            .into_iter()
            .map(|d| d.map_or(Distance::Unreachable, Distance::Finite))
            .collect(),
        predecessors: state.predecessors,
    }
}

/// Per-invocation working state.
struct DijkstraState<W> {
    /// Tentative distances; `None` is unreachable
    dist: Vec<Option<W>>,
    /// Shortest-path-tree parents
    predecessors: Vec<Option<VertexId>>,
    /// Vertices whose distance is final
    finalized: BitSet,
}

impl<W: Weight> DijkstraState<W> {
    fn run_linear<G: Adjacency<Weight = W>>(&mut self, graph: &G) {
        for _ in 0..graph.vertex_count().saturating_sub(1) {
            // Every remaining vertex unreachable: nothing left to relax
            let Some(u) = self.select_min() else {
                break;
            };
            self.finalized.insert(u.index());
            self.relax_from(graph, u);
        }
    }

    fn run_heap<G: Adjacency<Weight = W>>(&mut self, graph: &G, source: VertexId) {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry {
            dist: W::zero(),
            vertex: source,
        });

        while let Some(FrontierEntry { vertex, .. }) = heap.pop() {
            if !self.finalized.insert(vertex.index()) {
                continue;
            }
            for (next, dist) in self.relax_from(graph, vertex) {
                heap.push(FrontierEntry { dist, vertex: next });
            }
        }
    }

    /// Linear scan for the non-finalized vertex with the smallest finite distance.
    fn select_min(&self) -> Option<VertexId> {
        let mut best: Option<(usize, W)> = None;
        for (v, dist) in self.dist.iter().enumerate() {
            if self.finalized.contains(v) {
                continue;
            }
            let Some(d) = *dist else {
                continue;
            };
            match best {
                Some((_, current)) if current <= d => {}
                _ => best = Some((v, d)),
            }
        }
        best.map(|(v, _)| VertexId::new(v))
    }

    /// Relaxes every non-finalized neighbour of `u`, returning the improved entries.
    fn relax_from<G: Adjacency<Weight = W>>(
        &mut self,
        graph: &G,
        u: VertexId,
    ) -> Vec<(VertexId, W)> {
        let Some(base) = self.dist[u.index()] else {
            return Vec::new();
        };

        let mut improved = Vec::new();
        for &(v, weight) in graph.adjacent(u) {
            if self.finalized.contains(v.index()) {
                continue;
            }
            let candidate = base.add_weight(weight);
            let better = match self.dist[v.index()] {
                Some(current) => candidate < current,
                None => true,
            };
            if better {
                tracing::trace!(from = %u, to = %v, %candidate, "relax");
                self.dist[v.index()] = Some(candidate);
                self.predecessors[v.index()] = Some(u);
                improved.push((v, candidate));
            }
        }
        improved
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first.
struct FrontierEntry<W> {
    dist: W,
    vertex: VertexId,
}

impl<W: Weight> Ord for FrontierEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp_weight(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<W: Weight> PartialOrd for FrontierEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for FrontierEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for FrontierEntry<W> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;
    use strum::IntoEnumIterator;

    fn finite(raw: &[u32]) -> Vec<Distance<u32>> {
        raw.iter().copied().map(Distance::Finite).collect()
    }

    fn sample_graph() -> Graph<u32> {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(0, 2, 4).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph
    }

    #[test]
    fn test_sample_distances() {
        let graph = sample_graph();
        for frontier in FrontierSelection::iter() {
            let paths = dijkstra(&graph, VertexId::new(0), frontier);
            assert_eq!(paths.distances(), finite(&[0, 1, 3, 4]).as_slice());
            assert_eq!(paths.source(), VertexId::new(0));
        }
    }

    #[test]
    fn test_path_reconstruction() {
        let graph = sample_graph();
        let paths = dijkstra(&graph, VertexId::new(0), FrontierSelection::LinearScan);

        let path: Vec<usize> = paths.path_to(3).unwrap().iter().map(|v| v.index()).collect();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(paths.predecessor(0), None);
        assert_eq!(paths.predecessor(2), Some(VertexId::new(1)));
        assert_eq!(paths.path_to(0), Some(vec![VertexId::new(0)]));
        assert_eq!(paths.path_to(17), None);
    }

    #[test]
    fn test_unreachable_sentinel() {
        let mut graph: Graph<u32> = Graph::new(4);
        graph.add_directed_edge(0, 1, 5).unwrap();
        graph.add_directed_edge(2, 0, 1).unwrap();

        for frontier in FrontierSelection::iter() {
            let paths = dijkstra(&graph, VertexId::new(0), frontier);
            assert_eq!(
                paths.distances(),
                &[
                    Distance::Finite(0),
                    Distance::Finite(5),
                    Distance::Unreachable,
                    Distance::Unreachable
                ]
            );
            assert!(!paths.is_reachable(2));
            assert_eq!(paths.path_to(3), None);
        }
    }

    #[test]
    fn test_float_weights() {
        let mut graph: Graph<f64> = Graph::new(3);
        graph.add_edge(0, 1, 0.25).unwrap();
        graph.add_edge(1, 2, 0.5).unwrap();
        graph.add_edge(0, 2, 1.0).unwrap();

        let paths = dijkstra(&graph, VertexId::new(0), FrontierSelection::BinaryHeap);
        assert_eq!(paths.distance(2), Some(Distance::Finite(0.75)));
    }

    #[test]
    fn test_multi_edge_takes_lighter() {
        let mut graph: Graph<u64> = Graph::new(2);
        graph.add_edge(0, 1, 9).unwrap();
        graph.add_edge(0, 1, 2).unwrap();

        let paths = dijkstra(&graph, VertexId::new(1), FrontierSelection::LinearScan);
        assert_eq!(paths.distance(0), Some(Distance::Finite(2)));
    }

    #[test]
    fn test_single_vertex() {
        let graph: Graph<u32> = Graph::new(1);
        let paths = dijkstra(&graph, VertexId::new(0), FrontierSelection::LinearScan);
        assert_eq!(paths.distances(), finite(&[0]).as_slice());
    }

    #[test]
    fn test_strategies_agree_on_dense_graph() {
        let mut graph: Graph<u32> = Graph::new(12);
        for u in 0..12usize {
            for v in (u + 1)..12 {
                let weight = ((u * 7 + v * 13) % 17 + 1) as u32;
                graph.add_edge(u, v, weight).unwrap();
            }
        }

        for source in 0..12 {
            let linear = dijkstra(&graph, VertexId::new(source), FrontierSelection::LinearScan);
            let heap = dijkstra(&graph, VertexId::new(source), FrontierSelection::BinaryHeap);
            assert_eq!(linear.distances(), heap.distances());
        }
    }

    #[test]
    fn test_out_of_range_source_is_all_unreachable() {
        let graph = sample_graph();
        for frontier in FrontierSelection::iter() {
            let paths = dijkstra(&graph, VertexId::new(99), frontier);
            assert_eq!(paths.distances().len(), 4);
            assert!(paths.distances().iter().all(|d| !d.is_reachable()));
            assert_eq!(paths.path_to(0), None);
        }
    }

    #[test]
    fn test_find_negative_edge() {
        let mut graph: Graph<i32> = Graph::new(3);
        graph.add_directed_edge(0, 1, 3).unwrap();
        assert_eq!(find_negative_edge(&graph), None);

        graph.add_directed_edge(1, 2, -1).unwrap();
        assert_eq!(
            find_negative_edge(&graph),
            Some((VertexId::new(1), VertexId::new(2)))
        );
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Finite(12u32).to_string(), "12");
        assert_eq!(Distance::<u32>::Unreachable.to_string(), "INFINITY");
        assert_eq!(Distance::Finite(3u32).finite(), Some(3));
    }
}
